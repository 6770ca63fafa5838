use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::ApiError;

use super::Session;

/// Persistence seam for the session. File-backed in production, in-memory
/// in tests.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, ApiError>;
    fn save(&self, session: &Session) -> Result<(), ApiError>;
    fn clear(&self) -> Result<(), ApiError>;
}

/// Stores the session as a JSON document on disk. Writes go through a
/// temp file in the same directory followed by a rename.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionStore { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, ApiError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // An unreadable session file is treated as logged out.
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding malformed session file");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        let json = serde_json::to_vec_pretty(session)?;
        let tmp = self.temp_path();
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and short-lived tools.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, ApiError> {
        Ok(self.session.lock().expect("store poisoned").clone())
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        *self.session.lock().expect("store poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        *self.session.lock().expect("store poisoned") = None;
        Ok(())
    }
}
