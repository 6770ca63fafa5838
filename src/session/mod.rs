pub mod store;

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthResponse;
use crate::error::ApiError;
use crate::models::User;
use store::SessionStore;

/// The client-held credential bundle. Persisted as a single JSON document
/// under the API's fixed camelCase key names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub access_token_expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub refresh_token_expires: Option<DateTime<Utc>>,
    pub user_email: String,
    pub user_data: User,
}

impl Session {
    pub fn from_auth_response(resp: &AuthResponse) -> Self {
        Session {
            access_token: resp.tokens.access.token.clone(),
            refresh_token: resp.tokens.refresh.token.clone(),
            access_token_expires: Some(resp.tokens.access.expires),
            refresh_token_expires: Some(resp.tokens.refresh.expires),
            user_email: resp.user.email.clone(),
            user_data: resp.user.clone(),
        }
    }
}

/// Shared view over the persisted session. The store is injectable so tests
/// can substitute an in-memory one; reads are answered from a cached copy
/// kept in sync with every write.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Inner>,
}

struct Inner {
    store: Box<dyn SessionStore>,
    cached: Mutex<Option<Session>>,
}

impl SessionHandle {
    /// Wrap a store, reading whatever session it currently holds.
    pub fn new(store: Box<dyn SessionStore>) -> Result<Self, ApiError> {
        let cached = store.load()?;
        Ok(SessionHandle {
            inner: Arc::new(Inner {
                store,
                cached: Mutex::new(cached),
            }),
        })
    }

    /// True iff an access token exists and its recorded expiry is strictly
    /// in the future. A missing expiry fails closed. No network call.
    pub fn is_authenticated(&self) -> bool {
        let cached = self.inner.cached.lock().expect("session cache poisoned");
        match cached.as_ref() {
            Some(s) => match s.access_token_expires {
                Some(expires) => expires > Utc::now(),
                None => false,
            },
            None => false,
        }
    }

    /// Same check against the refresh token's recorded expiry.
    pub fn is_refresh_token_valid(&self) -> bool {
        let cached = self.inner.cached.lock().expect("session cache poisoned");
        match cached.as_ref() {
            Some(s) => match s.refresh_token_expires {
                Some(expires) => expires > Utc::now(),
                None => false,
            },
            None => false,
        }
    }

    /// Overwrite all persisted fields at once.
    pub fn set_session(&self, session: Session) -> Result<(), ApiError> {
        self.inner.store.save(&session)?;
        let mut cached = self.inner.cached.lock().expect("session cache poisoned");
        *cached = Some(session);
        Ok(())
    }

    /// Remove all persisted fields. Idempotent.
    pub fn clear(&self) -> Result<(), ApiError> {
        self.inner.store.clear()?;
        let mut cached = self.inner.cached.lock().expect("session cache poisoned");
        *cached = None;
        Ok(())
    }

    pub fn access_token(&self) -> Option<String> {
        let cached = self.inner.cached.lock().expect("session cache poisoned");
        cached.as_ref().map(|s| s.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        let cached = self.inner.cached.lock().expect("session cache poisoned");
        cached.as_ref().map(|s| s.refresh_token.clone())
    }

    pub fn user(&self) -> Option<User> {
        let cached = self.inner.cached.lock().expect("session cache poisoned");
        cached.as_ref().map(|s| s.user_data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::store::MemorySessionStore;
    use super::*;
    use chrono::Duration;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "agent@example.com".to_string(),
            name: None,
            role: None,
            is_email_verified: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn session(access_expires: Option<DateTime<Utc>>, refresh_expires: Option<DateTime<Utc>>) -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            access_token_expires: access_expires,
            refresh_token_expires: refresh_expires,
            user_email: "agent@example.com".to_string(),
            user_data: user(),
        }
    }

    fn handle() -> SessionHandle {
        SessionHandle::new(Box::new(MemorySessionStore::new())).unwrap()
    }

    #[test]
    fn authenticated_when_expiry_in_future() {
        let h = handle();
        h.set_session(session(
            Some(Utc::now() + Duration::minutes(5)),
            Some(Utc::now() + Duration::days(7)),
        ))
        .unwrap();
        assert!(h.is_authenticated());
        assert!(h.is_refresh_token_valid());
    }

    #[test]
    fn not_authenticated_when_expiry_in_past() {
        let h = handle();
        h.set_session(session(
            Some(Utc::now() - Duration::minutes(5)),
            Some(Utc::now() - Duration::minutes(5)),
        ))
        .unwrap();
        assert!(!h.is_authenticated());
        assert!(!h.is_refresh_token_valid());
    }

    #[test]
    fn missing_expiry_fails_closed_even_with_token_present() {
        let h = handle();
        h.set_session(session(None, None)).unwrap();
        assert!(h.access_token().is_some());
        assert!(!h.is_authenticated());
        assert!(!h.is_refresh_token_valid());
    }

    #[test]
    fn no_session_means_not_authenticated() {
        let h = handle();
        assert!(!h.is_authenticated());
        assert!(h.access_token().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let h = handle();
        h.set_session(session(Some(Utc::now() + Duration::minutes(5)), None))
            .unwrap();
        h.clear().unwrap();
        h.clear().unwrap();
        assert!(!h.is_authenticated());
        assert!(h.user().is_none());
    }
}
