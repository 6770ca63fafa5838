use std::path::Path;

use bytes::Bytes;
use reqwest::multipart::Part;

use crate::error::ApiError;

/// An in-memory file attachment for multipart submissions (property
/// images, application CVs).
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn from_bytes(file_name: &str, content_type: &str, bytes: Bytes) -> Self {
        UploadFile {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    /// Read a file from disk, inferring the content type from its
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let content_type = content_type_for(path).to_string();
        Ok(UploadFile {
            file_name,
            content_type,
            bytes: Bytes::from(bytes),
        })
    }

    pub(crate) fn into_part(self) -> Result<Part, ApiError> {
        Part::bytes(self.bytes.to_vec())
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| ApiError::Validation(format!("Invalid content type: {e}")))
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// `{base}/file/download/{path}` — authenticated CV download endpoint.
pub fn download_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/file/download/{path}")
}

/// `{base}/file/preview/property/{path}` — public property image preview.
pub fn property_image_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/file/preview/property/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_urls() {
        assert_eq!(
            download_url("http://localhost:3000", "cvs/a.pdf"),
            "http://localhost:3000/file/download/cvs/a.pdf"
        );
        assert_eq!(
            property_image_url("http://localhost:3000", "p1.jpg"),
            "http://localhost:3000/file/preview/property/p1.jpg"
        );
    }

    #[test]
    fn content_type_inference() {
        assert_eq!(content_type_for(Path::new("cv.PDF")), "application/pdf");
        assert_eq!(content_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.bin")), "application/octet-stream");
    }
}
