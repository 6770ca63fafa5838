use std::sync::OnceLock;

use regex::Regex;

use crate::error::ApiError;
use crate::files::UploadFile;

pub const MAX_CV_BYTES: usize = 5 * 1024 * 1024;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://\S+\.\S+").expect("url regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

/// Superficial URL shape check, used for LinkedIn links and the like.
pub fn is_valid_url(url: &str) -> bool {
    url_re().is_match(url)
}

pub fn require_field(value: &str, message: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}

/// CV uploads must be PDF and at most 5MB; checked before the request is
/// assembled so an invalid file never leaves the client.
pub fn cv_file(file: &UploadFile) -> Result<(), ApiError> {
    if file.content_type != "application/pdf" {
        return Err(ApiError::Validation("CV must be a PDF file".to_string()));
    }
    if file.bytes.len() > MAX_CV_BYTES {
        return Err(ApiError::Validation(
            "CV file size must be less than 5MB".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn pdf(len: usize) -> UploadFile {
        UploadFile::from_bytes("cv.pdf", "application/pdf", Bytes::from(vec![0u8; len]))
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("agent@example.com"));
        assert!(!is_valid_email("agent@example"));
        assert!(!is_valid_email("agent example@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn url_shapes() {
        assert!(is_valid_url("https://linkedin.com/in/agent"));
        assert!(!is_valid_url("linkedin.com/in/agent"));
    }

    #[test]
    fn oversized_pdf_rejected() {
        let err = cv_file(&pdf(6 * 1024 * 1024)).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert_eq!(msg, "CV file size must be less than 5MB"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_type_rejected_before_size() {
        let file = UploadFile::from_bytes(
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Bytes::from(vec![0u8; 2 * 1024 * 1024]),
        );
        let err = cv_file(&file).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert_eq!(msg, "CV must be a PDF file"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn valid_pdf_accepted() {
        assert!(cv_file(&pdf(2 * 1024 * 1024)).is_ok());
        // Exactly at the limit is still allowed.
        assert!(cv_file(&pdf(MAX_CV_BYTES)).is_ok());
    }
}
