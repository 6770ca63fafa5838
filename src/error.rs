use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug)]
pub enum ApiError {
    /// Client-side pre-validation failure; the request was never sent.
    Validation(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    /// Any other non-2xx response.
    Server { status: u16, message: String },
    Network(String),
    Parse(String),
    Storage(std::io::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation: {msg}"),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            ApiError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            ApiError::Server { status, message } => write!(f, "Server Error ({status}): {message}"),
            ApiError::Network(msg) => write!(f, "Network Error: {msg}"),
            ApiError::Parse(msg) => write!(f, "Parse Error: {msg}"),
            ApiError::Storage(err) => write!(f, "Storage Error: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

/// Map a non-2xx response to an error, pulling the server-provided
/// `message` field out of the body when one is present.
pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));

    match status.as_u16() {
        401 => ApiError::Unauthorized("Authentication failed. Please log in again.".to_string()),
        403 => ApiError::Forbidden("You do not have permission to perform this action.".to_string()),
        404 => ApiError::NotFound("Resource not found.".to_string()),
        422 => ApiError::Server {
            status: 422,
            message: message.unwrap_or_else(|| "Validation error occurred.".to_string()),
        },
        500 => ApiError::Server {
            status: 500,
            message: "Server error occurred. Please try again later.".to_string(),
        },
        s => ApiError::Server {
            status: s,
            message: message.unwrap_or_else(|| format!("Request failed with status {s}")),
        },
    }
}
