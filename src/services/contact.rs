use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::validate;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Public contact-form submission.
pub async fn send(client: &ApiClient, message: &ContactMessage) -> Result<ContactResponse, ApiError> {
    validate::require_field(&message.name, "Name is required")?;
    if !validate::is_valid_email(&message.email) {
        return Err(ApiError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    validate::require_field(&message.message, "Message is required")?;

    client.post_public_json("/contact", message).await
}
