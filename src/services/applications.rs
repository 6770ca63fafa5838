use bytes::Bytes;
use serde::Serialize;

use crate::client::{ApiClient, FormPayload};
use crate::error::ApiError;
use crate::files::{self, UploadFile};
use crate::models::Application;
use crate::query::{ListOptions, Paginated};
use crate::validate;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_linkedin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_cover_letter: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ApplicationPayload {
    pub full_name: String,
    pub email_address: String,
    pub job_id: String,
    pub years_of_experience: u32,
    pub linkedin_link: Option<String>,
    pub cover_letter_text: Option<String>,
}

pub async fn list(
    client: &ApiClient,
    filter: &ApplicationFilter,
    options: &ListOptions,
) -> Result<Paginated<Application>, ApiError> {
    client.get_list("/applications", filter, options).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Application, ApiError> {
    client.get(&format!("/applications/{id}"), "").await
}

/// Submit a job application with its CV attachment. Public endpoint; the
/// CV is validated (PDF, at most 5MB) before any request is assembled.
pub async fn create(
    client: &ApiClient,
    payload: &ApplicationPayload,
    cv: UploadFile,
) -> Result<Application, ApiError> {
    validate::require_field(&payload.full_name, "Full name is required")?;
    validate::require_field(&payload.email_address, "Email address is required")?;
    if !validate::is_valid_email(&payload.email_address) {
        return Err(ApiError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    validate::require_field(&payload.job_id, "Job is required")?;
    if let Some(link) = &payload.linkedin_link {
        if !validate::is_valid_url(link) {
            return Err(ApiError::Validation(
                "Please enter a valid LinkedIn URL".to_string(),
            ));
        }
    }
    validate::cv_file(&cv)?;

    let form = FormPayload::new()
        .text("fullName", payload.full_name.clone())
        .text("emailAddress", payload.email_address.clone())
        .text("jobId", payload.job_id.clone())
        .text("yearsOfExperience", payload.years_of_experience.to_string())
        .maybe_text("linkedinLink", payload.linkedin_link.clone())
        .maybe_text("coverLetterText", payload.cover_letter_text.clone())
        .file("cv", cv);

    client.post_public_multipart("/applications", form).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/applications/{id}")).await
}

/// Direct link to a stored CV.
pub fn cv_download_url(client: &ApiClient, cv_path: &str) -> String {
    files::download_url(client.base_url(), cv_path)
}

/// Fetch a stored CV as raw bytes (authenticated).
pub async fn download_cv(client: &ApiClient, cv_path: &str) -> Result<Bytes, ApiError> {
    client.get_bytes(&format!("/file/download/{cv_path}")).await
}
