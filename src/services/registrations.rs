use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ProfileType, Registration};
use crate::query::{ListOptions, Paginated};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<ProfileType>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub profile_type: ProfileType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<ProfileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

/// Interest registrations come in from the public site; no auth required.
pub async fn create(client: &ApiClient, data: &NewRegistration) -> Result<Registration, ApiError> {
    client.post_public_json("/register", data).await
}

pub async fn list(
    client: &ApiClient,
    filter: &RegistrationFilter,
    options: &ListOptions,
) -> Result<Paginated<Registration>, ApiError> {
    client.get_list("/register", filter, options).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Registration, ApiError> {
    client.get(&format!("/register/{id}"), "").await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    data: &UpdateRegistration,
) -> Result<Registration, ApiError> {
    client.patch_json(&format!("/register/{id}"), data).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/register/{id}")).await
}
