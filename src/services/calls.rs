use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Call, CallDirection};
use crate::query::{ListOptions, Paginated};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<CallDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visite_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCall {
    pub phone_number: String,
    pub direction: CallDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_resume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visite_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCall {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<CallDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_resume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visite_date: Option<DateTime<Utc>>,
}

pub async fn list(
    client: &ApiClient,
    filter: &CallFilter,
    options: &ListOptions,
) -> Result<Paginated<Call>, ApiError> {
    client.get_list("/calls", filter, options).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Call, ApiError> {
    client.get(&format!("/calls/{id}"), "").await
}

pub async fn create(client: &ApiClient, payload: &NewCall) -> Result<Call, ApiError> {
    client.post_json("/calls", payload).await
}

pub async fn update(client: &ApiClient, id: &str, payload: &UpdateCall) -> Result<Call, ApiError> {
    client.patch_json(&format!("/calls/{id}"), payload).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/calls/{id}")).await
}
