use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Job, JobType};
use crate::query::{ListOptions, Paginated};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

pub async fn list(
    client: &ApiClient,
    filter: &JobFilter,
    options: &ListOptions,
) -> Result<Paginated<Job>, ApiError> {
    client.get_list("/jobs", filter, options).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Job, ApiError> {
    client.get(&format!("/jobs/{id}"), "").await
}

pub async fn create(client: &ApiClient, payload: &JobPayload) -> Result<Job, ApiError> {
    client.post_json("/jobs", payload).await
}

pub async fn update(client: &ApiClient, id: &str, payload: &UpdateJob) -> Result<Job, ApiError> {
    client.patch_json(&format!("/jobs/{id}"), payload).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/jobs/{id}")).await
}
