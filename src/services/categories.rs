use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Category;
use crate::query::{ListOptions, Paginated};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_types: Option<Vec<String>>,
}

pub async fn list(
    client: &ApiClient,
    filter: &CategoryFilter,
    options: &ListOptions,
) -> Result<Paginated<Category>, ApiError> {
    client.get_list("/categories", filter, options).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Category, ApiError> {
    client.get(&format!("/categories/{id}"), "").await
}

pub async fn create(client: &ApiClient, data: &NewCategory) -> Result<Category, ApiError> {
    client.post_json("/categories", data).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    data: &UpdateCategory,
) -> Result<Category, ApiError> {
    client.patch_json(&format!("/categories/{id}"), data).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/categories/{id}")).await
}
