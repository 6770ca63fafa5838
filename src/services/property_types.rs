use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::PropertyType;
use crate::query::{ListOptions, Paginated};

#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyTypeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPropertyType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePropertyType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub async fn list(
    client: &ApiClient,
    filter: &PropertyTypeFilter,
    options: &ListOptions,
) -> Result<Paginated<PropertyType>, ApiError> {
    client.get_list("/property-types", filter, options).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<PropertyType, ApiError> {
    client.get(&format!("/property-types/{id}"), "").await
}

pub async fn create(client: &ApiClient, data: &NewPropertyType) -> Result<PropertyType, ApiError> {
    client.post_json("/property-types", data).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    data: &UpdatePropertyType,
) -> Result<PropertyType, ApiError> {
    client.patch_json(&format!("/property-types/{id}"), data).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/property-types/{id}")).await
}
