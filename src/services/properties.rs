use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, FormPayload};
use crate::error::ApiError;
use crate::files::UploadFile;
use crate::models::{Property, PropertyStatus};
use crate::query::{ListOptions, Paginated};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds_gt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths_gt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size_area: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_area: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date_to: Option<DateTime<Utc>>,
}

/// Form fields for creating or updating a property. Sent as multipart so
/// image files can ride along.
#[derive(Debug, Clone, Default)]
pub struct PropertyForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<PropertyStatus>,
    pub price: Option<u64>,
    pub price_from: Option<u64>,
    pub price_to: Option<u64>,
    pub size_area: Option<String>,
    pub payment_plan: Option<String>,
    pub location_iframe: Option<String>,
    pub handover_by: Option<String>,
    pub completion_date: Option<DateTime<Utc>>,
    pub property_types: Option<Vec<String>>,
    pub beds: Option<u32>,
    pub baths: Option<u32>,
    pub images: Vec<UploadFile>,
    /// When set on an update, tells the server to drop existing images
    /// before storing the new ones.
    pub replace_images: Option<bool>,
}

impl PropertyForm {
    fn into_payload(self) -> FormPayload {
        let mut payload = FormPayload::new()
            .maybe_text("name", self.name)
            .maybe_text("description", self.description)
            .maybe_text("status", self.status.map(|s| s.as_str().to_string()))
            .maybe_text("price", self.price.map(|p| p.to_string()))
            .maybe_text("priceFrom", self.price_from.map(|p| p.to_string()))
            .maybe_text("priceTo", self.price_to.map(|p| p.to_string()))
            .maybe_text("sizeArea", self.size_area)
            .maybe_text("paymentPlan", self.payment_plan)
            .maybe_text("locationIframe", self.location_iframe)
            .maybe_text("handoverBy", self.handover_by)
            .maybe_text(
                "completionDate",
                self.completion_date.map(|d| d.to_rfc3339()),
            )
            .maybe_text("propertyTypes", self.property_types.map(|t| t.join(",")))
            .maybe_text("beds", self.beds.map(|b| b.to_string()))
            .maybe_text("baths", self.baths.map(|b| b.to_string()));

        let has_images = !self.images.is_empty();
        for image in self.images {
            payload = payload.file("images", image);
        }
        if has_images {
            payload = payload.maybe_text("replaceImages", self.replace_images.map(|r| r.to_string()));
        }
        payload
    }
}

// Single-property responses sometimes arrive wrapped in `{property: ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PropertyResponse {
    Envelope { property: Property },
    Bare(Property),
}

impl PropertyResponse {
    fn into_property(self) -> Property {
        match self {
            PropertyResponse::Envelope { property } => property,
            PropertyResponse::Bare(property) => property,
        }
    }
}

pub async fn list(
    client: &ApiClient,
    filter: &PropertyFilter,
    options: &ListOptions,
) -> Result<Paginated<Property>, ApiError> {
    client.get_list("/properties", filter, options).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Property, ApiError> {
    let response: PropertyResponse = client.get(&format!("/properties/{id}"), "").await?;
    Ok(response.into_property())
}

pub async fn create(client: &ApiClient, form: PropertyForm) -> Result<Property, ApiError> {
    let response: PropertyResponse = client
        .post_multipart("/properties", form.into_payload())
        .await?;
    Ok(response.into_property())
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    form: PropertyForm,
) -> Result<Property, ApiError> {
    let response: PropertyResponse = client
        .patch_multipart(&format!("/properties/{id}"), form.into_payload())
        .await?;
    Ok(response.into_property())
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/properties/{id}")).await
}

/// Public preview URL for a stored property image.
pub fn image_url(client: &ApiClient, image_path: &str) -> String {
    crate::files::property_image_url(client.base_url(), image_path)
}
