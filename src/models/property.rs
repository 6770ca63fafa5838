use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::TextValue;
use super::property_type::PropertyType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[serde(rename = "ready to move")]
    ReadyToMove,
    #[serde(rename = "off plan")]
    OffPlan,
    #[serde(rename = "for rent")]
    ForRent,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::ReadyToMove => "ready to move",
            PropertyStatus::OffPlan => "off plan",
            PropertyStatus::ForRent => "for rent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub status: PropertyStatus,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_from: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_to: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_area: Option<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_iframe: Option<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handover_by: Option<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_types: Option<Vec<PropertyType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baths: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
