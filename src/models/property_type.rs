use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::MaybeExpanded;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyType {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The API returns either bare property-type ids or expanded records.
    #[serde(default)]
    pub property_types: Vec<MaybeExpanded<PropertyType>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
