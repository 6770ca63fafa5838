use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::MaybeExpanded;
use super::property::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileType {
    #[serde(rename = "First-Time Buyer")]
    FirstTimeBuyer,
    #[serde(rename = "Broker/Agent")]
    BrokerAgent,
    #[serde(rename = "Investor")]
    Investor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub profile_type: ProfileType,
    #[serde(
        rename = "propertyId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub property: Option<MaybeExpanded<Property>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_time: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
