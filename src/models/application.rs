use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job summary embedded in an application record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationJob {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub full_name: String,
    pub email_address: String,
    pub job_id: ApplicationJob,
    pub years_of_experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter_text: Option<String>,
    pub uploaded_cv_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
