use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

/// Pagination/sorting options shared by every list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl ListOptions {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort_by(mut self, field: &str, order: Order) -> Self {
        self.sort_by = Some(field.to_string());
        self.order = Some(order);
        self
    }
}

/// `{ results, page, limit, totalPages, totalResults }` list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub results: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub total_results: u64,
}

/// Serialize non-empty `filter` and `options` as JSON-encoded query
/// parameters: `filter=<json>&options=<json>`. Returns an empty string
/// when both are empty.
pub fn list_query<F: Serialize>(filter: &F, options: &ListOptions) -> Result<String, ApiError> {
    let filter_json = serde_json::to_value(filter)?;
    let options_json = serde_json::to_value(options)?;

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !is_empty_object(&filter_json) {
        serializer.append_pair("filter", &serde_json::to_string(&filter_json)?);
    }
    if !is_empty_object(&options_json) {
        serializer.append_pair("options", &serde_json::to_string(&options_json)?);
    }
    Ok(serializer.finish())
}

fn is_empty_object(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Null => true,
        _ => false,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse<T> {
    Paginated(Paginated<T>),
    Envelope { results: Vec<T> },
    Bare(Vec<T>),
}

/// Parse a list response, normalizing the legacy shapes (bare array, or
/// `{results}` without page counters) into the paginated envelope.
pub(crate) fn parse_list<T: DeserializeOwned>(body: &[u8]) -> Result<Paginated<T>, ApiError> {
    let response: ListResponse<T> = serde_json::from_slice(body)
        .map_err(|e| ApiError::Parse(format!("Failed to parse list response: {e}")))?;

    Ok(match response {
        ListResponse::Paginated(paginated) => paginated,
        ListResponse::Envelope { results } | ListResponse::Bare(results) => {
            let len = results.len();
            Paginated {
                results,
                page: 1,
                limit: len as u32,
                total_pages: 1,
                total_results: len as u64,
            }
        }
    })
}
