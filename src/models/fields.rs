use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A field the API sometimes returns as a plain string and sometimes as a
/// stray object. Parsed into a strict variant once, at the service boundary,
/// so callers branch on the variant instead of re-checking shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Known(String),
    Malformed(Value),
}

impl TextValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TextValue::Known(s) => Some(s),
            TextValue::Malformed(_) => None,
        }
    }
}

/// A reference field the API returns either as a bare id or as the
/// expanded record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeExpanded<T> {
    Id(String),
    Record(T),
}

impl<T> MaybeExpanded<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            MaybeExpanded::Id(_) => None,
            MaybeExpanded::Record(r) => Some(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_value_parses_string_and_object() {
        let known: TextValue = serde_json::from_str(r#""120 sqm""#).unwrap();
        assert_eq!(known.as_str(), Some("120 sqm"));

        let malformed: TextValue = serde_json::from_str(r#"{"value":"120"}"#).unwrap();
        assert!(malformed.as_str().is_none());
    }

    #[test]
    fn maybe_expanded_distinguishes_id_from_record() {
        #[derive(Debug, Deserialize)]
        struct Named {
            name: String,
        }

        let id: MaybeExpanded<Named> = serde_json::from_str(r#""64ab""#).unwrap();
        assert!(id.record().is_none());

        let rec: MaybeExpanded<Named> = serde_json::from_str(r#"{"name":"Villa"}"#).unwrap();
        assert_eq!(rec.record().unwrap().name, "Villa");
    }
}
