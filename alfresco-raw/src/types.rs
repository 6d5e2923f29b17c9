//! Shared building blocks for models and endpoint functions.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that may be omitted, explicitly null, or set.
///
/// `Unset` never reaches the wire: body fields are skipped via
/// `skip_serializing_if = "Maybe::is_unset"` and query builders drop it.
/// `Null` serializes as JSON `null` in bodies and is dropped from queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Maybe<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Unset
    }
}

impl<T> Maybe<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Maybe::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Maybe::Null)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Maybe::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `None` maps to `Unset`: an absent Rust value means "do not send".
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Maybe::Unset, Maybe::Value)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Unset => Maybe::Unset,
            Maybe::Null => Maybe::Null,
            Maybe::Value(v) => Maybe::Value(f(v)),
        }
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Value(value)
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Value(v) => v.serialize(serializer),
            Maybe::Unset | Maybe::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    /// A present key decodes to `Null` or `Value`; an absent key relies on
    /// `#[serde(default)]` to yield `Unset`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|o| o.map_or(Maybe::Null, Maybe::Value))
    }
}

/// Full outcome of a request: status, headers, raw body and the decoded
/// model when the status is documented as a success and the body decoded.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    pub content: Vec<u8>,
    pub parsed: Option<T>,
}

impl<T> Response<T> {
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }

    /// Decodes the raw content into any type, ignoring `parsed`.
    ///
    /// Used to read a success payload that the declared model rejected, or
    /// the error body of a documented failure.
    pub fn content_as<U: DeserializeOwned>(&self) -> Result<U, serde_json::Error> {
        serde_json::from_slice(&self.content)
    }

    /// The server's `briefSummary`, when the body is an Alfresco error.
    pub fn error_summary(&self) -> Option<String> {
        self.content_as::<crate::models::ErrorResponse>()
            .ok()
            .and_then(|e| e.error.brief_summary.into_option())
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            status_code: self.status_code,
            headers: self.headers,
            content: self.content,
            parsed: self.parsed.map(f),
        }
    }
}

/// Conversion between a model and its JSON wire form.
///
/// Implemented for every serde model; `additional_properties` round-trip
/// through the flattened map.
pub trait WireModel: Serialize + DeserializeOwned {
    fn to_wire(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn from_wire(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl<T: Serialize + DeserializeOwned> WireModel for T {}

/// Alfresco timestamps, e.g. `2024-03-01T10:15:30.000+0000`.
///
/// The offset has no colon, so plain RFC 3339 parsing rejects it. Both
/// forms are accepted on input; output always uses the Alfresco form.
pub mod timestamp {
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

    pub fn parse(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
    }

    pub fn format(value: &DateTime<FixedOffset>) -> String {
        value.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// Same codec for `Maybe<DateTime<FixedOffset>>` fields.
    pub mod maybe {
        use super::{format, parse};
        use crate::types::Maybe;
        use chrono::{DateTime, FixedOffset};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Maybe<DateTime<FixedOffset>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Maybe::Value(v) => serializer.serialize_str(&format(v)),
                _ => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Maybe<DateTime<FixedOffset>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(Maybe::Null),
                Some(raw) => parse(&raw).map(Maybe::Value).map_err(de::Error::custom),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Maybe::is_unset")]
        name: Maybe<String>,
    }

    #[test]
    fn maybe_distinguishes_absent_null_and_value() {
        let absent: Probe = serde_json::from_value(json!({})).unwrap();
        let null: Probe = serde_json::from_value(json!({"name": null})).unwrap();
        let set: Probe = serde_json::from_value(json!({"name": "x"})).unwrap();

        assert_eq!(absent.name, Maybe::Unset);
        assert_eq!(null.name, Maybe::Null);
        assert_eq!(set.name, Maybe::Value("x".to_string()));

        assert_eq!(serde_json::to_value(&absent).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(&null).unwrap(), json!({"name": null}));
        assert_eq!(serde_json::to_value(&set).unwrap(), json!({"name": "x"}));
    }

    #[test]
    fn option_none_converts_to_unset() {
        let m: Maybe<u32> = Maybe::from_option(None);
        assert!(m.is_unset());
        let m = Maybe::from_option(Some(3));
        assert_eq!(m.into_option(), Some(3));
    }

    #[test]
    fn timestamp_accepts_alfresco_and_rfc3339_offsets() {
        let alfresco = timestamp::parse("2024-03-01T10:15:30.000+0000").unwrap();
        let rfc = timestamp::parse("2024-03-01T10:15:30.000+00:00").unwrap();
        assert_eq!(alfresco, rfc);
        assert_eq!(timestamp::format(&alfresco), "2024-03-01T10:15:30.000+0000");
    }

    #[test]
    fn error_summary_reads_alfresco_error_body() {
        let response: Response<()> = Response {
            status_code: StatusCode::NOT_FOUND,
            headers: HeaderMap::new(),
            content: serde_json::to_vec(&json!({
                "error": {
                    "errorKey": "framework.exception.EntityNotFound",
                    "statusCode": 404,
                    "briefSummary": "05010001 The entity with id: abc was not found",
                    "stackTrace": "For security reasons the stack trace is no longer displayed",
                    "descriptionURL": "https://api-explorer.alfresco.com"
                }
            }))
            .unwrap(),
            parsed: None,
        };
        assert_eq!(
            response.error_summary().as_deref(),
            Some("05010001 The entity with id: abc was not found")
        );
    }
}
