use serde::{Deserialize, Serialize};

use super::AdditionalProperties;
use crate::types::Maybe;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub error_key: Maybe<String>,
    pub status_code: i64,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub brief_summary: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub stack_trace: Maybe<String>,
    #[serde(
        default,
        rename = "descriptionURL",
        skip_serializing_if = "Maybe::is_unset"
    )]
    pub description_url: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub log_id: Maybe<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body returned with every documented error status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}
