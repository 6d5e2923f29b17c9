use serde::{Deserialize, Serialize};

use super::AdditionalProperties;
use crate::types::Maybe;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub mime_type_name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub size_in_bytes: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub encoding: Maybe<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub node_type: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub aspect_names: Maybe<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInfo {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub elements: Maybe<Vec<PathElement>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub is_complete: Maybe<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessStatus {
    Allowed,
    Denied,
}

impl AccessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStatus::Allowed => "ALLOWED",
            AccessStatus::Denied => "DENIED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionElement {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub authority_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub access_status: Maybe<AccessStatus>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsInfo {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub is_inheritance_enabled: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub inherited: Maybe<Vec<PermissionElement>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub locally_set: Maybe<Vec<PermissionElement>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub settable: Maybe<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
