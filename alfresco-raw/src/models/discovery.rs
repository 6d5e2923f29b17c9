use serde::{Deserialize, Serialize};

use super::AdditionalProperties;
use crate::types::Maybe;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub hotfix: String,
    pub schema: i64,
    pub label: String,
    pub display: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub is_read_only: bool,
    pub is_audit_enabled: bool,
    pub is_quick_share_enabled: bool,
    pub is_thumbnail_generation_enabled: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub title: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub version: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub install_state: Maybe<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    pub id: String,
    pub edition: String,
    pub version: VersionInfo,
    pub status: StatusInfo,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub license: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub modules: Maybe<Vec<ModuleInfo>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub repository: RepositoryInfo,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Response of `GET /alfresco/api/discovery`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryEntry {
    pub entry: RepositoryEntry,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
