use serde::{Deserialize, Serialize};

use super::AdditionalProperties;
use crate::types::Maybe;

/// Peer association returned by `POST /nodes/{nodeId}/targets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub assoc_type: Maybe<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociationEntry {
    pub entry: Association,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Secondary child association returned by
/// `POST /nodes/{nodeId}/secondary-children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAssociation {
    pub child_id: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub assoc_type: Maybe<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildAssociationEntry {
    pub entry: ChildAssociation,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Association block attached to nodes in target/parent listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationInfo {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub assoc_type: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub is_primary: Maybe<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Association block attached to nodes in child listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAssociationInfo {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub assoc_type: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub is_primary: Maybe<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
