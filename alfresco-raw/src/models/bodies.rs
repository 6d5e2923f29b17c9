//! Request bodies accepted by the nodes endpoints.

use serde::{Deserialize, Serialize};

use super::AdditionalProperties;
use crate::types::Maybe;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyCreateAssociation {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub assoc_type: Maybe<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationBody {
    pub target_id: String,
    pub assoc_type: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAssociationBody {
    pub child_id: String,
    pub assoc_type: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// JSON body of `POST /nodes/{nodeId}/children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyCreate {
    pub name: String,
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub aspect_names: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub properties: Maybe<AdditionalProperties>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub relative_path: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub association: Maybe<NodeBodyCreateAssociation>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub secondary_children: Maybe<Vec<ChildAssociationBody>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub targets: Maybe<Vec<AssociationBody>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// File part of a multipart create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub payload: Vec<u8>,
}

/// Multipart body of `POST /nodes/{nodeId}/children`.
///
/// A distinct type from [`NodeBodyCreate`], so the endpoint never has to
/// guess from the body's shape which encoding to use.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBodyCreateMultipart {
    pub file_data: MultipartFile,
    pub name: Maybe<String>,
    pub node_type: Maybe<String>,
    pub relative_path: Maybe<String>,
    pub auto_rename: Maybe<bool>,
    pub overwrite: Maybe<bool>,
    pub major_version: Maybe<bool>,
    pub comment: Maybe<String>,
    /// Additional form fields, e.g. `cm:title`, sent as text parts.
    pub properties: Vec<(String, String)>,
}

impl NodeBodyCreateMultipart {
    pub fn new(file_data: MultipartFile) -> Self {
        Self {
            file_data,
            name: Maybe::Unset,
            node_type: Maybe::Unset,
            relative_path: Maybe::Unset,
            auto_rename: Maybe::Unset,
            overwrite: Maybe::Unset,
            major_version: Maybe::Unset,
            comment: Maybe::Unset,
            properties: Vec::new(),
        }
    }

    /// Text form fields in wire order, skipping unset values.
    pub fn text_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        if let Some(v) = self.name.as_option() {
            fields.push(("name".to_string(), v.clone()));
        }
        if let Some(v) = self.node_type.as_option() {
            fields.push(("nodeType".to_string(), v.clone()));
        }
        if let Some(v) = self.relative_path.as_option() {
            fields.push(("relativePath".to_string(), v.clone()));
        }
        if let Some(v) = self.auto_rename.as_option() {
            fields.push(("autoRename".to_string(), v.to_string()));
        }
        if let Some(v) = self.overwrite.as_option() {
            fields.push(("overwrite".to_string(), v.to_string()));
        }
        if let Some(v) = self.major_version.as_option() {
            fields.push(("majorVersion".to_string(), v.to_string()));
        }
        if let Some(v) = self.comment.as_option() {
            fields.push(("comment".to_string(), v.clone()));
        }
        fields.extend(self.properties.iter().cloned());
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionElementBody {
    pub authority_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub access_status: Maybe<super::AccessStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsBody {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub is_inheritance_enabled: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub locally_set: Maybe<Vec<PermissionElementBody>>,
}

/// Body of `PUT /nodes/{nodeId}`. Every field is optional; `Null` clears.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyUpdate {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub node_type: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub aspect_names: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub properties: Maybe<AdditionalProperties>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub permissions: Maybe<PermissionsBody>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyCopy {
    pub target_parent_id: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyMove {
    pub target_parent_id: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockType {
    #[default]
    AllowOwnerChanges,
    Full,
}

impl LockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockType::AllowOwnerChanges => "ALLOW_OWNER_CHANGES",
            LockType::Full => "FULL",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockLifetime {
    #[default]
    Persistent,
    Ephemeral,
}

impl LockLifetime {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockLifetime::Persistent => "PERSISTENT",
            LockLifetime::Ephemeral => "EPHEMERAL",
        }
    }
}

/// Body of `POST /nodes/{nodeId}/lock`. `timeToExpire` is in seconds;
/// zero or absent means the lock never expires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyLock {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub time_to_expire: Maybe<u32>,
    #[serde(default, rename = "type", skip_serializing_if = "Maybe::is_unset")]
    pub lock_type: Maybe<LockType>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub lifetime: Maybe<LockLifetime>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WireModel;
    use serde_json::json;

    #[test]
    fn update_body_sends_null_and_skips_unset() {
        let body = NodeBodyUpdate {
            name: Maybe::Value("renamed.txt".into()),
            node_type: Maybe::Null,
            ..Default::default()
        };
        assert_eq!(
            body.to_wire().unwrap(),
            json!({"name": "renamed.txt", "nodeType": null})
        );
    }

    #[test]
    fn lock_body_uses_wire_enum_values() {
        let body = NodeBodyLock {
            time_to_expire: Maybe::Value(60),
            lock_type: Maybe::Value(LockType::Full),
            lifetime: Maybe::Value(LockLifetime::Ephemeral),
            ..Default::default()
        };
        assert_eq!(
            body.to_wire().unwrap(),
            json!({"timeToExpire": 60, "type": "FULL", "lifetime": "EPHEMERAL"})
        );
    }

    #[test]
    fn create_body_preserves_extra_keys() {
        let raw = json!({
            "name": "notes.txt",
            "nodeType": "cm:content",
            "properties": {"cm:title": "Notes"},
            "definition": {"custom": true}
        });
        let body = NodeBodyCreate::from_wire(raw.clone()).unwrap();
        assert_eq!(body.additional_properties.get("definition"), Some(&json!({"custom": true})));
        assert_eq!(body.to_wire().unwrap(), raw);
    }

    #[test]
    fn multipart_text_fields_skip_unset() {
        let mut body = NodeBodyCreateMultipart::new(MultipartFile {
            file_name: "a.txt".into(),
            mime_type: Some("text/plain".into()),
            payload: b"hello".to_vec(),
        });
        body.name = Maybe::Value("a.txt".into());
        body.auto_rename = Maybe::Value(true);
        body.properties.push(("cm:title".into(), "A".into()));
        assert_eq!(
            body.text_fields(),
            vec![
                ("name".to_string(), "a.txt".to_string()),
                ("autoRename".to_string(), "true".to_string()),
                ("cm:title".to_string(), "A".to_string()),
            ]
        );
    }
}
