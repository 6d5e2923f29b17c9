use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::association::{AssociationInfo, ChildAssociationInfo};
use super::common::{ContentInfo, PathInfo, PermissionsInfo, UserInfo};
use super::AdditionalProperties;
use crate::types::Maybe;

/// A file or folder in the repository.
///
/// `id`, `name`, `nodeType`, `isFolder` and `isFile` are required. Audit
/// fields are optional: several endpoints (and older servers) omit
/// `createdByUser`/`createdAt` even though the published schema lists them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub node_type: String,
    pub is_folder: bool,
    pub is_file: bool,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub is_locked: Maybe<bool>,
    #[serde(
        default,
        skip_serializing_if = "Maybe::is_unset",
        with = "crate::types::timestamp::maybe"
    )]
    pub modified_at: Maybe<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub modified_by_user: Maybe<UserInfo>,
    #[serde(
        default,
        skip_serializing_if = "Maybe::is_unset",
        with = "crate::types::timestamp::maybe"
    )]
    pub created_at: Maybe<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub created_by_user: Maybe<UserInfo>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub parent_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub is_link: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub is_favorite: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub content: Maybe<ContentInfo>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub aspect_names: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub properties: Maybe<AdditionalProperties>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub allowable_operations: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub path: Maybe<PathInfo>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub permissions: Maybe<PermissionsInfo>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub entry: Node,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A node listed through a child or secondary-child association.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeChildAssociation {
    #[serde(flatten)]
    pub node: Node,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub association: Maybe<ChildAssociationInfo>,
}

/// A node listed through a peer association or as a parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAssociation {
    #[serde(flatten)]
    pub node: Node,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub association: Maybe<AssociationInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WireModel;
    use serde_json::json;

    fn folder_json() -> serde_json::Value {
        json!({
            "id": "8e3b2f0a-1111-2222-3333-444455556666",
            "name": "Reports",
            "nodeType": "cm:folder",
            "isFolder": true,
            "isFile": false,
            "modifiedAt": "2024-03-01T10:15:30.000+0000",
            "modifiedByUser": {"id": "admin", "displayName": "Administrator"},
            "createdAt": "2024-03-01T10:15:30.000+0000",
            "createdByUser": {"id": "admin", "displayName": "Administrator"},
            "parentId": "-root-",
            "aspectNames": ["cm:titled", "cm:auditable"],
            "properties": {"cm:title": "Quarterly reports"},
            "isFavorite": false
        })
    }

    #[test]
    fn node_round_trips_declared_fields() {
        let node = Node::from_wire(folder_json()).expect("decode");
        assert_eq!(node.node_type, "cm:folder");
        assert!(node.is_folder && !node.is_file);
        assert_eq!(
            node.created_by_user.as_option().map(|u| u.id.as_str()),
            Some("admin")
        );
        assert_eq!(node.to_wire().unwrap(), folder_json());
    }

    #[test]
    fn node_keeps_unknown_keys() {
        let mut raw = folder_json();
        raw["isDirectLinkEnabled"] = json!(true);
        let node = Node::from_wire(raw.clone()).unwrap();
        assert_eq!(
            node.additional_properties.get("isDirectLinkEnabled"),
            Some(&json!(true))
        );
        assert_eq!(node.to_wire().unwrap(), raw);
    }

    #[test]
    fn node_tolerates_missing_audit_fields() {
        let raw = json!({
            "id": "abc",
            "name": "doc.txt",
            "nodeType": "cm:content",
            "isFolder": false,
            "isFile": true
        });
        let node = Node::from_wire(raw).expect("audit fields are optional");
        assert!(node.created_by_user.is_unset());
        assert!(node.created_at.is_unset());
    }

    #[test]
    fn node_rejects_missing_required_field() {
        let raw = json!({"id": "abc", "nodeType": "cm:content", "isFolder": false, "isFile": true});
        let err = Node::from_wire(raw).unwrap_err();
        assert!(err.to_string().contains("name"), "{err}");
    }

    #[test]
    fn child_association_keeps_association_out_of_node_extras() {
        let mut raw = folder_json();
        raw["association"] = json!({"assocType": "cm:contains", "isPrimary": true});
        let child = NodeChildAssociation::from_wire(raw).unwrap();
        let assoc = child.association.into_option().unwrap();
        assert_eq!(assoc.assoc_type.as_option().map(String::as_str), Some("cm:contains"));
        assert_eq!(assoc.is_primary, Maybe::Value(true));
        assert!(!child.node.additional_properties.contains_key("association"));
    }
}
