use serde::{Deserialize, Serialize};

use super::node::{Node, NodeAssociation, NodeChildAssociation};
use super::AdditionalProperties;
use crate::types::Maybe;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub count: i64,
    pub has_more_items: bool,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub total_items: Maybe<i64>,
    pub skip_count: i64,
    pub max_items: i64,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeChildAssociationEntry {
    pub entry: NodeChildAssociation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeChildAssociationPagingList {
    pub pagination: Pagination,
    #[serde(default)]
    pub entries: Vec<NodeChildAssociationEntry>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub source: Maybe<Node>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Response of children and secondary-children listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeChildAssociationPaging {
    pub list: NodeChildAssociationPagingList,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAssociationEntry {
    pub entry: NodeAssociation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAssociationPagingList {
    pub pagination: Pagination,
    #[serde(default)]
    pub entries: Vec<NodeAssociationEntry>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub source: Maybe<Node>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Response of target and parent listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAssociationPaging {
    pub list: NodeAssociationPagingList,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WireModel;
    use serde_json::json;

    #[test]
    fn empty_listing_decodes() {
        let raw = json!({
            "list": {
                "pagination": {"count": 0, "hasMoreItems": false, "totalItems": 0, "skipCount": 0, "maxItems": 100},
                "entries": []
            }
        });
        let paging = NodeChildAssociationPaging::from_wire(raw).unwrap();
        assert_eq!(paging.list.pagination.count, 0);
        assert!(paging.list.entries.is_empty());
        assert!(paging.list.source.is_unset());
    }
}
