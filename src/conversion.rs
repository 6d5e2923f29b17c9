//! Conversion between the validated high-level models and the raw wire
//! models.
//!
//! Both tiers share the JSON wire shape, so conversion goes through
//! `serde_json::Value`: the high-level model is serialized with its wire
//! names, its own null fields are dropped, and the result is decoded into
//! the raw type (and the reverse for responses). A field that exists on
//! one side only either lands in the raw model's `additional_properties`
//! or is rejected by a strict high-level model.

use std::fmt;
use std::marker::PhantomData;

use alfresco_raw::WireModel;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serializes a high-level model to wire JSON, dropping null fields of the
/// model itself.
///
/// Nested nulls are caller data and are kept: `{"properties": {"cm:title":
/// null}}` is how an update clears a property.
pub fn to_raw_value<H: Serialize>(model: &H) -> Result<Value, serde_json::Error> {
    Ok(drop_null_fields(serde_json::to_value(model)?))
}

/// Builds a raw model from a high-level one.
pub fn to_raw<H, R>(model: &H) -> Result<R, serde_json::Error>
where
    H: Serialize,
    R: WireModel,
{
    R::from_wire(to_raw_value(model)?)
}

/// Re-validates a raw model as a high-level one.
pub fn from_raw<R, H>(raw: &R) -> Result<H, serde_json::Error>
where
    R: WireModel,
    H: DeserializeOwned,
{
    serde_json::from_value(raw.to_wire()?)
}

fn drop_null_fields(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect())
        }
        other => other,
    }
}

/// Both conversion directions for one model pair.
pub struct ConverterPair<H, R> {
    _models: PhantomData<fn() -> (H, R)>,
}

impl<H, R> ConverterPair<H, R>
where
    H: Serialize + DeserializeOwned,
    R: WireModel,
{
    pub fn to_raw(&self, model: &H) -> Result<R, serde_json::Error> {
        to_raw(model)
    }

    pub fn from_raw(&self, raw: &R) -> Result<H, serde_json::Error> {
        from_raw(raw)
    }
}

impl<H, R> fmt::Debug for ConverterPair<H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterPair")
            .field("high_level", &std::any::type_name::<H>())
            .field("raw", &std::any::type_name::<R>())
            .finish()
    }
}

pub fn converter_pair<H, R>() -> ConverterPair<H, R>
where
    H: Serialize + DeserializeOwned,
    R: WireModel,
{
    ConverterPair {
        _models: PhantomData,
    }
}

/// Which high-level request model feeds which raw body for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub operation: &'static str,
    pub request_model: &'static str,
    pub raw_body: &'static str,
}

pub static CONVERSIONS: &[Conversion] = &[
    Conversion {
        operation: "create_node",
        request_model: "CreateNodeRequest",
        raw_body: "NodeBodyCreate",
    },
    Conversion {
        operation: "create_node_with_content",
        request_model: "CreateNodeRequest",
        raw_body: "NodeBodyCreateMultipart",
    },
    Conversion {
        operation: "create_folder",
        request_model: "CreateNodeRequest",
        raw_body: "NodeBodyCreate",
    },
    Conversion {
        operation: "update_node",
        request_model: "UpdateNodeRequest",
        raw_body: "NodeBodyUpdate",
    },
    Conversion {
        operation: "copy_node",
        request_model: "CopyNodeRequest",
        raw_body: "NodeBodyCopy",
    },
    Conversion {
        operation: "move_node",
        request_model: "MoveNodeRequest",
        raw_body: "NodeBodyMove",
    },
    Conversion {
        operation: "lock_node",
        request_model: "LockNodeRequest",
        raw_body: "NodeBodyLock",
    },
    Conversion {
        operation: "create_association",
        request_model: "CreateAssociationRequest",
        raw_body: "AssociationBody",
    },
    Conversion {
        operation: "create_secondary_child",
        request_model: "CreateSecondaryChildRequest",
        raw_body: "ChildAssociationBody",
    },
    Conversion {
        operation: "search_nodes",
        request_model: "SearchNodesRequest",
        raw_body: "SearchRequest",
    },
];

pub fn conversion_for(operation: &str) -> Option<&'static Conversion> {
    CONVERSIONS.iter().find(|c| c.operation == operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::models::{CopyNodeRequest, CreateNodeRequest, NodeResponse};
    use alfresco_raw::models::{NodeBodyCopy, NodeBodyCreate, NodeEntry};
    use serde_json::json;

    #[test]
    fn only_top_level_nulls_are_dropped() {
        let value = json!({"a": null, "b": {"c": null, "d": 1}, "e": [{"f": null}]});
        assert_eq!(
            drop_null_fields(value),
            json!({"b": {"c": null, "d": 1}, "e": [{"f": null}]})
        );
    }

    #[test]
    fn create_request_round_trips_through_raw_body() {
        let mut properties = serde_json::Map::new();
        properties.insert("cm:title".into(), json!("Quarterly"));
        let request = CreateNodeRequest {
            properties: Some(properties),
            aspect_names: Some(vec!["cm:titled".into()]),
            ..CreateNodeRequest::content("q1.txt")
        };

        let raw: NodeBodyCreate = to_raw(&request).unwrap();
        assert_eq!(raw.name, "q1.txt");
        assert_eq!(raw.node_type, "cm:content");
        assert!(raw.additional_properties.is_empty());

        let back: CreateNodeRequest = from_raw(&raw).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn pair_converts_both_ways() {
        let pair = converter_pair::<CopyNodeRequest, NodeBodyCopy>();
        let request = CopyNodeRequest {
            target_parent_id: "p2".into(),
            name: None,
        };
        let raw = pair.to_raw(&request).unwrap();
        assert_eq!(raw.to_wire().unwrap(), json!({"targetParentId": "p2"}));
        assert_eq!(pair.from_raw(&raw).unwrap(), request);
    }

    #[test]
    fn from_raw_keeps_server_extras_in_permissive_model() {
        let raw = NodeEntry::from_wire(json!({
            "entry": {
                "id": "n1", "name": "doc.txt", "nodeType": "cm:content",
                "isFolder": false, "isFile": true,
                "isDirectLinkEnabled": true
            }
        }))
        .unwrap();
        let node: NodeResponse = from_raw(&raw).unwrap();
        assert_eq!(node.entry.id, "n1");
        assert_eq!(node.entry.extra.get("isDirectLinkEnabled"), Some(&json!(true)));
    }

    #[test]
    fn registry_lookup() {
        let conversion = conversion_for("move_node").unwrap();
        assert_eq!(conversion.raw_body, "NodeBodyMove");
        assert!(conversion_for("no_such_operation").is_none());
    }
}
