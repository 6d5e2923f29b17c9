//! Copies a node (and, for folders, its subtree) under another parent.

use alfresco_raw::api::nodes::copy_node as raw;
use alfresco_raw::models::NodeBodyCopy;
use tracing::info;

use super::models::{CopyNodeRequest, NodeResponse, Validate};
use super::require_id;
use crate::client::AlfrescoClient;
use crate::conversion::to_raw;
use crate::error::{Error, Result};
use crate::response::{convert, require, Detailed};

const OPERATION: &str = "copy_node";

fn prepare(node_id: &str, request: &CopyNodeRequest) -> Result<NodeBodyCopy> {
    require_id("node_id", node_id)?;
    if request.target_parent_id.trim().is_empty() {
        return Err(Error::InvalidArgument(format!(
            "target_parent_id is required to copy node {node_id}"
        )));
    }
    request.validate()?;
    Ok(to_raw(request)?)
}

fn done(node_id: &str, node: &NodeResponse) {
    info!(
        node_id,
        result_id = %node.entry.id,
        parent_id = node.entry.parent_id.as_deref().unwrap_or_default(),
        "Node copied"
    );
}

pub async fn copy_node_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CopyNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let body = prepare(node_id, request)?;
    let response = raw::send_detailed(client.raw(), node_id, &body, &Default::default()).await?;
    convert(OPERATION, response)
}

pub async fn copy_node(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CopyNodeRequest,
) -> Result<NodeResponse> {
    let node = require(copy_node_detailed(client, node_id, request).await?, || {
        format!(
            "Failed to copy node {node_id} to parent {}",
            request.target_parent_id
        )
    })?;
    done(node_id, &node);
    Ok(node)
}

pub fn copy_node_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CopyNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let body = prepare(node_id, request)?;
    let response = raw::blocking_detailed(client.raw(), node_id, &body, &Default::default())?;
    convert(OPERATION, response)
}

pub fn copy_node_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CopyNodeRequest,
) -> Result<NodeResponse> {
    let node = require(copy_node_blocking_detailed(client, node_id, request)?, || {
        format!(
            "Failed to copy node {node_id} to parent {}",
            request.target_parent_id
        )
    })?;
    done(node_id, &node);
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_target_parent_is_an_invalid_argument() {
        let request = CopyNodeRequest {
            target_parent_id: "  ".into(),
            name: None,
        };
        match prepare("abc", &request).unwrap_err() {
            Error::InvalidArgument(message) => {
                assert!(message.starts_with("target_parent_id is required"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
