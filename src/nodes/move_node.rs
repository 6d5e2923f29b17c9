//! Relocates a node under another parent. The node keeps its id.

use alfresco_raw::api::nodes::move_node as raw;
use alfresco_raw::models::NodeBodyMove;
use tracing::info;

use super::models::{MoveNodeRequest, NodeResponse, Validate};
use super::require_id;
use crate::client::AlfrescoClient;
use crate::conversion::to_raw;
use crate::error::{Error, Result};
use crate::response::{convert, require, Detailed};

const OPERATION: &str = "move_node";

fn prepare(node_id: &str, request: &MoveNodeRequest) -> Result<NodeBodyMove> {
    require_id("node_id", node_id)?;
    if request.target_parent_id.trim().is_empty() {
        return Err(Error::InvalidArgument(format!(
            "target_parent_id is required to move node {node_id}"
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
        "Node moved"
    );
}

pub async fn move_node_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &MoveNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let body = prepare(node_id, request)?;
    let response = raw::send_detailed(client.raw(), node_id, &body, &Default::default()).await?;
    convert(OPERATION, response)
}

pub async fn move_node(
    client: &AlfrescoClient,
    node_id: &str,
    request: &MoveNodeRequest,
) -> Result<NodeResponse> {
    let node = require(move_node_detailed(client, node_id, request).await?, || {
        format!(
            "Failed to move node {node_id} to parent {}",
            request.target_parent_id
        )
    })?;
    done(node_id, &node);
    Ok(node)
}

pub fn move_node_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &MoveNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let body = prepare(node_id, request)?;
    let response = raw::blocking_detailed(client.raw(), node_id, &body, &Default::default())?;
    convert(OPERATION, response)
}

pub fn move_node_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    request: &MoveNodeRequest,
) -> Result<NodeResponse> {
    let node = require(move_node_blocking_detailed(client, node_id, request)?, || {
        format!(
            "Failed to move node {node_id} to parent {}",
            request.target_parent_id
        )
    })?;
    done(node_id, &node);
    Ok(node)
}
