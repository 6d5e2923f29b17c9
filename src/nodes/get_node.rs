use alfresco_raw::api::nodes::get_node as raw;
use tracing::info;

use super::models::NodeResponse;
use super::require_id;
use crate::client::AlfrescoClient;
use crate::error::Result;
use crate::response::{convert, require, Detailed};

const OPERATION: &str = "get_node";

fn params() -> raw::Params {
    raw::Params {
        include: alfresco_raw::Maybe::Value(vec![
            "path".to_string(),
            "isLocked".to_string(),
            "allowableOperations".to_string(),
        ]),
        ..Default::default()
    }
}

pub async fn get_node_detailed(
    client: &AlfrescoClient,
    node_id: &str,
) -> Result<Detailed<NodeResponse>> {
    require_id("node_id", node_id)?;
    let response = raw::send_detailed(client.raw(), node_id, &params()).await?;
    convert(OPERATION, response)
}

pub async fn get_node(client: &AlfrescoClient, node_id: &str) -> Result<NodeResponse> {
    let node = require(get_node_detailed(client, node_id).await?, || {
        format!("Failed to get node {node_id}")
    })?;
    info!(node_id, name = %node.entry.name, "Fetched node");
    Ok(node)
}

pub fn get_node_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
) -> Result<Detailed<NodeResponse>> {
    require_id("node_id", node_id)?;
    let response = raw::blocking_detailed(client.raw(), node_id, &params())?;
    convert(OPERATION, response)
}

pub fn get_node_blocking(client: &AlfrescoClient, node_id: &str) -> Result<NodeResponse> {
    let node = require(get_node_blocking_detailed(client, node_id)?, || {
        format!("Failed to get node {node_id}")
    })?;
    info!(node_id, name = %node.entry.name, "Fetched node");
    Ok(node)
}
