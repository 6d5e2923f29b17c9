use alfresco_raw::api::nodes::delete_node as raw;
use alfresco_raw::Maybe;
use tracing::info;

use super::require_id;
use crate::client::AlfrescoClient;
use crate::error::Result;
use crate::response::{require, Detailed};

fn params(permanent: bool) -> raw::Params {
    raw::Params {
        permanent: if permanent { Maybe::Value(true) } else { Maybe::Unset },
    }
}

/// Deletes a node. Without `permanent` the node goes to the trashcan.
pub async fn delete_node_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    permanent: bool,
) -> Result<Detailed<()>> {
    require_id("node_id", node_id)?;
    Ok(raw::send_detailed(client.raw(), node_id, &params(permanent)).await?)
}

pub async fn delete_node(client: &AlfrescoClient, node_id: &str, permanent: bool) -> Result<()> {
    require(delete_node_detailed(client, node_id, permanent).await?, || {
        format!("Failed to delete node {node_id}")
    })?;
    info!(node_id, permanent, "Node deleted");
    Ok(())
}

pub fn delete_node_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    permanent: bool,
) -> Result<Detailed<()>> {
    require_id("node_id", node_id)?;
    Ok(raw::blocking_detailed(client.raw(), node_id, &params(permanent))?)
}

pub fn delete_node_blocking(client: &AlfrescoClient, node_id: &str, permanent: bool) -> Result<()> {
    require(delete_node_blocking_detailed(client, node_id, permanent)?, || {
        format!("Failed to delete node {node_id}")
    })?;
    info!(node_id, permanent, "Node deleted");
    Ok(())
}
