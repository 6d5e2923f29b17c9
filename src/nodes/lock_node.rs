//! Server-side node locks. The server owns expiry; nothing here renews
//! or tracks a lock.

use alfresco_raw::api::nodes::{lock_node as raw_lock, unlock_node as raw_unlock};
use alfresco_raw::models::NodeBodyLock;
use tracing::info;

use super::models::{LockNodeRequest, NodeResponse, Validate};
use super::require_id;
use crate::client::AlfrescoClient;
use crate::conversion::to_raw;
use crate::error::Result;
use crate::response::{convert, require, Detailed};

fn prepare(node_id: &str, request: &LockNodeRequest) -> Result<NodeBodyLock> {
    require_id("node_id", node_id)?;
    request.validate()?;
    Ok(to_raw(request)?)
}

pub async fn lock_node_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &LockNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let body = prepare(node_id, request)?;
    let response =
        raw_lock::send_detailed(client.raw(), node_id, &body, &Default::default()).await?;
    convert("lock_node", response)
}

pub async fn lock_node(
    client: &AlfrescoClient,
    node_id: &str,
    request: &LockNodeRequest,
) -> Result<NodeResponse> {
    let node = require(lock_node_detailed(client, node_id, request).await?, || {
        format!("Failed to lock node {node_id}")
    })?;
    info!(node_id, time_to_expire = ?request.time_to_expire, "Node locked");
    Ok(node)
}

pub fn lock_node_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &LockNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let body = prepare(node_id, request)?;
    let response = raw_lock::blocking_detailed(client.raw(), node_id, &body, &Default::default())?;
    convert("lock_node", response)
}

pub fn lock_node_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    request: &LockNodeRequest,
) -> Result<NodeResponse> {
    let node = require(lock_node_blocking_detailed(client, node_id, request)?, || {
        format!("Failed to lock node {node_id}")
    })?;
    info!(node_id, time_to_expire = ?request.time_to_expire, "Node locked");
    Ok(node)
}

pub async fn unlock_node_detailed(
    client: &AlfrescoClient,
    node_id: &str,
) -> Result<Detailed<NodeResponse>> {
    require_id("node_id", node_id)?;
    let response = raw_unlock::send_detailed(client.raw(), node_id, &Default::default()).await?;
    convert("unlock_node", response)
}

pub async fn unlock_node(client: &AlfrescoClient, node_id: &str) -> Result<NodeResponse> {
    let node = require(unlock_node_detailed(client, node_id).await?, || {
        format!("Failed to unlock node {node_id}")
    })?;
    info!(node_id, "Node unlocked");
    Ok(node)
}

pub fn unlock_node_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
) -> Result<Detailed<NodeResponse>> {
    require_id("node_id", node_id)?;
    let response = raw_unlock::blocking_detailed(client.raw(), node_id, &Default::default())?;
    convert("unlock_node", response)
}

pub fn unlock_node_blocking(client: &AlfrescoClient, node_id: &str) -> Result<NodeResponse> {
    let node = require(unlock_node_blocking_detailed(client, node_id)?, || {
        format!("Failed to unlock node {node_id}")
    })?;
    info!(node_id, "Node unlocked");
    Ok(node)
}
