//! Metadata and content updates.

use alfresco_raw::api::nodes::{update_node as raw_update, update_node_content as raw_content};
use alfresco_raw::models::NodeBodyUpdate;
use tracing::info;

use super::models::{NodeResponse, UpdateContentRequest, UpdateNodeRequest, Validate};
use super::{maybe, require_id};
use crate::client::AlfrescoClient;
use crate::conversion::to_raw;
use crate::error::Result;
use crate::response::{convert, require, Detailed};

fn prepare_update(node_id: &str, request: &UpdateNodeRequest) -> Result<NodeBodyUpdate> {
    require_id("node_id", node_id)?;
    request.validate()?;
    Ok(to_raw(request)?)
}

fn prepare_content(node_id: &str, request: &UpdateContentRequest) -> Result<raw_content::Params> {
    require_id("node_id", node_id)?;
    request.validate()?;
    Ok(raw_content::Params {
        major_version: maybe(&request.major_version),
        comment: maybe(&request.comment),
        name: maybe(&request.name),
        ..Default::default()
    })
}

pub async fn update_node_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &UpdateNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let body = prepare_update(node_id, request)?;
    let response =
        raw_update::send_detailed(client.raw(), node_id, &body, &Default::default()).await?;
    convert("update_node", response)
}

pub async fn update_node(
    client: &AlfrescoClient,
    node_id: &str,
    request: &UpdateNodeRequest,
) -> Result<NodeResponse> {
    let node = require(update_node_detailed(client, node_id, request).await?, || {
        format!("Failed to update node {node_id}")
    })?;
    info!(node_id, name = %node.entry.name, "Node updated");
    Ok(node)
}

pub fn update_node_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &UpdateNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let body = prepare_update(node_id, request)?;
    let response =
        raw_update::blocking_detailed(client.raw(), node_id, &body, &Default::default())?;
    convert("update_node", response)
}

pub fn update_node_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    request: &UpdateNodeRequest,
) -> Result<NodeResponse> {
    let node = require(update_node_blocking_detailed(client, node_id, request)?, || {
        format!("Failed to update node {node_id}")
    })?;
    info!(node_id, name = %node.entry.name, "Node updated");
    Ok(node)
}

/// Replaces the node's content. `content_type` defaults to
/// `application/octet-stream`.
pub async fn update_node_content_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    request: &UpdateContentRequest,
) -> Result<Detailed<NodeResponse>> {
    let params = prepare_content(node_id, request)?;
    let response =
        raw_content::send_detailed(client.raw(), node_id, content, content_type, &params).await?;
    convert("update_node_content", response)
}

pub async fn update_node_content(
    client: &AlfrescoClient,
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    request: &UpdateContentRequest,
) -> Result<NodeResponse> {
    let node = require(
        update_node_content_detailed(client, node_id, content, content_type, request).await?,
        || format!("Failed to update content of node {node_id}"),
    )?;
    info!(node_id, bytes = content.len(), "Node content updated");
    Ok(node)
}

pub fn update_node_content_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    request: &UpdateContentRequest,
) -> Result<Detailed<NodeResponse>> {
    let params = prepare_content(node_id, request)?;
    let response =
        raw_content::blocking_detailed(client.raw(), node_id, content, content_type, &params)?;
    convert("update_node_content", response)
}

pub fn update_node_content_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    request: &UpdateContentRequest,
) -> Result<NodeResponse> {
    let node = require(
        update_node_content_blocking_detailed(client, node_id, content, content_type, request)?,
        || format!("Failed to update content of node {node_id}"),
    )?;
    info!(node_id, bytes = content.len(), "Node content updated");
    Ok(node)
}
