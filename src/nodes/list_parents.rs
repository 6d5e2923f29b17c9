use alfresco_raw::api::nodes::list_parents as raw;
use tracing::info;

use super::models::{ListOptions, NodeListResponse, Validate};
use super::{maybe, require_id};
use crate::client::AlfrescoClient;
use crate::error::Result;
use crate::response::{convert, require, Detailed};

const OPERATION: &str = "list_parents";

fn prepare(node_id: &str, options: &ListOptions) -> Result<raw::Params> {
    require_id("node_id", node_id)?;
    options.validate()?;
    Ok(raw::Params {
        where_: maybe(&options.where_clause),
        include: maybe(&options.include),
        skip_count: maybe(&options.skip_count),
        max_items: maybe(&options.max_items),
        include_source: maybe(&options.include_source),
        fields: maybe(&options.fields),
    })
}

/// Primary and secondary parents of a node, each with its association.
pub async fn list_parents_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<Detailed<NodeListResponse>> {
    let params = prepare(node_id, options)?;
    let response = raw::send_detailed(client.raw(), node_id, &params).await?;
    convert(OPERATION, response)
}

pub async fn list_parents(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<NodeListResponse> {
    let listing = require(list_parents_detailed(client, node_id, options).await?, || {
        format!("Failed to list parents of node {node_id}")
    })?;
    info!(node_id, count = listing.list.pagination.count, "Listed parents");
    Ok(listing)
}

pub fn list_parents_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<Detailed<NodeListResponse>> {
    let params = prepare(node_id, options)?;
    let response = raw::blocking_detailed(client.raw(), node_id, &params)?;
    convert(OPERATION, response)
}

pub fn list_parents_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<NodeListResponse> {
    let listing = require(list_parents_blocking_detailed(client, node_id, options)?, || {
        format!("Failed to list parents of node {node_id}")
    })?;
    info!(node_id, count = listing.list.pagination.count, "Listed parents");
    Ok(listing)
}
