use alfresco_raw::api::nodes::list_node_children as raw;
use tracing::info;

use super::models::{ListOptions, NodeListResponse, Validate};
use super::{maybe, require_id};
use crate::client::AlfrescoClient;
use crate::error::Result;
use crate::response::{convert, require, Detailed};

const OPERATION: &str = "list_children";

fn prepare(node_id: &str, options: &ListOptions) -> Result<raw::Params> {
    require_id("node_id", node_id)?;
    options.validate()?;
    Ok(raw::Params {
        skip_count: maybe(&options.skip_count),
        max_items: maybe(&options.max_items),
        order_by: maybe(&options.order_by),
        where_: maybe(&options.where_clause),
        include: maybe(&options.include),
        include_source: maybe(&options.include_source),
        fields: maybe(&options.fields),
        ..Default::default()
    })
}

fn listed(node_id: &str, listing: &NodeListResponse) {
    info!(
        node_id,
        count = listing.list.pagination.count,
        has_more = listing.list.pagination.has_more_items,
        "Listed children"
    );
}

pub async fn list_children_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<Detailed<NodeListResponse>> {
    let params = prepare(node_id, options)?;
    let response = raw::send_detailed(client.raw(), node_id, &params).await?;
    convert(OPERATION, response)
}

pub async fn list_children(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<NodeListResponse> {
    let listing = require(list_children_detailed(client, node_id, options).await?, || {
        format!("Failed to list children of node {node_id}")
    })?;
    listed(node_id, &listing);
    Ok(listing)
}

pub fn list_children_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<Detailed<NodeListResponse>> {
    let params = prepare(node_id, options)?;
    let response = raw::blocking_detailed(client.raw(), node_id, &params)?;
    convert(OPERATION, response)
}

pub fn list_children_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<NodeListResponse> {
    let listing = require(list_children_blocking_detailed(client, node_id, options)?, || {
        format!("Failed to list children of node {node_id}")
    })?;
    listed(node_id, &listing);
    Ok(listing)
}
