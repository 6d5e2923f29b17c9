//! Secondary child associations: a node filed under extra parents without
//! changing its primary (owning) parent.

use alfresco_raw::api::nodes::{
    create_secondary_child_association as raw_create,
    delete_secondary_child_association as raw_delete, list_secondary_children as raw_list,
};
use alfresco_raw::models::ChildAssociationBody;
use alfresco_raw::Maybe;
use tracing::info;

use super::models::{
    ChildAssociationResponse, CreateSecondaryChildRequest, ListOptions, NodeListResponse, Validate,
};
use super::{maybe, require_id};
use crate::client::AlfrescoClient;
use crate::conversion::to_raw;
use crate::error::Result;
use crate::response::{convert, require, Detailed};

fn prepare_create(
    node_id: &str,
    request: &CreateSecondaryChildRequest,
) -> Result<ChildAssociationBody> {
    require_id("node_id", node_id)?;
    request.validate()?;
    Ok(to_raw(request)?)
}

fn prepare_list(node_id: &str, options: &ListOptions) -> Result<raw_list::Params> {
    require_id("node_id", node_id)?;
    options.validate()?;
    Ok(raw_list::Params {
        where_: maybe(&options.where_clause),
        include: maybe(&options.include),
        skip_count: maybe(&options.skip_count),
        max_items: maybe(&options.max_items),
        include_source: maybe(&options.include_source),
        fields: maybe(&options.fields),
    })
}

fn prepare_delete(
    node_id: &str,
    child_id: &str,
    assoc_type: Option<&str>,
) -> Result<raw_delete::Params> {
    require_id("node_id", node_id)?;
    require_id("child_id", child_id)?;
    Ok(raw_delete::Params {
        assoc_type: Maybe::from_option(assoc_type.map(str::to_string)),
    })
}

pub async fn create_secondary_child_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CreateSecondaryChildRequest,
) -> Result<Detailed<ChildAssociationResponse>> {
    let body = prepare_create(node_id, request)?;
    let response =
        raw_create::send_detailed(client.raw(), node_id, &body, &Default::default()).await?;
    convert("create_secondary_child", response)
}

pub async fn create_secondary_child(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CreateSecondaryChildRequest,
) -> Result<ChildAssociationResponse> {
    let assoc = require(
        create_secondary_child_detailed(client, node_id, request).await?,
        || format!("Failed to add secondary child {} to node {node_id}", request.child_id),
    )?;
    info!(node_id, child_id = %request.child_id, "Secondary child added");
    Ok(assoc)
}

pub fn create_secondary_child_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CreateSecondaryChildRequest,
) -> Result<Detailed<ChildAssociationResponse>> {
    let body = prepare_create(node_id, request)?;
    let response =
        raw_create::blocking_detailed(client.raw(), node_id, &body, &Default::default())?;
    convert("create_secondary_child", response)
}

pub fn create_secondary_child_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CreateSecondaryChildRequest,
) -> Result<ChildAssociationResponse> {
    let assoc = require(
        create_secondary_child_blocking_detailed(client, node_id, request)?,
        || format!("Failed to add secondary child {} to node {node_id}", request.child_id),
    )?;
    info!(node_id, child_id = %request.child_id, "Secondary child added");
    Ok(assoc)
}

/// A node without secondary children yields an empty listing with a zero
/// count, not an error.
pub async fn list_secondary_children_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<Detailed<NodeListResponse>> {
    let params = prepare_list(node_id, options)?;
    let response = raw_list::send_detailed(client.raw(), node_id, &params).await?;
    convert("list_secondary_children", response)
}

pub async fn list_secondary_children(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<NodeListResponse> {
    let listing = require(
        list_secondary_children_detailed(client, node_id, options).await?,
        || format!("Failed to list secondary children of node {node_id}"),
    )?;
    info!(node_id, count = listing.list.pagination.count, "Listed secondary children");
    Ok(listing)
}

pub fn list_secondary_children_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<Detailed<NodeListResponse>> {
    let params = prepare_list(node_id, options)?;
    let response = raw_list::blocking_detailed(client.raw(), node_id, &params)?;
    convert("list_secondary_children", response)
}

pub fn list_secondary_children_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<NodeListResponse> {
    let listing = require(
        list_secondary_children_blocking_detailed(client, node_id, options)?,
        || format!("Failed to list secondary children of node {node_id}"),
    )?;
    info!(node_id, count = listing.list.pagination.count, "Listed secondary children");
    Ok(listing)
}

/// Removes secondary associations between the two nodes, only those of
/// `assoc_type` when given.
pub async fn delete_secondary_child_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    child_id: &str,
    assoc_type: Option<&str>,
) -> Result<Detailed<()>> {
    let params = prepare_delete(node_id, child_id, assoc_type)?;
    Ok(raw_delete::send_detailed(client.raw(), node_id, child_id, &params).await?)
}

pub async fn delete_secondary_child(
    client: &AlfrescoClient,
    node_id: &str,
    child_id: &str,
    assoc_type: Option<&str>,
) -> Result<()> {
    require(
        delete_secondary_child_detailed(client, node_id, child_id, assoc_type).await?,
        || format!("Failed to remove secondary child {child_id} from node {node_id}"),
    )?;
    info!(node_id, child_id, "Secondary child removed");
    Ok(())
}

pub fn delete_secondary_child_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    child_id: &str,
    assoc_type: Option<&str>,
) -> Result<Detailed<()>> {
    let params = prepare_delete(node_id, child_id, assoc_type)?;
    Ok(raw_delete::blocking_detailed(client.raw(), node_id, child_id, &params)?)
}

pub fn delete_secondary_child_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    child_id: &str,
    assoc_type: Option<&str>,
) -> Result<()> {
    require(
        delete_secondary_child_blocking_detailed(client, node_id, child_id, assoc_type)?,
        || format!("Failed to remove secondary child {child_id} from node {node_id}"),
    )?;
    info!(node_id, child_id, "Secondary child removed");
    Ok(())
}
