//! Peer associations from a source node to its targets.

use alfresco_raw::api::nodes::{
    create_association as raw_create, list_target_associations as raw_list,
};
use alfresco_raw::models::AssociationBody;
use tracing::info;

use super::models::{
    AssociationResponse, CreateAssociationRequest, ListOptions, NodeListResponse, Validate,
};
use super::{maybe, require_id};
use crate::client::AlfrescoClient;
use crate::conversion::to_raw;
use crate::error::Result;
use crate::response::{convert, require, Detailed};

fn prepare_create(node_id: &str, request: &CreateAssociationRequest) -> Result<AssociationBody> {
    require_id("node_id", node_id)?;
    request.validate()?;
    Ok(to_raw(request)?)
}

/// Targets only support filtering; paging and ordering options are ignored.
fn prepare_list(node_id: &str, options: &ListOptions) -> Result<raw_list::Params> {
    require_id("node_id", node_id)?;
    options.validate()?;
    Ok(raw_list::Params {
        where_: maybe(&options.where_clause),
        include: maybe(&options.include),
        fields: maybe(&options.fields),
    })
}

pub async fn create_association_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CreateAssociationRequest,
) -> Result<Detailed<AssociationResponse>> {
    let body = prepare_create(node_id, request)?;
    let response =
        raw_create::send_detailed(client.raw(), node_id, &body, &Default::default()).await?;
    convert("create_association", response)
}

pub async fn create_association(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CreateAssociationRequest,
) -> Result<AssociationResponse> {
    let assoc = require(create_association_detailed(client, node_id, request).await?, || {
        format!(
            "Failed to create association from node {node_id} to {}",
            request.target_id
        )
    })?;
    info!(
        node_id,
        target_id = %request.target_id,
        assoc_type = %request.assoc_type,
        "Association created"
    );
    Ok(assoc)
}

pub fn create_association_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CreateAssociationRequest,
) -> Result<Detailed<AssociationResponse>> {
    let body = prepare_create(node_id, request)?;
    let response =
        raw_create::blocking_detailed(client.raw(), node_id, &body, &Default::default())?;
    convert("create_association", response)
}

pub fn create_association_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    request: &CreateAssociationRequest,
) -> Result<AssociationResponse> {
    let assoc = require(create_association_blocking_detailed(client, node_id, request)?, || {
        format!(
            "Failed to create association from node {node_id} to {}",
            request.target_id
        )
    })?;
    info!(
        node_id,
        target_id = %request.target_id,
        assoc_type = %request.assoc_type,
        "Association created"
    );
    Ok(assoc)
}

pub async fn list_target_associations_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<Detailed<NodeListResponse>> {
    let params = prepare_list(node_id, options)?;
    let response = raw_list::send_detailed(client.raw(), node_id, &params).await?;
    convert("list_target_associations", response)
}

pub async fn list_target_associations(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<NodeListResponse> {
    let listing = require(
        list_target_associations_detailed(client, node_id, options).await?,
        || format!("Failed to list target associations of node {node_id}"),
    )?;
    info!(node_id, count = listing.list.pagination.count, "Listed target associations");
    Ok(listing)
}

pub fn list_target_associations_blocking_detailed(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<Detailed<NodeListResponse>> {
    let params = prepare_list(node_id, options)?;
    let response = raw_list::blocking_detailed(client.raw(), node_id, &params)?;
    convert("list_target_associations", response)
}

pub fn list_target_associations_blocking(
    client: &AlfrescoClient,
    node_id: &str,
    options: &ListOptions,
) -> Result<NodeListResponse> {
    let listing = require(
        list_target_associations_blocking_detailed(client, node_id, options)?,
        || format!("Failed to list target associations of node {node_id}"),
    )?;
    info!(node_id, count = listing.list.pagination.count, "Listed target associations");
    Ok(listing)
}
