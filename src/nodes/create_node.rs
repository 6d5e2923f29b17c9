//! Node creation under a parent: metadata-only (JSON), with file content
//! (multipart), and the folder shorthand.

use alfresco_raw::api::nodes::create_node as raw;
use alfresco_raw::models::{MultipartFile, NodeBodyCreate, NodeBodyCreateMultipart};
use alfresco_raw::Maybe;
use serde_json::Value;
use tracing::info;

use super::models::{ContentUpload, CreateNodeRequest, NodeResponse, Validate};
use super::{maybe, require_id};
use crate::client::AlfrescoClient;
use crate::conversion::to_raw;
use crate::error::{Error, Result};
use crate::response::{convert, require, Detailed};

fn prepare_json(parent_id: &str, request: &CreateNodeRequest) -> Result<(raw::Body, raw::Params)> {
    require_id("parent_id", parent_id)?;
    request.validate()?;
    let body: NodeBodyCreate = to_raw(request)?;
    let params = raw::Params {
        auto_rename: maybe(&request.auto_rename),
        ..Default::default()
    };
    Ok((raw::Body::Json(body), params))
}

fn prepare_multipart(
    parent_id: &str,
    request: &CreateNodeRequest,
    upload: &ContentUpload,
) -> Result<(raw::Body, raw::Params)> {
    require_id("parent_id", parent_id)?;
    request.validate()?;
    if request.aspect_names.is_some() {
        return Err(Error::InvalidArgument(
            "aspect_names cannot be sent with file content; add them with update_node".to_string(),
        ));
    }

    let mut form = NodeBodyCreateMultipart::new(MultipartFile {
        file_name: upload.file_name.clone(),
        mime_type: upload.mime_type.clone(),
        payload: upload.bytes.clone(),
    });
    form.name = Maybe::Value(request.name.clone());
    form.node_type = Maybe::Value(request.node_type.clone());
    form.relative_path = maybe(&request.relative_path);
    form.auto_rename = maybe(&request.auto_rename);
    for (key, value) in request.properties.iter().flatten() {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(_) | Value::Number(_) => value.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::InvalidArgument(format!(
                    "property {key} is not a scalar and cannot be sent with file content; \
                     set it with update_node"
                )));
            }
        };
        form.properties.push((key.clone(), text));
    }
    Ok((raw::Body::Multipart(form), raw::Params::default()))
}

fn failure(parent_id: &str) -> impl FnOnce() -> String + '_ {
    move || format!("Failed to create node in parent {parent_id}")
}

fn created(operation: &str, parent_id: &str, node: &NodeResponse) {
    info!(
        operation,
        parent_id,
        node_id = %node.entry.id,
        name = %node.entry.name,
        "Node created"
    );
}

async fn send(
    operation: &'static str,
    client: &AlfrescoClient,
    parent_id: &str,
    body: &raw::Body,
    params: &raw::Params,
) -> Result<Detailed<NodeResponse>> {
    let response = raw::send_detailed(client.raw(), parent_id, body, params).await?;
    convert(operation, response)
}

fn send_blocking(
    operation: &'static str,
    client: &AlfrescoClient,
    parent_id: &str,
    body: &raw::Body,
    params: &raw::Params,
) -> Result<Detailed<NodeResponse>> {
    let response = raw::blocking_detailed(client.raw(), parent_id, body, params)?;
    convert(operation, response)
}

pub async fn create_node_detailed(
    client: &AlfrescoClient,
    parent_id: &str,
    request: &CreateNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let (body, params) = prepare_json(parent_id, request)?;
    send("create_node", client, parent_id, &body, &params).await
}

pub async fn create_node(
    client: &AlfrescoClient,
    parent_id: &str,
    request: &CreateNodeRequest,
) -> Result<NodeResponse> {
    let node = require(
        create_node_detailed(client, parent_id, request).await?,
        failure(parent_id),
    )?;
    created("create_node", parent_id, &node);
    Ok(node)
}

pub fn create_node_blocking_detailed(
    client: &AlfrescoClient,
    parent_id: &str,
    request: &CreateNodeRequest,
) -> Result<Detailed<NodeResponse>> {
    let (body, params) = prepare_json(parent_id, request)?;
    send_blocking("create_node", client, parent_id, &body, &params)
}

pub fn create_node_blocking(
    client: &AlfrescoClient,
    parent_id: &str,
    request: &CreateNodeRequest,
) -> Result<NodeResponse> {
    let node = require(
        create_node_blocking_detailed(client, parent_id, request)?,
        failure(parent_id),
    )?;
    created("create_node", parent_id, &node);
    Ok(node)
}

pub async fn create_node_with_content_detailed(
    client: &AlfrescoClient,
    parent_id: &str,
    request: &CreateNodeRequest,
    upload: &ContentUpload,
) -> Result<Detailed<NodeResponse>> {
    let (body, params) = prepare_multipart(parent_id, request, upload)?;
    send("create_node_with_content", client, parent_id, &body, &params).await
}

/// Uploads `upload` as a new node under `parent_id`.
///
/// Properties travel as multipart text fields, so only scalar values are
/// accepted; set multi-valued properties and aspects afterwards with
/// [`update_node`](super::update_node).
pub async fn create_node_with_content(
    client: &AlfrescoClient,
    parent_id: &str,
    request: &CreateNodeRequest,
    upload: &ContentUpload,
) -> Result<NodeResponse> {
    let node = require(
        create_node_with_content_detailed(client, parent_id, request, upload).await?,
        failure(parent_id),
    )?;
    created("create_node_with_content", parent_id, &node);
    Ok(node)
}

pub fn create_node_with_content_blocking_detailed(
    client: &AlfrescoClient,
    parent_id: &str,
    request: &CreateNodeRequest,
    upload: &ContentUpload,
) -> Result<Detailed<NodeResponse>> {
    let (body, params) = prepare_multipart(parent_id, request, upload)?;
    send_blocking("create_node_with_content", client, parent_id, &body, &params)
}

pub fn create_node_with_content_blocking(
    client: &AlfrescoClient,
    parent_id: &str,
    request: &CreateNodeRequest,
    upload: &ContentUpload,
) -> Result<NodeResponse> {
    let node = require(
        create_node_with_content_blocking_detailed(client, parent_id, request, upload)?,
        failure(parent_id),
    )?;
    created("create_node_with_content", parent_id, &node);
    Ok(node)
}

pub async fn create_folder_detailed(
    client: &AlfrescoClient,
    parent_id: &str,
    name: &str,
) -> Result<Detailed<NodeResponse>> {
    let (body, params) = prepare_json(parent_id, &CreateNodeRequest::folder(name))?;
    send("create_folder", client, parent_id, &body, &params).await
}

pub async fn create_folder(
    client: &AlfrescoClient,
    parent_id: &str,
    name: &str,
) -> Result<NodeResponse> {
    let node = require(create_folder_detailed(client, parent_id, name).await?, || {
        format!("Failed to create folder {name} in parent {parent_id}")
    })?;
    created("create_folder", parent_id, &node);
    Ok(node)
}

pub fn create_folder_blocking_detailed(
    client: &AlfrescoClient,
    parent_id: &str,
    name: &str,
) -> Result<Detailed<NodeResponse>> {
    let (body, params) = prepare_json(parent_id, &CreateNodeRequest::folder(name))?;
    send_blocking("create_folder", client, parent_id, &body, &params)
}

pub fn create_folder_blocking(
    client: &AlfrescoClient,
    parent_id: &str,
    name: &str,
) -> Result<NodeResponse> {
    let node = require(create_folder_blocking_detailed(client, parent_id, name)?, || {
        format!("Failed to create folder {name} in parent {parent_id}")
    })?;
    created("create_folder", parent_id, &node);
    Ok(node)
}
