//! `PUT /nodes/{nodeId}/content`
//!
//! The body is the raw file content; its media type is sent as the
//! request's `Content-Type`.

use reqwest::Method;

use crate::client::{decode, undocumented, Client};
use crate::error::Error;
use crate::models::NodeEntry;
use crate::transport::{ApiRequest, ApiRoot, RawResponse, RequestBody};
use crate::types::{Maybe, Response};

const OPERATION: &str = "update_node_content";

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Default)]
pub struct Params {
    pub major_version: Maybe<bool>,
    pub comment: Maybe<String>,
    pub name: Maybe<String>,
    pub include: Maybe<Vec<String>>,
    pub fields: Maybe<Vec<String>>,
}

pub fn build_request(
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    params: &Params,
) -> ApiRequest {
    ApiRequest::new(Method::PUT, ApiRoot::Core, ["nodes", node_id, "content"])
        .query("majorVersion", &params.major_version)
        .query("comment", &params.comment)
        .query("name", &params.name)
        .query("include", &params.include)
        .query("fields", &params.fields)
        .body(RequestBody::Binary {
            content_type: content_type.unwrap_or(DEFAULT_CONTENT_TYPE).to_string(),
            payload: content.to_vec(),
        })
}

fn parse_response(client: &Client, raw: &RawResponse) -> Result<Option<NodeEntry>, Error> {
    match raw.status.as_u16() {
        200 => Ok(decode(OPERATION, raw)),
        400 | 401 | 403 | 404 | 409 | 413 | 422 | 507 => Ok(None),
        _ => undocumented(client, OPERATION, raw),
    }
}

pub async fn send_detailed(
    client: &Client,
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    params: &Params,
) -> Result<Response<NodeEntry>, Error> {
    client
        .send(
            build_request(node_id, content, content_type, params),
            parse_response,
        )
        .await
}

pub async fn send(
    client: &Client,
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    params: &Params,
) -> Result<Option<NodeEntry>, Error> {
    Ok(send_detailed(client, node_id, content, content_type, params)
        .await?
        .parsed)
}

pub fn blocking_detailed(
    client: &Client,
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    params: &Params,
) -> Result<Response<NodeEntry>, Error> {
    client.send_blocking(
        build_request(node_id, content, content_type, params),
        parse_response,
    )
}

pub fn blocking(
    client: &Client,
    node_id: &str,
    content: &[u8],
    content_type: Option<&str>,
    params: &Params,
) -> Result<Option<NodeEntry>, Error> {
    Ok(blocking_detailed(client, node_id, content, content_type, params)?.parsed)
}
