//! `GET /nodes/{nodeId}`

use reqwest::Method;

use crate::client::{decode, undocumented, Client};
use crate::error::Error;
use crate::models::NodeEntry;
use crate::transport::{ApiRequest, ApiRoot, RawResponse};
use crate::types::{Maybe, Response};

const OPERATION: &str = "get_node";

#[derive(Debug, Clone, Default)]
pub struct Params {
    pub relative_path: Maybe<String>,
    pub include: Maybe<Vec<String>>,
    pub fields: Maybe<Vec<String>>,
}

pub fn build_request(node_id: &str, params: &Params) -> ApiRequest {
    ApiRequest::new(Method::GET, ApiRoot::Core, ["nodes", node_id])
        .query("relativePath", &params.relative_path)
        .query("include", &params.include)
        .query("fields", &params.fields)
}

fn parse_response(client: &Client, raw: &RawResponse) -> Result<Option<NodeEntry>, Error> {
    match raw.status.as_u16() {
        200 => Ok(decode(OPERATION, raw)),
        400 | 401 | 403 | 404 => Ok(None),
        _ => undocumented(client, OPERATION, raw),
    }
}

pub async fn send_detailed(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Response<NodeEntry>, Error> {
    client.send(build_request(node_id, params), parse_response).await
}

pub async fn send(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Option<NodeEntry>, Error> {
    Ok(send_detailed(client, node_id, params).await?.parsed)
}

pub fn blocking_detailed(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Response<NodeEntry>, Error> {
    client.send_blocking(build_request(node_id, params), parse_response)
}

pub fn blocking(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Option<NodeEntry>, Error> {
    Ok(blocking_detailed(client, node_id, params)?.parsed)
}
