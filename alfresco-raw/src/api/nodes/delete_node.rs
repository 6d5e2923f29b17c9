//! `DELETE /nodes/{nodeId}`
//!
//! Without `permanent=true` the node goes to the trashcan.

use reqwest::Method;

use crate::client::{undocumented, Client};
use crate::error::Error;
use crate::transport::{ApiRequest, ApiRoot, RawResponse};
use crate::types::{Maybe, Response};

const OPERATION: &str = "delete_node";

#[derive(Debug, Clone, Default)]
pub struct Params {
    pub permanent: Maybe<bool>,
}

pub fn build_request(node_id: &str, params: &Params) -> ApiRequest {
    ApiRequest::new(Method::DELETE, ApiRoot::Core, ["nodes", node_id])
        .query("permanent", &params.permanent)
}

fn parse_response(client: &Client, raw: &RawResponse) -> Result<Option<()>, Error> {
    match raw.status.as_u16() {
        204 => Ok(Some(())),
        401 | 403 | 404 | 409 => Ok(None),
        _ => undocumented(client, OPERATION, raw),
    }
}

pub async fn send_detailed(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Response<()>, Error> {
    client.send(build_request(node_id, params), parse_response).await
}

pub async fn send(client: &Client, node_id: &str, params: &Params) -> Result<Option<()>, Error> {
    Ok(send_detailed(client, node_id, params).await?.parsed)
}

pub fn blocking_detailed(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Response<()>, Error> {
    client.send_blocking(build_request(node_id, params), parse_response)
}

pub fn blocking(client: &Client, node_id: &str, params: &Params) -> Result<Option<()>, Error> {
    Ok(blocking_detailed(client, node_id, params)?.parsed)
}
