//! `DELETE /nodes/{nodeId}/secondary-children/{childId}`
//!
//! Removes secondary associations only; the child node itself survives.
//! Without `assocType` every secondary association to the child is removed.

use reqwest::Method;

use crate::client::{undocumented, Client};
use crate::error::Error;
use crate::transport::{ApiRequest, ApiRoot, RawResponse};
use crate::types::{Maybe, Response};

const OPERATION: &str = "delete_secondary_child_association";

#[derive(Debug, Clone, Default)]
pub struct Params {
    pub assoc_type: Maybe<String>,
}

pub fn build_request(node_id: &str, child_id: &str, params: &Params) -> ApiRequest {
    ApiRequest::new(
        Method::DELETE,
        ApiRoot::Core,
        ["nodes", node_id, "secondary-children", child_id],
    )
    .query("assocType", &params.assoc_type)
}

fn parse_response(client: &Client, raw: &RawResponse) -> Result<Option<()>, Error> {
    match raw.status.as_u16() {
        204 => Ok(Some(())),
        400 | 401 | 403 | 404 => Ok(None),
        _ => undocumented(client, OPERATION, raw),
    }
}

pub async fn send_detailed(
    client: &Client,
    node_id: &str,
    child_id: &str,
    params: &Params,
) -> Result<Response<()>, Error> {
    client
        .send(build_request(node_id, child_id, params), parse_response)
        .await
}

pub async fn send(
    client: &Client,
    node_id: &str,
    child_id: &str,
    params: &Params,
) -> Result<Option<()>, Error> {
    Ok(send_detailed(client, node_id, child_id, params).await?.parsed)
}

pub fn blocking_detailed(
    client: &Client,
    node_id: &str,
    child_id: &str,
    params: &Params,
) -> Result<Response<()>, Error> {
    client.send_blocking(build_request(node_id, child_id, params), parse_response)
}

pub fn blocking(
    client: &Client,
    node_id: &str,
    child_id: &str,
    params: &Params,
) -> Result<Option<()>, Error> {
    Ok(blocking_detailed(client, node_id, child_id, params)?.parsed)
}
