//! `GET /nodes/{nodeId}/targets`
//!
//! Peer associations where the node is the source. Not paged by the server.

use reqwest::Method;

use crate::client::{decode, undocumented, Client};
use crate::error::Error;
use crate::models::NodeAssociationPaging;
use crate::transport::{ApiRequest, ApiRoot, RawResponse};
use crate::types::{Maybe, Response};

const OPERATION: &str = "list_target_associations";

#[derive(Debug, Clone, Default)]
pub struct Params {
    pub where_: Maybe<String>,
    pub include: Maybe<Vec<String>>,
    pub fields: Maybe<Vec<String>>,
}

pub fn build_request(node_id: &str, params: &Params) -> ApiRequest {
    ApiRequest::new(Method::GET, ApiRoot::Core, ["nodes", node_id, "targets"])
        .query("where", &params.where_)
        .query("include", &params.include)
        .query("fields", &params.fields)
}

fn parse_response(
    client: &Client,
    raw: &RawResponse,
) -> Result<Option<NodeAssociationPaging>, Error> {
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
) -> Result<Response<NodeAssociationPaging>, Error> {
    client.send(build_request(node_id, params), parse_response).await
}

pub async fn send(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Option<NodeAssociationPaging>, Error> {
    Ok(send_detailed(client, node_id, params).await?.parsed)
}

pub fn blocking_detailed(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Response<NodeAssociationPaging>, Error> {
    client.send_blocking(build_request(node_id, params), parse_response)
}

pub fn blocking(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Option<NodeAssociationPaging>, Error> {
    Ok(blocking_detailed(client, node_id, params)?.parsed)
}
