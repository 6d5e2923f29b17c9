//! `POST /nodes/{nodeId}/secondary-children`
//!
//! Adds `childId` as a secondary (non-owning) child of the node.

use reqwest::Method;

use crate::client::{decode, undocumented, Client};
use crate::error::Error;
use crate::models::{ChildAssociationBody, ChildAssociationEntry};
use crate::transport::{ApiRequest, ApiRoot, RawResponse};
use crate::types::{Maybe, Response};

const OPERATION: &str = "create_secondary_child_association";

#[derive(Debug, Clone, Default)]
pub struct Params {
    pub fields: Maybe<Vec<String>>,
}

pub fn build_request(
    node_id: &str,
    body: &ChildAssociationBody,
    params: &Params,
) -> Result<ApiRequest, Error> {
    ApiRequest::new(Method::POST, ApiRoot::Core, ["nodes", node_id, "secondary-children"])
        .query("fields", &params.fields)
        .json(body)
}

fn parse_response(
    client: &Client,
    raw: &RawResponse,
) -> Result<Option<ChildAssociationEntry>, Error> {
    match raw.status.as_u16() {
        201 => Ok(decode(OPERATION, raw)),
        400 | 401 | 403 | 404 | 409 | 422 => Ok(None),
        _ => undocumented(client, OPERATION, raw),
    }
}

pub async fn send_detailed(
    client: &Client,
    node_id: &str,
    body: &ChildAssociationBody,
    params: &Params,
) -> Result<Response<ChildAssociationEntry>, Error> {
    client
        .send(build_request(node_id, body, params)?, parse_response)
        .await
}

pub async fn send(
    client: &Client,
    node_id: &str,
    body: &ChildAssociationBody,
    params: &Params,
) -> Result<Option<ChildAssociationEntry>, Error> {
    Ok(send_detailed(client, node_id, body, params).await?.parsed)
}

pub fn blocking_detailed(
    client: &Client,
    node_id: &str,
    body: &ChildAssociationBody,
    params: &Params,
) -> Result<Response<ChildAssociationEntry>, Error> {
    client.send_blocking(build_request(node_id, body, params)?, parse_response)
}

pub fn blocking(
    client: &Client,
    node_id: &str,
    body: &ChildAssociationBody,
    params: &Params,
) -> Result<Option<ChildAssociationEntry>, Error> {
    Ok(blocking_detailed(client, node_id, body, params)?.parsed)
}
