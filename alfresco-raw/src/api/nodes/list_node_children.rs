//! `GET /nodes/{nodeId}/children`
//!
//! Primary children of a folder, paged. `orderBy` takes `field [ASC|DESC]` items.

use reqwest::Method;

use crate::client::{decode, undocumented, Client};
use crate::error::Error;
use crate::models::NodeChildAssociationPaging;
use crate::transport::{ApiRequest, ApiRoot, RawResponse};
use crate::types::{Maybe, Response};

const OPERATION: &str = "list_node_children";

#[derive(Debug, Clone, Default)]
pub struct Params {
    pub skip_count: Maybe<i64>,
    pub max_items: Maybe<i64>,
    pub order_by: Maybe<Vec<String>>,
    pub where_: Maybe<String>,
    pub include: Maybe<Vec<String>>,
    pub relative_path: Maybe<String>,
    pub include_source: Maybe<bool>,
    pub fields: Maybe<Vec<String>>,
}

pub fn build_request(node_id: &str, params: &Params) -> ApiRequest {
    ApiRequest::new(Method::GET, ApiRoot::Core, ["nodes", node_id, "children"])
        .query("skipCount", &params.skip_count)
        .query("maxItems", &params.max_items)
        .query("orderBy", &params.order_by)
        .query("where", &params.where_)
        .query("include", &params.include)
        .query("relativePath", &params.relative_path)
        .query("includeSource", &params.include_source)
        .query("fields", &params.fields)
}

fn parse_response(
    client: &Client,
    raw: &RawResponse,
) -> Result<Option<NodeChildAssociationPaging>, Error> {
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
) -> Result<Response<NodeChildAssociationPaging>, Error> {
    client.send(build_request(node_id, params), parse_response).await
}

pub async fn send(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Option<NodeChildAssociationPaging>, Error> {
    Ok(send_detailed(client, node_id, params).await?.parsed)
}

pub fn blocking_detailed(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Response<NodeChildAssociationPaging>, Error> {
    client.send_blocking(build_request(node_id, params), parse_response)
}

pub fn blocking(
    client: &Client,
    node_id: &str,
    params: &Params,
) -> Result<Option<NodeChildAssociationPaging>, Error> {
    Ok(blocking_detailed(client, node_id, params)?.parsed)
}
