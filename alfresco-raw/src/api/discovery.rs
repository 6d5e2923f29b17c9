//! `GET /alfresco/api/discovery`
//!
//! Repository edition, version, status flags and installed modules.
//! Servers with discovery disabled answer 501.

use reqwest::Method;

use crate::client::{decode, undocumented, Client};
use crate::error::Error;
use crate::models::DiscoveryEntry;
use crate::transport::{ApiRequest, ApiRoot, RawResponse};
use crate::types::Response;

const OPERATION: &str = "get_repository_information";

pub fn build_request() -> ApiRequest {
    ApiRequest::new(Method::GET, ApiRoot::Discovery, Vec::<String>::new())
}

fn parse_response(client: &Client, raw: &RawResponse) -> Result<Option<DiscoveryEntry>, Error> {
    match raw.status.as_u16() {
        200 => Ok(decode(OPERATION, raw)),
        401 | 501 => Ok(None),
        _ => undocumented(client, OPERATION, raw),
    }
}

pub async fn send_detailed(client: &Client) -> Result<Response<DiscoveryEntry>, Error> {
    client.send(build_request(), parse_response).await
}

pub async fn send(client: &Client) -> Result<Option<DiscoveryEntry>, Error> {
    Ok(send_detailed(client).await?.parsed)
}

pub fn blocking_detailed(client: &Client) -> Result<Response<DiscoveryEntry>, Error> {
    client.send_blocking(build_request(), parse_response)
}

pub fn blocking(client: &Client) -> Result<Option<DiscoveryEntry>, Error> {
    Ok(blocking_detailed(client)?.parsed)
}
