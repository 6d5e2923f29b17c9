//! `POST /search` on the Search API.

use reqwest::Method;

use crate::client::{decode, undocumented, Client};
use crate::error::Error;
use crate::models::{ResultSetPaging, SearchRequest};
use crate::transport::{ApiRequest, ApiRoot, RawResponse};
use crate::types::Response;

const OPERATION: &str = "search";

pub fn build_request(body: &SearchRequest) -> Result<ApiRequest, Error> {
    ApiRequest::new(Method::POST, ApiRoot::Search, ["search"]).json(body)
}

fn parse_response(client: &Client, raw: &RawResponse) -> Result<Option<ResultSetPaging>, Error> {
    match raw.status.as_u16() {
        200 => Ok(decode(OPERATION, raw)),
        400 | 401 | 403 => Ok(None),
        _ => undocumented(client, OPERATION, raw),
    }
}

pub async fn send_detailed(
    client: &Client,
    body: &SearchRequest,
) -> Result<Response<ResultSetPaging>, Error> {
    client.send(build_request(body)?, parse_response).await
}

pub async fn send(client: &Client, body: &SearchRequest) -> Result<Option<ResultSetPaging>, Error> {
    Ok(send_detailed(client, body).await?.parsed)
}

pub fn blocking_detailed(
    client: &Client,
    body: &SearchRequest,
) -> Result<Response<ResultSetPaging>, Error> {
    client.send_blocking(build_request(body)?, parse_response)
}

pub fn blocking(client: &Client, body: &SearchRequest) -> Result<Option<ResultSetPaging>, Error> {
    Ok(blocking_detailed(client, body)?.parsed)
}
