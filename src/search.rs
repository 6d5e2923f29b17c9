//! Node search through the Search API.

use alfresco_raw::api::search as raw;
use alfresco_raw::models::SearchRequest;
use tracing::info;

use crate::client::AlfrescoClient;
use crate::conversion::to_raw;
use crate::error::Result;
use crate::nodes::models::{SearchNodesRequest, SearchResponse, Validate};
use crate::response::{convert, require, Detailed};

const OPERATION: &str = "search_nodes";

fn prepare(request: &SearchNodesRequest) -> Result<SearchRequest> {
    request.validate()?;
    Ok(to_raw(request)?)
}

fn failure(request: &SearchNodesRequest) -> impl FnOnce() -> String + '_ {
    move || format!("Search failed for query {:?}", request.query.query)
}

pub async fn search_nodes_detailed(
    client: &AlfrescoClient,
    request: &SearchNodesRequest,
) -> Result<Detailed<SearchResponse>> {
    let body = prepare(request)?;
    let response = raw::send_detailed(client.raw(), &body).await?;
    convert(OPERATION, response)
}

pub async fn search_nodes(
    client: &AlfrescoClient,
    request: &SearchNodesRequest,
) -> Result<SearchResponse> {
    let results = require(search_nodes_detailed(client, request).await?, failure(request))?;
    info!(hits = results.list.entries.len(), "Search completed");
    Ok(results)
}

pub fn search_nodes_blocking_detailed(
    client: &AlfrescoClient,
    request: &SearchNodesRequest,
) -> Result<Detailed<SearchResponse>> {
    let body = prepare(request)?;
    let response = raw::blocking_detailed(client.raw(), &body)?;
    convert(OPERATION, response)
}

pub fn search_nodes_blocking(
    client: &AlfrescoClient,
    request: &SearchNodesRequest,
) -> Result<SearchResponse> {
    let results = require(search_nodes_blocking_detailed(client, request)?, failure(request))?;
    info!(hits = results.list.entries.len(), "Search completed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alfresco_raw::WireModel;
    use serde_json::json;

    #[test]
    fn search_request_maps_onto_raw_body() {
        let mut request = SearchNodesRequest::afts("TYPE:'cm:content' AND name:report*");
        request.include = Some(vec!["properties".into()]);
        let body = prepare(&request).unwrap();
        assert_eq!(
            body.to_wire().unwrap(),
            json!({
                "query": {"query": "TYPE:'cm:content' AND name:report*", "language": "afts"},
                "include": ["properties"]
            })
        );
    }

    #[test]
    fn blank_query_is_rejected() {
        assert!(prepare(&SearchNodesRequest::afts(" ")).is_err());
    }
}
