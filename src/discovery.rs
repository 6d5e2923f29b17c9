//! Repository information from the Discovery API.

use alfresco_raw::api::discovery as raw;
use tracing::info;

use crate::client::AlfrescoClient;
use crate::error::Result;
use crate::nodes::models::RepositoryInfoResponse;
use crate::response::{convert, require, Detailed};

const OPERATION: &str = "get_repository_info";
const FAILURE: &str = "Failed to read repository information";

fn report(info: &RepositoryInfoResponse) {
    let repository = &info.entry.repository;
    info!(
        repository_id = %repository.id,
        edition = repository.edition.as_deref().unwrap_or_default(),
        version = repository
            .version
            .as_ref()
            .and_then(|v| v.display.as_deref())
            .unwrap_or_default(),
        "Repository information read"
    );
}

pub async fn get_repository_info_detailed(
    client: &AlfrescoClient,
) -> Result<Detailed<RepositoryInfoResponse>> {
    let response = raw::send_detailed(client.raw()).await?;
    convert(OPERATION, response)
}

pub async fn get_repository_info(client: &AlfrescoClient) -> Result<RepositoryInfoResponse> {
    let info = require(get_repository_info_detailed(client).await?, || FAILURE.to_string())?;
    report(&info);
    Ok(info)
}

pub fn get_repository_info_blocking_detailed(
    client: &AlfrescoClient,
) -> Result<Detailed<RepositoryInfoResponse>> {
    let response = raw::blocking_detailed(client.raw())?;
    convert(OPERATION, response)
}

pub fn get_repository_info_blocking(client: &AlfrescoClient) -> Result<RepositoryInfoResponse> {
    let info = require(get_repository_info_blocking_detailed(client)?, || FAILURE.to_string())?;
    report(&info);
    Ok(info)
}
