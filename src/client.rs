use alfresco_raw::Client;
use tracing::info;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Handle passed to every high-level operation.
///
/// Wraps the raw [`Client`]; cloning is cheap and shares the connection
/// pool.
#[derive(Debug, Clone)]
pub struct AlfrescoClient {
    raw: Client,
}

impl AlfrescoClient {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder(config.base_url.as_str())
            .timeout(config.timeout())
            .verify_ssl(config.verify_ssl)
            .raise_on_unexpected_status(config.raise_on_unexpected_status);
        if config.has_credentials() {
            builder = builder.basic_auth(config.username.as_str(), config.password.as_str());
        }
        let raw = builder.build().map_err(|e| match e {
            alfresco_raw::Error::InvalidUrl(url) => {
                Error::Config(format!("invalid base URL {url}"))
            }
            other => Error::Raw(other),
        })?;
        info!(
            base_url = %config.base_url,
            verify_ssl = config.verify_ssl,
            timeout_secs = config.timeout_secs,
            "Alfresco client ready"
        );
        Ok(Self { raw })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    /// Uses an already built raw client, e.g. one backed by a mock
    /// transport.
    pub fn from_raw(raw: Client) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Client {
        &self.raw
    }
}

impl From<Client> for AlfrescoClient {
    fn from(raw: Client) -> Self {
        Self::from_raw(raw)
    }
}
