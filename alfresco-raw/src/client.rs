use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::error::Error;
use crate::transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};
use crate::types::Response;

/// Basic credentials sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Status-code dispatcher of one endpoint.
pub type ParseFn<T> = fn(&Client, &RawResponse) -> Result<Option<T>, Error>;

/// Handle shared by every endpoint function. Cloning shares the transport
/// and therefore the connection pool.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    raise_on_unexpected_status: bool,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("raise_on_unexpected_status", &self.raise_on_unexpected_status)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Wraps an existing transport, e.g. a `MockTransport` in tests.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            raise_on_unexpected_status: false,
        }
    }

    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    pub fn raises_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    pub(crate) async fn send<T>(
        &self,
        request: ApiRequest,
        parse: ParseFn<T>,
    ) -> Result<Response<T>, Error> {
        let raw = self.transport.execute(request).await?;
        self.finish(raw, parse)
    }

    pub(crate) fn send_blocking<T>(
        &self,
        request: ApiRequest,
        parse: ParseFn<T>,
    ) -> Result<Response<T>, Error> {
        let raw = self.transport.execute_blocking(request)?;
        self.finish(raw, parse)
    }

    fn finish<T>(&self, raw: RawResponse, parse: ParseFn<T>) -> Result<Response<T>, Error> {
        let parsed = parse(self, &raw)?;
        Ok(Response {
            status_code: raw.status,
            headers: raw.headers,
            content: raw.body,
            parsed,
        })
    }
}

/// Decodes a documented success body. A body the model rejects is logged
/// and yields `None`; the caller still has the content on the response.
pub(crate) fn decode<T: DeserializeOwned>(operation: &'static str, raw: &RawResponse) -> Option<T> {
    match serde_json::from_slice(&raw.body) {
        Ok(model) => Some(model),
        Err(e) => {
            warn!(
                operation,
                status = %raw.status,
                error = %e,
                "Response body does not match the declared model"
            );
            None
        }
    }
}

/// Outcome for a status the endpoint does not document.
pub(crate) fn undocumented<T>(
    client: &Client,
    operation: &'static str,
    raw: &RawResponse,
) -> Result<Option<T>, Error> {
    if client.raise_on_unexpected_status {
        let body = String::from_utf8_lossy(&raw.body).into_owned();
        error!(operation, status = %raw.status, "Unexpected status");
        return Err(Error::UnexpectedStatus {
            status: raw.status,
            body,
        });
    }
    warn!(operation, status = %raw.status, "Unexpected status, returning no body");
    Ok(None)
}

/// Configures a [`Client`] backed by [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
    verify_ssl: bool,
    raise_on_unexpected_status: bool,
}

impl ClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            timeout: Duration::from_secs(30),
            verify_ssl: true,
            raise_on_unexpected_status: false,
        }
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(self.base_url));
        }
        let transport =
            ReqwestTransport::new(base_url, self.credentials, self.timeout, !self.verify_ssl)?;
        Ok(Client {
            transport: Arc::new(transport),
            raise_on_unexpected_status: self.raise_on_unexpected_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_unparseable_base_url() {
        let err = Client::builder("not a url").build().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn builder_rejects_non_base_url() {
        let err = Client::builder("mailto:admin@example.com").build().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            username: "admin".into(),
            password: "secret".into(),
        };
        let printed = format!("{creds:?}");
        assert!(printed.contains("admin"));
        assert!(!printed.contains("secret"));
    }
}
