//! Request descriptors and the HTTP transport seam.
//!
//! Endpoint functions never talk to reqwest directly: they build an
//! [`ApiRequest`] and hand it to a [`Transport`]. The production transport
//! is [`ReqwestTransport`]; tests inject the mockall-generated
//! `MockTransport` and answer with canned [`RawResponse`]s.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use tracing::debug;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::client::Credentials;
use crate::error::Error;
use crate::types::Maybe;

/// Which public API a request targets; each has its own path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoot {
    Core,
    Search,
    Discovery,
}

impl ApiRoot {
    pub fn segments(&self) -> &'static [&'static str] {
        match self {
            ApiRoot::Core => &[
                "alfresco", "api", "-default-", "public", "alfresco", "versions", "1",
            ],
            ApiRoot::Search => &[
                "alfresco", "api", "-default-", "public", "search", "versions", "1",
            ],
            ApiRoot::Discovery => &["alfresco", "api", "discovery"],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime_type: Option<String>,
        payload: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
    Binary {
        content_type: String,
        payload: Vec<u8>,
    },
}

/// Values that can appear in a query string.
pub trait QueryValue {
    fn to_query(&self) -> String;
}

impl QueryValue for bool {
    fn to_query(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i64 {
    fn to_query(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query(&self) -> String {
        self.clone()
    }
}

/// Alfresco list parameters (`include`, `fields`, `orderBy`) are
/// comma-separated.
impl QueryValue for Vec<String> {
    fn to_query(&self) -> String {
        self.join(",")
    }
}

/// Everything a transport needs to perform one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub root: ApiRoot,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new<I, S>(method: Method, root: ApiRoot, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            root,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Adds a query pair unless the value is unset or null.
    pub fn query<T: QueryValue>(mut self, key: &str, value: &Maybe<T>) -> Self {
        if let Maybe::Value(v) = value {
            self.query.push((key.to_string(), v.to_query()));
        }
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Resolves the full URL. Path segments are percent-encoded.
    pub fn url(&self, base: &Url) -> Result<Url, Error> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidUrl(base.to_string()))?;
            path.pop_if_empty();
            path.extend(self.root.segments());
            path.extend(self.segments.iter());
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

/// What came back over the wire, before any decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn json(status: StatusCode, body: &serde_json::Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        Self {
            status,
            headers,
            body: body.to_string().into_bytes(),
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, Vec::new())
    }
}

/// Executes request descriptors.
///
/// Implementations must not interpret status codes; that is the endpoint's
/// job. Transport failures are reported as [`Error::Transport`].
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error>;

    /// Blocking counterpart of [`Transport::execute`]. Must not be called
    /// from inside an async runtime.
    fn execute_blocking(&self, request: ApiRequest) -> Result<RawResponse, Error>;
}

/// Transport backed by reqwest's async and blocking clients.
pub struct ReqwestTransport {
    base_url: Url,
    credentials: Option<Credentials>,
    timeout: Duration,
    accept_invalid_certs: bool,
    client: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
}

impl ReqwestTransport {
    pub fn new(
        base_url: Url,
        credentials: Option<Credentials>,
        timeout: Duration,
        accept_invalid_certs: bool,
    ) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self {
            base_url,
            credentials,
            timeout,
            accept_invalid_certs,
            client,
            blocking: OnceLock::new(),
        })
    }

    /// The blocking client owns its own runtime, so it is only built once a
    /// blocking call is actually made.
    fn blocking_client(&self) -> Result<&reqwest::blocking::Client, Error> {
        if let Some(client) = self.blocking.get() {
            return Ok(client);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;
        Ok(self.blocking.get_or_init(|| client))
    }
}

fn async_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form, Error> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime_type,
                payload,
            } => {
                let mut file = reqwest::multipart::Part::bytes(payload).file_name(file_name);
                if let Some(mime) = mime_type {
                    file = file.mime_str(&mime)?;
                }
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

fn blocking_form(parts: Vec<FormPart>) -> Result<reqwest::blocking::multipart::Form, Error> {
    let mut form = reqwest::blocking::multipart::Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime_type,
                payload,
            } => {
                let mut file =
                    reqwest::blocking::multipart::Part::bytes(payload).file_name(file_name);
                if let Some(mime) = mime_type {
                    file = file.mime_str(&mime)?;
                }
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        let url = request.url(&self.base_url)?;
        debug!(method = %request.method, url = %url, "Dispatching request");

        let mut builder = self.client.request(request.method, url);
        if let Some(creds) = &self.credentials {
            builder = builder.basic_auth(&creds.username, Some(&creds.password));
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Binary {
                content_type,
                payload,
            } => builder.header(CONTENT_TYPE, content_type).body(payload),
            RequestBody::Multipart(parts) => builder.multipart(async_form(parts)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        debug!(status = %status, bytes = body.len(), "Received response");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    fn execute_blocking(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        let url = request.url(&self.base_url)?;
        debug!(method = %request.method, url = %url, "Dispatching blocking request");

        let mut builder = self.blocking_client()?.request(request.method, url);
        if let Some(creds) = &self.credentials {
            builder = builder.basic_auth(&creds.username, Some(&creds.password));
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Binary {
                content_type,
                payload,
            } => builder.header(CONTENT_TYPE, content_type).body(payload),
            RequestBody::Multipart(parts) => builder.multipart(blocking_form(parts)?),
        };

        let response = builder.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();
        debug!(status = %status, bytes = body.len(), "Received response");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_prefix_and_encodes_segments() {
        let base = Url::parse("http://localhost:8080/").unwrap();
        let request = ApiRequest::new(Method::GET, ApiRoot::Core, ["nodes", "-my-", "children"])
            .query("maxItems", &Maybe::Value(10i64))
            .query("skipCount", &Maybe::<i64>::Unset)
            .query("orderBy", &Maybe::<Vec<String>>::Null)
            .query(
                "include",
                &Maybe::Value(vec!["path".to_string(), "aspectNames".to_string()]),
            );

        let url = request.url(&base).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/alfresco/api/-default-/public/alfresco/versions/1/nodes/-my-/children?maxItems=10&include=path%2CaspectNames"
        );
    }

    #[test]
    fn url_without_query_has_no_question_mark() {
        let base = Url::parse("https://acs.example.com").unwrap();
        let request = ApiRequest::new(Method::GET, ApiRoot::Discovery, Vec::<String>::new());
        assert_eq!(
            request.url(&base).unwrap().as_str(),
            "https://acs.example.com/alfresco/api/discovery"
        );
    }

    #[test]
    fn url_escapes_reserved_characters_in_ids() {
        let base = Url::parse("http://localhost:8080").unwrap();
        let request = ApiRequest::new(Method::GET, ApiRoot::Core, ["nodes", "a/b c"]);
        assert!(request
            .url(&base)
            .unwrap()
            .as_str()
            .ends_with("/nodes/a%2Fb%20c"));
    }
}
