//! `POST /nodes/{nodeId}/children`
//!
//! Accepts either a JSON body (folders, empty files, metadata-only
//! content) or a multipart form carrying the file bytes. The caller picks
//! the encoding through [`Body`]; nothing is inferred from field values.

use reqwest::Method;

use crate::client::{decode, undocumented, Client};
use crate::error::Error;
use crate::models::{NodeBodyCreate, NodeBodyCreateMultipart, NodeEntry};
use crate::transport::{ApiRequest, ApiRoot, FormPart, RawResponse, RequestBody};
use crate::types::{Maybe, Response};

const OPERATION: &str = "create_node";

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(NodeBodyCreate),
    Multipart(NodeBodyCreateMultipart),
}

#[derive(Debug, Clone, Default)]
pub struct Params {
    pub auto_rename: Maybe<bool>,
    pub major_version: Maybe<bool>,
    pub versioning_enabled: Maybe<bool>,
    pub include: Maybe<Vec<String>>,
    pub fields: Maybe<Vec<String>>,
}

fn multipart_parts(body: &NodeBodyCreateMultipart) -> Vec<FormPart> {
    let mut parts = vec![FormPart::File {
        name: "filedata".to_string(),
        file_name: body.file_data.file_name.clone(),
        mime_type: body.file_data.mime_type.clone(),
        payload: body.file_data.payload.clone(),
    }];
    parts.extend(
        body.text_fields()
            .into_iter()
            .map(|(name, value)| FormPart::Text { name, value }),
    );
    parts
}

pub fn build_request(node_id: &str, body: &Body, params: &Params) -> Result<ApiRequest, Error> {
    let request = ApiRequest::new(Method::POST, ApiRoot::Core, ["nodes", node_id, "children"])
        .query("autoRename", &params.auto_rename)
        .query("majorVersion", &params.major_version)
        .query("versioningEnabled", &params.versioning_enabled)
        .query("include", &params.include)
        .query("fields", &params.fields);
    match body {
        Body::Json(json) => request.json(json),
        Body::Multipart(form) => Ok(request.body(RequestBody::Multipart(multipart_parts(form)))),
    }
}

fn parse_response(client: &Client, raw: &RawResponse) -> Result<Option<NodeEntry>, Error> {
    match raw.status.as_u16() {
        201 => Ok(decode(OPERATION, raw)),
        400 | 401 | 403 | 404 | 409 | 413 | 415 | 422 | 507 => Ok(None),
        _ => undocumented(client, OPERATION, raw),
    }
}

pub async fn send_detailed(
    client: &Client,
    node_id: &str,
    body: &Body,
    params: &Params,
) -> Result<Response<NodeEntry>, Error> {
    client
        .send(build_request(node_id, body, params)?, parse_response)
        .await
}

pub async fn send(
    client: &Client,
    node_id: &str,
    body: &Body,
    params: &Params,
) -> Result<Option<NodeEntry>, Error> {
    Ok(send_detailed(client, node_id, body, params).await?.parsed)
}

pub fn blocking_detailed(
    client: &Client,
    node_id: &str,
    body: &Body,
    params: &Params,
) -> Result<Response<NodeEntry>, Error> {
    client.send_blocking(build_request(node_id, body, params)?, parse_response)
}

pub fn blocking(
    client: &Client,
    node_id: &str,
    body: &Body,
    params: &Params,
) -> Result<Option<NodeEntry>, Error> {
    Ok(blocking_detailed(client, node_id, body, params)?.parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MultipartFile;
    use serde_json::json;

    #[test]
    fn json_body_is_sent_as_json() {
        let body = Body::Json(NodeBodyCreate {
            name: "Reports".into(),
            node_type: "cm:folder".into(),
            ..Default::default()
        });
        let params = Params {
            auto_rename: Maybe::Value(true),
            ..Default::default()
        };
        let request = build_request("-my-", &body, &params).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.segments, vec!["nodes", "-my-", "children"]);
        assert_eq!(request.query_value("autoRename"), Some("true"));
        assert_eq!(
            request.body,
            RequestBody::Json(json!({"name": "Reports", "nodeType": "cm:folder"}))
        );
    }

    #[test]
    fn multipart_body_leads_with_file_part() {
        let mut form = NodeBodyCreateMultipart::new(MultipartFile {
            file_name: "hello.txt".into(),
            mime_type: Some("text/plain".into()),
            payload: b"hello".to_vec(),
        });
        form.name = Maybe::Value("hello.txt".into());
        let request = build_request("-my-", &Body::Multipart(form), &Params::default()).unwrap();
        match request.body {
            RequestBody::Multipart(parts) => {
                assert!(matches!(&parts[0], FormPart::File { name, .. } if name == "filedata"));
                assert_eq!(
                    parts[1],
                    FormPart::Text {
                        name: "name".into(),
                        value: "hello.txt".into()
                    }
                );
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }
}
