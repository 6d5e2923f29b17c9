use std::sync::Arc;

use alfresco_raw::api::nodes::{
    copy_node, create_node, delete_node, delete_secondary_child_association, get_node,
    list_node_children, update_node_content,
};
use alfresco_raw::api::{discovery, search};
use alfresco_raw::models::{
    MultipartFile, NodeBodyCopy, NodeBodyCreate, NodeBodyCreateMultipart, QueryLanguage,
    RequestQuery, SearchRequest,
};
use alfresco_raw::transport::FormPart;
use alfresco_raw::{
    ApiRequest, ApiRoot, Client, Error, Maybe, MockTransport, RawResponse, RequestBody,
};
use reqwest::{Method, StatusCode};
use serde_json::json;

fn node_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "entry": {
            "id": id,
            "name": name,
            "nodeType": "cm:content",
            "isFolder": false,
            "isFile": true,
            "createdAt": "2024-03-01T10:15:30.000+0000",
            "modifiedAt": "2024-03-01T10:15:30.000+0000",
            "createdByUser": {"id": "admin", "displayName": "Administrator"},
            "modifiedByUser": {"id": "admin", "displayName": "Administrator"},
            "parentId": "parent-1"
        }
    })
}

fn error_json(status: u16, summary: &str) -> serde_json::Value {
    json!({"error": {"statusCode": status, "briefSummary": summary}})
}

fn client_with(mock: MockTransport) -> Client {
    Client::with_transport(Arc::new(mock))
}

#[tokio::test]
async fn get_node_decodes_success_body() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| {
            req.method == Method::GET
                && req.root == ApiRoot::Core
                && req.segments == vec!["nodes".to_string(), "abc".to_string()]
                && req.query_value("include") == Some("path,properties")
                && req.query_value("relativePath").is_none()
        })
        .times(1)
        .returning(|_| Ok(RawResponse::json(StatusCode::OK, &node_json("abc", "doc.txt"))));
    let client = client_with(mock);

    let params = get_node::Params {
        include: Maybe::Value(vec!["path".into(), "properties".into()]),
        ..Default::default()
    };
    let entry = get_node::send(&client, "abc", &params)
        .await
        .expect("transport ok")
        .expect("parsed");
    assert_eq!(entry.entry.id, "abc");
    assert_eq!(entry.entry.name, "doc.txt");
}

#[tokio::test]
async fn documented_error_status_yields_none_with_content() {
    let mut mock = MockTransport::new();
    mock.expect_execute().returning(|_| {
        Ok(RawResponse::json(
            StatusCode::NOT_FOUND,
            &error_json(404, "The entity with id: missing was not found"),
        ))
    });
    let client = client_with(mock);

    let response = get_node::send_detailed(&client, "missing", &Default::default())
        .await
        .unwrap();
    assert_eq!(response.status_code, StatusCode::NOT_FOUND);
    assert!(response.parsed.is_none());
    assert_eq!(
        response.error_summary().as_deref(),
        Some("The entity with id: missing was not found")
    );
}

#[tokio::test]
async fn undocumented_status_is_none_unless_raising() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .times(2)
        .returning(|_| Ok(RawResponse::new(StatusCode::IM_A_TEAPOT, "teapot")));
    let client = client_with(mock);

    let lenient = get_node::send(&client, "abc", &Default::default()).await.unwrap();
    assert!(lenient.is_none());

    let strict = client.clone().raise_on_unexpected_status(true);
    let err = get_node::send(&strict, "abc", &Default::default())
        .await
        .unwrap_err();
    match err {
        Error::UnexpectedStatus { status, body } => {
            assert_eq!(status, StatusCode::IM_A_TEAPOT);
            assert_eq!(body, "teapot");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn success_body_rejected_by_model_keeps_content() {
    let mut mock = MockTransport::new();
    mock.expect_execute().returning(|_| {
        Ok(RawResponse::json(
            StatusCode::OK,
            &json!({"entry": {"id": "abc", "name": "doc.txt"}}),
        ))
    });
    let client = client_with(mock);

    let response = get_node::send_detailed(&client, "abc", &Default::default())
        .await
        .unwrap();
    assert_eq!(response.status_code, StatusCode::OK);
    assert!(response.parsed.is_none());
    let loose: serde_json::Value = response.content_as().unwrap();
    assert_eq!(loose["entry"]["name"], "doc.txt");
}

#[tokio::test]
async fn create_node_json_body_and_201() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| {
            req.method == Method::POST
                && req.segments.last().map(String::as_str) == Some("children")
                && req.query_value("autoRename") == Some("true")
                && req.body
                    == RequestBody::Json(json!({"name": "Reports", "nodeType": "cm:folder"}))
        })
        .returning(|_| Ok(RawResponse::json(StatusCode::CREATED, &node_json("f1", "Reports"))));
    let client = client_with(mock);

    let body = create_node::Body::Json(NodeBodyCreate {
        name: "Reports".into(),
        node_type: "cm:folder".into(),
        ..Default::default()
    });
    let params = create_node::Params {
        auto_rename: Maybe::Value(true),
        ..Default::default()
    };
    let created = create_node::send(&client, "-my-", &body, &params).await.unwrap();
    assert_eq!(created.map(|e| e.entry.id), Some("f1".to_string()));
}

#[tokio::test]
async fn create_node_multipart_sends_file_part_first() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| match &req.body {
            RequestBody::Multipart(parts) => {
                matches!(parts.first(), Some(FormPart::File { name, file_name, .. })
                    if name == "filedata" && file_name == "hello.txt")
                    && parts.contains(&FormPart::Text {
                        name: "name".into(),
                        value: "hello.txt".into(),
                    })
            }
            _ => false,
        })
        .returning(|_| Ok(RawResponse::json(StatusCode::CREATED, &node_json("d1", "hello.txt"))));
    let client = client_with(mock);

    let mut form = NodeBodyCreateMultipart::new(MultipartFile {
        file_name: "hello.txt".into(),
        mime_type: Some("text/plain".into()),
        payload: b"hello".to_vec(),
    });
    form.name = Maybe::Value("hello.txt".into());
    let created = create_node::send(
        &client,
        "-my-",
        &create_node::Body::Multipart(form),
        &Default::default(),
    )
    .await
    .unwrap();
    assert!(created.is_some());
}

#[tokio::test]
async fn create_node_conflict_is_documented() {
    let mut mock = MockTransport::new();
    mock.expect_execute().returning(|_| {
        Ok(RawResponse::json(
            StatusCode::CONFLICT,
            &error_json(409, "Duplicate child name not allowed: Reports"),
        ))
    });
    let client = client_with(mock).raise_on_unexpected_status(true);

    let body = create_node::Body::Json(NodeBodyCreate {
        name: "Reports".into(),
        node_type: "cm:folder".into(),
        ..Default::default()
    });
    let response = create_node::send_detailed(&client, "-my-", &body, &Default::default())
        .await
        .expect("409 is documented and never raises");
    assert_eq!(response.status_code, StatusCode::CONFLICT);
    assert!(response.parsed.is_none());
}

#[tokio::test]
async fn delete_node_204_parses_unit_and_sends_permanent() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| {
            req.method == Method::DELETE && req.query_value("permanent") == Some("true")
        })
        .returning(|_| Ok(RawResponse::empty(StatusCode::NO_CONTENT)));
    let client = client_with(mock);

    let params = delete_node::Params {
        permanent: Maybe::Value(true),
    };
    assert_eq!(delete_node::send(&client, "abc", &params).await.unwrap(), Some(()));
}

#[tokio::test]
async fn list_children_decodes_associations() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| {
            req.query_value("maxItems") == Some("2")
                && req.query_value("where") == Some("(isFolder=true)")
        })
        .returning(|_| {
            Ok(RawResponse::json(
                StatusCode::OK,
                &json!({
                    "list": {
                        "pagination": {"count": 1, "hasMoreItems": false, "totalItems": 1, "skipCount": 0, "maxItems": 2},
                        "entries": [{
                            "entry": {
                                "id": "c1", "name": "Sub", "nodeType": "cm:folder",
                                "isFolder": true, "isFile": false,
                                "association": {"assocType": "cm:contains", "isPrimary": true}
                            }
                        }]
                    }
                }),
            ))
        });
    let client = client_with(mock);

    let params = list_node_children::Params {
        max_items: Maybe::Value(2),
        where_: Maybe::Value("(isFolder=true)".into()),
        ..Default::default()
    };
    let paging = list_node_children::send(&client, "-root-", &params)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(paging.list.pagination.count, 1);
    let child = &paging.list.entries[0].entry;
    assert_eq!(child.node.name, "Sub");
    assert_eq!(
        child.association.as_option().and_then(|a| a.is_primary.as_option().copied()),
        Some(true)
    );
}

#[tokio::test]
async fn copy_node_expects_201() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| req.body == RequestBody::Json(json!({"targetParentId": "p2"})))
        .returning(|_| Ok(RawResponse::json(StatusCode::CREATED, &node_json("copy-1", "doc.txt"))));
    let client = client_with(mock);

    let body = NodeBodyCopy {
        target_parent_id: "p2".into(),
        ..Default::default()
    };
    let copied = copy_node::send(&client, "abc", &body, &Default::default()).await.unwrap();
    assert_eq!(copied.map(|e| e.entry.id), Some("copy-1".to_string()));
}

#[tokio::test]
async fn update_content_sends_binary_body() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| {
            req.method == Method::PUT
                && req.body
                    == RequestBody::Binary {
                        content_type: "text/plain".into(),
                        payload: b"v2".to_vec(),
                    }
                && req.query_value("majorVersion") == Some("true")
        })
        .returning(|_| Ok(RawResponse::json(StatusCode::OK, &node_json("abc", "doc.txt"))));
    let client = client_with(mock);

    let params = update_node_content::Params {
        major_version: Maybe::Value(true),
        ..Default::default()
    };
    let updated = update_node_content::send(&client, "abc", b"v2", Some("text/plain"), &params)
        .await
        .unwrap();
    assert!(updated.is_some());
}

#[tokio::test]
async fn delete_secondary_child_targets_child_segment() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| {
            req.segments
                == vec![
                    "nodes".to_string(),
                    "parent".to_string(),
                    "secondary-children".to_string(),
                    "child".to_string(),
                ]
                && req.query_value("assocType") == Some("cm:contains")
        })
        .returning(|_| Ok(RawResponse::empty(StatusCode::NO_CONTENT)));
    let client = client_with(mock);

    let params = delete_secondary_child_association::Params {
        assoc_type: Maybe::Value("cm:contains".into()),
    };
    let done = delete_secondary_child_association::send(&client, "parent", "child", &params)
        .await
        .unwrap();
    assert_eq!(done, Some(()));
}

#[tokio::test]
async fn discovery_reads_repository_version() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| req.root == ApiRoot::Discovery && req.segments.is_empty())
        .returning(|_| {
            Ok(RawResponse::json(
                StatusCode::OK,
                &json!({
                    "entry": {
                        "repository": {
                            "id": "repo-1",
                            "edition": "Community",
                            "version": {
                                "major": "23", "minor": "2", "patch": "0", "hotfix": "0",
                                "schema": 19000, "label": "r", "display": "23.2.0 (r) schema 19000"
                            },
                            "status": {
                                "isReadOnly": false, "isAuditEnabled": true,
                                "isQuickShareEnabled": true, "isThumbnailGenerationEnabled": true
                            }
                        }
                    }
                }),
            ))
        });
    let client = client_with(mock);

    let info = discovery::send(&client).await.unwrap().unwrap();
    assert_eq!(info.entry.repository.edition, "Community");
    assert_eq!(info.entry.repository.version.major, "23");
}

#[tokio::test]
async fn search_posts_query_to_search_api() {
    let mut mock = MockTransport::new();
    mock.expect_execute()
        .withf(|req: &ApiRequest| {
            req.root == ApiRoot::Search
                && req.method == Method::POST
                && req.body
                    == RequestBody::Json(json!({
                        "query": {"query": "name:report*", "language": "afts"}
                    }))
        })
        .returning(|_| {
            Ok(RawResponse::json(
                StatusCode::OK,
                &json!({
                    "list": {
                        "pagination": {"count": 1, "hasMoreItems": false, "skipCount": 0, "maxItems": 100},
                        "entries": [{
                            "entry": {
                                "id": "n1", "name": "report.pdf", "nodeType": "cm:content",
                                "isFolder": false, "isFile": true,
                                "search": {"score": 1.5}
                            }
                        }]
                    }
                }),
            ))
        });
    let client = client_with(mock);

    let request = SearchRequest {
        query: RequestQuery {
            query: "name:report*".into(),
            language: Maybe::Value(QueryLanguage::Afts),
            ..Default::default()
        },
        ..Default::default()
    };
    let results = search::send(&client, &request).await.unwrap().unwrap();
    let row = &results.list.entries[0].entry;
    assert_eq!(row.node.name, "report.pdf");
    assert_eq!(row.search.as_option().and_then(|s| s.score.as_option().copied()), Some(1.5));
}

#[test]
fn blocking_variant_uses_blocking_transport() {
    let mut mock = MockTransport::new();
    mock.expect_execute().never();
    mock.expect_execute_blocking()
        .times(1)
        .returning(|_| Ok(RawResponse::json(StatusCode::OK, &node_json("abc", "doc.txt"))));
    let client = client_with(mock);

    let response = get_node::blocking_detailed(&client, "abc", &Default::default()).unwrap();
    assert!(response.is_success());
    assert_eq!(response.parsed.map(|e| e.entry.name), Some("doc.txt".to_string()));
}
