//! Runs against a real repository. Needs `ALFRESCO_URL`,
//! `ALFRESCO_USERNAME` and `ALFRESCO_PASSWORD` (a `.env` file works):
//!
//! ```sh
//! cargo test --test live_repository -- --ignored
//! ```

use alfresco_client::nodes::models::{
    ContentUpload, CopyNodeRequest, CreateNodeRequest, LockNodeRequest, LockType,
    MoveNodeRequest, UpdateContentRequest, UpdateNodeRequest,
};
use alfresco_client::{get_repository_info, nodes, AlfrescoClient};
use serde_json::{json, Map};
use uuid::Uuid;

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires a running Alfresco repository"]
async fn node_lifecycle() {
    let client = AlfrescoClient::from_env().expect("ALFRESCO_URL must be set");

    let info = get_repository_info(&client).await.unwrap();
    assert!(!info.entry.repository.id.is_empty());

    let folder = nodes::create_folder(&client, "-my-", &unique("it-folder")).await.unwrap();
    let target = nodes::create_folder(&client, "-my-", &unique("it-target")).await.unwrap();
    assert_ne!(folder.entry.id, target.entry.id);

    let doc_name = format!("{}.txt", unique("it-doc"));
    let document = nodes::create_node_with_content(
        &client,
        &folder.entry.id,
        &CreateNodeRequest::content(doc_name.as_str()),
        &ContentUpload::new(doc_name.as_str(), b"first version".to_vec())
            .with_mime_type("text/plain"),
    )
    .await
    .unwrap();
    assert!(!document.entry.id.is_empty());
    assert_eq!(document.entry.is_file, Some(true));

    let mut properties = Map::new();
    properties.insert("cm:title".into(), json!("Integration test"));
    let updated = nodes::update_node(
        &client,
        &document.entry.id,
        &UpdateNodeRequest {
            properties: Some(properties),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.entry.property("cm:title"), Some(&json!("Integration test")));

    nodes::update_node_content(
        &client,
        &document.entry.id,
        b"second version",
        Some("text/plain"),
        &UpdateContentRequest::default(),
    )
    .await
    .unwrap();

    let children = nodes::list_children(&client, &folder.entry.id, &Default::default())
        .await
        .unwrap();
    assert!(children.nodes().any(|n| n.id == document.entry.id));

    let copy = nodes::copy_node(
        &client,
        &document.entry.id,
        &CopyNodeRequest {
            target_parent_id: target.entry.id.clone(),
            name: Some(format!("copy-{doc_name}")),
        },
    )
    .await
    .unwrap();
    assert_ne!(copy.entry.id, document.entry.id);

    let moved = nodes::move_node(
        &client,
        &copy.entry.id,
        &MoveNodeRequest {
            target_parent_id: folder.entry.id.clone(),
            name: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(moved.entry.parent_id.as_deref(), Some(folder.entry.id.as_str()));

    nodes::lock_node(
        &client,
        &document.entry.id,
        &LockNodeRequest {
            time_to_expire: Some(60),
            lock_type: Some(LockType::AllowOwnerChanges),
            lifetime: None,
        },
    )
    .await
    .unwrap();
    let locked = nodes::get_node(&client, &document.entry.id).await.unwrap();
    assert_eq!(locked.entry.is_locked, Some(true));
    nodes::unlock_node(&client, &document.entry.id).await.unwrap();

    for id in [&folder.entry.id, &target.entry.id] {
        nodes::delete_node(&client, id, true).await.unwrap();
    }
    assert!(nodes::get_node(&client, &folder.entry.id).await.is_err());
}
