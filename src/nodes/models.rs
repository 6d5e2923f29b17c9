//! Request and response models of the high-level node API.
//!
//! Requests are strict: unknown keys are rejected when a request is read
//! from JSON or YAML, and `validate()` enforces Alfresco's naming rules
//! before anything is sent. Responses are permissive: only `id` and `name`
//! are expected (and default to empty), everything else is optional and
//! unknown keys are kept in `extra`.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub use alfresco_raw::models::{LockLifetime, LockType, QueryLanguage, SortType};

pub const MAX_NAME_LENGTH: usize = 255;

static FORBIDDEN_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[*"<>\\/?:|]"#).expect("static pattern compiles"));

/// A request field that breaks a server-side rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Checks a node name: non-empty, at most 255 characters, none of
/// `* " < > \ / ? : |`.
pub fn validate_name(field: &str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new(
            field,
            format!("must be at most {MAX_NAME_LENGTH} characters"),
        ));
    }
    if let Some(found) = FORBIDDEN_NAME_CHARS.find(name) {
        return Err(ValidationError::new(
            field,
            format!("contains forbidden character '{}'", found.as_str()),
        ));
    }
    Ok(())
}

fn validate_id(field: &str, id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

fn validate_qname(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateNodeRequest {
    pub name: String,
    #[serde(default = "default_node_type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    /// Sent as a query parameter, never in the body.
    #[serde(default, skip_serializing)]
    pub auto_rename: Option<bool>,
}

fn default_node_type() -> String {
    "cm:content".to_string()
}

impl CreateNodeRequest {
    pub fn content(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: default_node_type(),
            properties: None,
            aspect_names: None,
            relative_path: None,
            auto_rename: None,
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            node_type: "cm:folder".to_string(),
            ..Self::content(name)
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

impl Validate for CreateNodeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)?;
        validate_qname("node_type", &self.node_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateNodeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_names: Option<Vec<String>>,
}

impl Validate for UpdateNodeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name("name", name)?;
        }
        if let Some(node_type) = &self.node_type {
            validate_qname("node_type", node_type)?;
        }
        Ok(())
    }
}

/// Query options of a content upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_version: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Renames the node along with the upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for UpdateContentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => validate_name("name", name),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CopyNodeRequest {
    pub target_parent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for CopyNodeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => validate_name("name", name),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoveNodeRequest {
    pub target_parent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for MoveNodeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => validate_name("name", name),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LockNodeRequest {
    /// Seconds until the server releases the lock; 0 or absent never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_expire: Option<u32>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub lock_type: Option<LockType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<LockLifetime>,
}

impl Validate for LockNodeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAssociationRequest {
    pub target_id: String,
    pub assoc_type: String,
}

impl Validate for CreateAssociationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_id("target_id", &self.target_id)?;
        validate_qname("assoc_type", &self.assoc_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSecondaryChildRequest {
    pub child_id: String,
    pub assoc_type: String,
}

impl Validate for CreateSecondaryChildRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_id("child_id", &self.child_id)?;
        validate_qname("assoc_type", &self.assoc_type)
    }
}

/// Paging and filtering shared by the listing operations. Operations that
/// do not support a given option ignore it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Vec<String>>,
    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_source: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl ListOptions {
    pub fn page(skip_count: i64, max_items: i64) -> Self {
        Self {
            skip_count: Some(skip_count),
            max_items: Some(max_items),
            ..Default::default()
        }
    }
}

impl Validate for ListOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        if matches!(self.skip_count, Some(n) if n < 0) {
            return Err(ValidationError::new("skip_count", "must not be negative"));
        }
        if matches!(self.max_items, Some(n) if n < 1) {
            return Err(ValidationError::new("max_items", "must be at least 1"));
        }
        Ok(())
    }
}

/// File bytes for a multipart create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ContentUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<QueryLanguage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchPaging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchSort {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<SortType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascending: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchNodesRequest {
    pub query: SearchQuery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<SearchPaging>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SearchSort>>,
}

impl SearchNodesRequest {
    pub fn afts(query: impl Into<String>) -> Self {
        Self {
            query: SearchQuery {
                query: query.into(),
                language: Some(QueryLanguage::Afts),
            },
            ..Default::default()
        }
    }
}

impl Validate for SearchNodesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.query.query.trim().is_empty() {
            return Err(ValidationError::new("query", "must not be empty"));
        }
        if let Some(paging) = &self.paging {
            if matches!(paging.skip_count, Some(n) if n < 0) {
                return Err(ValidationError::new("paging.skip_count", "must not be negative"));
            }
            if matches!(paging.max_items, Some(n) if n < 1) {
                return Err(ValidationError::new("paging.max_items", "must be at least 1"));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

mod timestamp_opt {
    use alfresco_raw::types::timestamp;
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&timestamp::format(v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| timestamp::parse(&raw).map_err(de::Error::custom))
            .transpose()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `association` block carried by listing entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assoc_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_names: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ancestry of a node, returned with `include=path`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInfo {
    #[serde(default)]
    pub elements: Vec<PathElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `ALLOWED` or `DENIED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Returned with `include=permissions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_inheritance_enabled: Option<bool>,
    #[serde(default)]
    pub inherited: Vec<PermissionElement>,
    #[serde(default)]
    pub locally_set: Vec<PermissionElement>,
    #[serde(default)]
    pub settable: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A node as the server reported it, with whatever fields were present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_folder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_file: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp_opt")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp_opt")]
    pub modified_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by_user: Option<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable_operations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association: Option<AssociationSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeResponse {
    #[serde(default)]
    pub entry: Node,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub has_more_items: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i64>,
    #[serde(default)]
    pub skip_count: i64,
    #[serde(default)]
    pub max_items: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeListEntry {
    #[serde(default)]
    pub entry: Node,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeList {
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub entries: Vec<NodeListEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Node>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeListResponse {
    #[serde(default)]
    pub list: NodeList,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeListResponse {
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.list.entries.iter().map(|e| &e.entry)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    #[serde(default)]
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assoc_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociationResponse {
    #[serde(default)]
    pub entry: Association,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAssociation {
    #[serde(default)]
    pub child_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assoc_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildAssociationResponse {
    #[serde(default)]
    pub entry: ChildAssociation,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotfix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_audit_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_quick_share_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_thumbnail_generation_enabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<RepositoryVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RepositoryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    #[serde(default)]
    pub repository: Repository,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryInfoResponse {
    #[serde(default)]
    pub entry: RepositoryEntry,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub node: Node,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRow {
    #[serde(default)]
    pub entry: SearchHit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchList {
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub entries: Vec<SearchRow>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub list: SearchList,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_longer_than_255_is_rejected() {
        let request = CreateNodeRequest::content("x".repeat(256));
        let err = request.validate().unwrap_err();
        assert_eq!(err.field, "name");

        let request = CreateNodeRequest::content("x".repeat(255));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn name_with_forbidden_character_is_rejected() {
        for bad in ["a/b", "a\\b", "a:b", "a*b", "a?b", "a|b", "a\"b", "a<b", "a>b"] {
            let err = CreateNodeRequest::content(bad).validate().unwrap_err();
            assert_eq!(err.field, "name", "{bad}");
            assert!(err.message.contains("forbidden"), "{bad}: {err}");
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(CreateNodeRequest::folder("  ").validate().is_err());
    }

    #[test]
    fn create_request_defaults_to_content_type_and_rejects_unknown_keys() {
        let request: CreateNodeRequest = serde_json::from_value(json!({"name": "a.txt"})).unwrap();
        assert_eq!(request.node_type, "cm:content");

        let err =
            serde_json::from_value::<CreateNodeRequest>(json!({"name": "a.txt", "colour": "red"}))
                .unwrap_err();
        assert!(err.to_string().contains("colour"), "{err}");
    }

    #[test]
    fn copy_request_requires_target_parent() {
        let err =
            serde_json::from_value::<CopyNodeRequest>(json!({"name": "copy.txt"})).unwrap_err();
        assert!(err.to_string().contains("targetParentId"), "{err}");
        let err = serde_json::from_value::<CopyNodeRequest>(json!({"targetParentId": null}))
            .unwrap_err();
        assert!(err.to_string().contains("null"), "{err}");
    }

    #[test]
    fn auto_rename_never_reaches_the_body() {
        let request = CreateNodeRequest {
            auto_rename: Some(true),
            ..CreateNodeRequest::folder("Reports")
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Reports", "nodeType": "cm:folder"})
        );
    }

    #[test]
    fn list_options_bounds() {
        assert!(ListOptions::page(0, 10).validate().is_ok());
        assert_eq!(ListOptions::page(-1, 10).validate().unwrap_err().field, "skip_count");
        assert_eq!(ListOptions::page(0, 0).validate().unwrap_err().field, "max_items");
    }

    #[test]
    fn node_tolerates_partial_payload() {
        let node: Node = serde_json::from_value(json!({"id": "n1", "mystery": 1})).unwrap();
        assert_eq!(node.id, "n1");
        assert_eq!(node.name, "");
        assert!(node.created_by_user.is_none());
        assert_eq!(node.extra.get("mystery"), Some(&json!(1)));
    }

    #[test]
    fn node_parses_alfresco_timestamps() {
        let node: Node = serde_json::from_value(json!({
            "id": "n1",
            "name": "a",
            "createdAt": "2024-03-01T10:15:30.000+0000"
        }))
        .unwrap();
        let created = node.created_at.unwrap();
        assert_eq!(created.timestamp(), 1_709_288_130);
        assert_eq!(
            serde_json::to_value(&node).unwrap()["createdAt"],
            json!("2024-03-01T10:15:30.000+0000")
        );
    }

    #[test]
    fn empty_listing_has_zero_count() {
        let listing: NodeListResponse = serde_json::from_value(json!({
            "list": {
                "pagination": {"count": 0, "hasMoreItems": false, "totalItems": 0, "skipCount": 0, "maxItems": 100},
                "entries": []
            }
        }))
        .unwrap();
        assert_eq!(listing.list.pagination.count, 0);
        assert!(listing.list.entries.is_empty());
    }
}
