//! Wire models for the Alfresco REST API.
//!
//! Field names follow the JSON schema (camelCase on the wire). Every model
//! keeps keys it does not declare in `additional_properties`, so decoding
//! and re-encoding a payload never drops data.

mod association;
mod bodies;
mod common;
mod discovery;
mod error;
mod node;
mod paging;
mod search;

pub use association::{
    Association, AssociationEntry, AssociationInfo, ChildAssociation, ChildAssociationEntry,
    ChildAssociationInfo,
};
pub use bodies::{
    AssociationBody, ChildAssociationBody, LockLifetime, LockType, MultipartFile,
    NodeBodyCopy, NodeBodyCreate, NodeBodyCreateAssociation, NodeBodyCreateMultipart,
    NodeBodyLock, NodeBodyMove, NodeBodyUpdate, PermissionsBody, PermissionElementBody,
};
pub use common::{
    AccessStatus, ContentInfo, PathElement, PathInfo, PermissionElement, PermissionsInfo,
    UserInfo,
};
pub use discovery::{
    DiscoveryEntry, ModuleInfo, RepositoryEntry, RepositoryInfo, StatusInfo, VersionInfo,
};
pub use error::{ErrorDetail, ErrorResponse};
pub use node::{Node, NodeAssociation, NodeChildAssociation, NodeEntry};
pub use paging::{
    NodeAssociationEntry, NodeAssociationPaging, NodeAssociationPagingList,
    NodeChildAssociationEntry, NodeChildAssociationPaging, NodeChildAssociationPagingList,
    Pagination,
};
pub use search::{
    QueryLanguage, RequestPagination, RequestQuery, RequestSortDefinition, ResultNode,
    ResultSetPaging, ResultSetPagingList, ResultSetRowEntry, SearchEntry, SearchRequest,
    SortType,
};

/// Unknown JSON keys retained by each model.
pub type AdditionalProperties = serde_json::Map<String, serde_json::Value>;
