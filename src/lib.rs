#![doc = "alfresco-client: validated, high-level access to the Alfresco Content Services REST API."]

//! # Overview
//!
//! This crate sits on top of [`alfresco_raw`], which mirrors the REST API
//! one-to-one. Here every operation takes a validated request model, calls
//! the matching raw endpoint and hands back a permissive response model.
//!
//! - [`config`]: [`ClientConfig`] from YAML ([`load_config`]) or the
//!   environment ([`ClientConfig::from_env`]).
//! - [`client`]: the [`AlfrescoClient`] handle.
//! - [`nodes`]: node CRUD, content, copy/move, locks and associations.
//! - [`discovery`] and [`search`]: repository information and node search.
//! - [`conversion`]: mapping between high-level and raw models.
//!
//! Requests are strict (unknown keys rejected, names checked against the
//! repository's rules); responses keep whatever the server sent. A payload
//! the raw model rejects is decoded straight into the response model rather
//! than lost.
//!
//! ```no_run
//! # async fn demo() -> alfresco_client::Result<()> {
//! use alfresco_client::{nodes, AlfrescoClient, ClientConfig};
//!
//! let config = ClientConfig::new("http://localhost:8080").with_credentials("admin", "admin");
//! let client = AlfrescoClient::from_config(&config)?;
//! let folder = nodes::create_folder(&client, "-my-", "Reports").await?;
//! println!("created {}", folder.entry.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod conversion;
pub mod discovery;
pub mod error;
pub mod nodes;
pub mod response;
pub mod search;

pub use client::AlfrescoClient;
pub use config::{load_config, ClientConfig};
pub use discovery::{
    get_repository_info, get_repository_info_blocking, get_repository_info_blocking_detailed,
    get_repository_info_detailed,
};
pub use error::{Error, Result};
pub use nodes::models::ValidationError;
pub use response::Detailed;
pub use search::{
    search_nodes, search_nodes_blocking, search_nodes_blocking_detailed, search_nodes_detailed,
};

pub use alfresco_raw;
