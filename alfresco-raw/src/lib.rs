#![doc = "alfresco-raw: wire-level bindings for the Alfresco Content Services REST API."]

//! This crate mirrors the Alfresco OpenAPI documents one-to-one: every
//! schema is a serde model in [`models`], every endpoint is a module under
//! [`api`] exposing four request functions.
//!
//! # Layers
//! - [`types`]: the [`Maybe`] unset sentinel, the detailed [`Response`] and
//!   the Alfresco timestamp codec.
//! - [`transport`]: the [`ApiRequest`] descriptor and the [`Transport`]
//!   trait with its reqwest implementation. Tests inject `MockTransport`.
//! - [`client`]: the [`Client`] handle shared by all endpoint functions.
//! - [`api`]: `send` / `send_detailed` (async) and `blocking` /
//!   `blocking_detailed` per endpoint.
//!
//! Documented error statuses never raise: the parsed body is `None` and the
//! detailed variants expose the status code. Only transport failures and,
//! when enabled, undocumented statuses surface as [`Error`].

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;
pub mod types;

pub use client::{Client, ClientBuilder, Credentials};
pub use error::Error;
pub use transport::{ApiRequest, ApiRoot, RawResponse, RequestBody, Transport};
pub use types::{Maybe, Response, WireModel};

#[cfg(any(test, feature = "test-export-mocks"))]
pub use transport::MockTransport;
