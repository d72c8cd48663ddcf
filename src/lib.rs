//! # Recurly API Rust SDK
//!
//! A Rust client for the Recurly v2 billing API, built around a generic
//! resource model: every remote type (accounts, plans, subscriptions, ...)
//! is a property-bag [`Resource`](model::Resource) with href-based
//! identity, and collections are walked lazily with a paged
//! [`Pager`](model::Pager) that follows the server's continuation cursors.
//!
//! ## Features
//!
//! - **Type-Safe Configuration**: Builder-pattern configuration with
//!   validated newtypes for the API key and host
//! - **Generic Resource Model**: uniform property store with typed
//!   accessors, link-stub detection, and XML typed-scalar coercion
//! - **Lazy Pagination**: single-pass pagers with an upfront count probe
//!   and `Link: rel="next"` continuation
//! - **XML over HTTP**: a `quick-xml` decoder behind a swappable trait,
//!   and a `reqwest` transport with opt-in retry for 429/500
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::collections::BTreeMap;
//! use recurly_api::{ApiKey, Recurly, RecurlyConfig};
//!
//! let config = RecurlyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key")?)
//!     .build()?;
//! let recurly = Recurly::new(&config);
//!
//! // Fetch one account by its code
//! let mut account = recurly.accounts().create();
//! account.set_id("abc-123");
//! account.fetch().await?;
//!
//! // Walk every subscription, one page at a time
//! let mut pager = recurly.subscriptions().pager(BTreeMap::new())?;
//! while let Some(subscription) = pager.next().await? {
//!     println!("{:?}", subscription.property_str("state"));
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Configuration types and builder
//! - [`clients`] - HTTP transport
//! - [`xml`] - XML payload decoding
//! - [`model`] - Resource model, pager, and registry
//! - [`error`] - Configuration error types

pub mod clients;
pub mod config;
pub mod error;
pub mod model;
pub mod xml;

pub use config::{ApiHost, ApiKey, RecurlyConfig, RecurlyConfigBuilder};
pub use error::ConfigError;
pub use model::{
    ApiError, Pager, Recurly, RequestOptions, Resource, ResourceError, ResourceType,
};
pub use xml::{Decode, DecodeError, XmlDecoder};
