//! The generic resource model: property-bag resources, paged iteration,
//! and the type registry.
//!
//! This layer owns everything above the transport: merging decoded XML
//! payloads into [`Resource`] instances (inflation), href-based identity,
//! status classification into [`ResourceError`], lazy paging via
//! [`Pager`], and the [`Recurly`] handle that ties it all to a
//! configuration.

mod client;
mod errors;
mod pager;
mod registry;
mod resource;
pub mod schema;

pub use client::ApiClient;
pub use errors::{ApiError, ResourceError};
pub use pager::{BatchError, Pager, PER_PAGE};
pub use registry::{Recurly, ResourceType};
pub use resource::{ApiResponse, RequestOptions, Resource};
pub use schema::ResourceSchema;
