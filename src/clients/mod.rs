//! Transport layer for Recurly API communication.
//!
//! This module provides the HTTP layer used by the resource model: an
//! authenticated async client, request/response types, and the parsing of
//! the Recurly headers that drive pagination.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response with raw body and parsed pagination headers
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE, HEAD)
//! - [`DataType`]: Content types for request bodies
//! - [`LinkHeader`]: Continuation cursors parsed from the `Link` header
//!
//! Unlike a general-purpose client, 4xx/5xx statuses are not transport
//! errors here: the model layer classifies statuses itself because the
//! meaning of a 404 (error document) or 401 (bad credentials) is a model
//! concern.
//!
//! # Retry Behavior
//!
//! Retries are opt-in. With `tries > 1` the client retries 429 responses
//! using the `Retry-After` header value (or 1 second) and 500 responses
//! with a fixed 1-second delay. The default `tries` is 1, meaning no
//! automatic retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError, MaxHttpRetriesExceededError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, LinkHeader};
