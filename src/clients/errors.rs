//! HTTP-specific error types for the Recurly API SDK.
//!
//! This module contains error types for the transport layer: network
//! failures, retry exhaustion, and request validation failures.
//!
//! Non-2xx HTTP statuses are deliberately *not* errors at this layer. The
//! transport hands every response back to the model layer, which owns
//! status classification (404 error documents, 401 credentials, accepted
//! status sets); see [`crate::model::ResourceError`].

use thiserror::Error;

/// Error returned when maximum retry attempts have been exhausted.
///
/// This error is raised when a request continues to fail with 429 or 500
/// responses after all configured retry attempts have been made.
///
/// # Example
///
/// ```rust
/// use recurly_api::clients::MaxHttpRetriesExceededError;
///
/// let error = MaxHttpRetriesExceededError {
///     code: 429,
///     tries: 3,
///     message: "rate limited".to_string(),
/// };
///
/// println!("{}", error); // "Exceeded maximum retry count of 3. Last message: ..."
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Error message from the last response.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST/PUT requests
/// - Body provided without `body_type`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport-level failures.
///
/// # Example
///
/// ```rust,ignore
/// match client.request(request).await {
///     Ok(response) => { /* classify the status in the model layer */ }
///     Err(HttpError::Network(e)) => { /* DNS, connection, transport timeout */ }
///     Err(HttpError::MaxRetries(e)) => { /* retries exhausted */ }
///     Err(HttpError::InvalidRequest(e)) => { /* request never left the process */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
