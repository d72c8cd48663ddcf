//! Shared handle binding the transport, the decoder, and the API root.
//!
//! Every resource and pager carries a cheap clone of [`ApiClient`]; the
//! underlying [`HttpClient`] and decoder are reference-counted and shared.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::model::errors::ResourceError;
use crate::xml::Decode;

/// Handle to the transport and decoder collaborators.
///
/// Cloning is cheap; clones share the same connection pool and decoder.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    decoder: Arc<dyn Decode>,
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(http: Arc<HttpClient>, decoder: Arc<dyn Decode>, base_url: String) -> Self {
        Self {
            http,
            decoder,
            base_url,
        }
    }

    /// Returns the API root URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn decoder(&self) -> &dyn Decode {
        self.decoder.as_ref()
    }

    /// Sends a request, mapping transport failures into [`ResourceError`].
    ///
    /// Every HTTP status comes back as a response; classification happens
    /// in the caller.
    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ResourceError> {
        self.http
            .request(request)
            .await
            .map_err(ResourceError::Transport)
    }
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};
