//! Error types for the resource model layer.
//!
//! This module owns status classification: the transport hands back every
//! HTTP response, and the model decides what counts as success. 404s carry
//! a decodable Recurly error document and become [`ApiError`]; 401 is a
//! fixed credentials error; anything else outside the accepted status set
//! becomes [`ResourceError::UnexpectedStatus`].
//!
//! # Example
//!
//! ```rust,ignore
//! use recurly_api::model::ResourceError;
//!
//! match account.fetch().await {
//!     Ok(()) => println!("state: {:?}", account.property("state")),
//!     Err(ResourceError::NotFound { resource }) => {
//!         println!("no such {resource}");
//!     }
//!     Err(ResourceError::Api(e)) => println!("Recurly said: {}", e),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};
use crate::xml::{Decode, DecodeError};

/// A typed error built from a Recurly error document.
///
/// Recurly returns well-formed XML error payloads, typically on 404:
///
/// ```xml
/// <error>
///   <symbol>not_found</symbol>
///   <description>Couldn't find Account with account_code = abc</description>
/// </error>
/// ```
#[derive(Debug, Clone, Error)]
#[error("Recurly API error (HTTP {status}): {}", self.message())]
pub struct ApiError {
    /// Machine-readable error symbol (e.g. `not_found`).
    pub symbol: Option<String>,
    /// Human-readable error description.
    pub description: Option<String>,
    /// The HTTP status code the error document arrived with.
    pub status: u16,
}

impl ApiError {
    /// Builds an `ApiError` from a decoded error document.
    ///
    /// The description may arrive as a bare string or as a typed-text object
    /// with the text under `"#"` (the wire convention for elements that
    /// carry attributes alongside text, e.g. `lang="en-US"`).
    #[must_use]
    pub fn from_value(value: &Value, status: u16) -> Self {
        let symbol = value
            .get("symbol")
            .and_then(text_of)
            .map(ToString::to_string);
        let description = value
            .get("description")
            .and_then(text_of)
            .map(ToString::to_string);

        Self {
            symbol,
            description,
            status,
        }
    }

    /// Returns the most specific message available for display.
    #[must_use]
    pub fn message(&self) -> &str {
        self.description
            .as_deref()
            .or(self.symbol.as_deref())
            .unwrap_or("unknown error")
    }
}

/// Extracts the text of a decoded element that may be a bare string or a
/// `{"#": text, ...attrs}` object.
fn text_of(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Object(map) => map.get("#").and_then(Value::as_str),
        _ => None,
    }
}

/// Error type for resource model operations.
///
/// Every failure a resource or pager operation can produce, from transport
/// faults up through local usage errors. All variants are returned through
/// `Result`; the only operations that fail before any I/O are the local
/// precondition checks (`MissingHref`, `NotEnumerable`, `NonObjectPayload`).
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Network-level failure (DNS, connection, transport timeout) or a
    /// request that never left the process. Never retried at this layer.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response body could not be decoded as XML.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The server returned a well-formed error document.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// HTTP 401, regardless of body content.
    #[error("Missing or invalid API credentials (HTTP 401)")]
    Auth,

    /// The response status was outside the accepted set and the body did
    /// not decode to an error document.
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// The status code that was returned.
        status: u16,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// The resource does not exist (HTTP 404 during `fetch`).
    #[error("{resource} not found")]
    NotFound {
        /// The schema name of the resource.
        resource: &'static str,
    },

    /// A lifecycle operation was attempted on a resource with no href.
    #[error("{resource} has no href; set its id or inflate it from a response first")]
    MissingHref {
        /// The schema name of the resource.
        resource: &'static str,
    },

    /// `all()` or a pager was requested for a type that has no listing
    /// endpoint.
    #[error("{resource} is not an enumerable resource type")]
    NotEnumerable {
        /// The schema name of the resource.
        resource: &'static str,
    },

    /// `inflate` was handed something other than a key-value structure.
    #[error("Cannot inflate {resource} from a non-object payload")]
    NonObjectPayload {
        /// The schema name of the resource.
        resource: &'static str,
    },

    /// A count probe response did not carry the `X-Records` header.
    #[error("Collection response did not include an X-Records count header")]
    MissingRecordCount,

    /// The pager's count probe failed earlier; the pager is unusable.
    #[error("Pager is unusable after an earlier failure: {message}")]
    Poisoned {
        /// Rendered message of the original failure.
        message: String,
    },
}

/// Shared status classification rule.
///
/// Returns `Ok(())` when the response status is in `accepted`. A 401 is
/// always a credentials error. Any other unexpected status prefers an
/// [`ApiError`] parsed from the body; a body that does not decode to an
/// error document falls back to [`ResourceError::UnexpectedStatus`].
pub(crate) fn classify(
    response: &HttpResponse,
    accepted: &[u16],
    decoder: &dyn Decode,
) -> Result<(), ResourceError> {
    if accepted.contains(&response.code) {
        return Ok(());
    }

    if response.code == 401 {
        return Err(ResourceError::Auth);
    }

    if let Ok(value) = decoder.decode(&response.body) {
        if value.is_object() {
            return Err(ResourceError::Api(ApiError::from_value(
                &value,
                response.code,
            )));
        }
    }

    Err(ResourceError::UnexpectedStatus {
        status: response.code,
        body: response.body.clone(),
    })
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlDecoder;
    use std::collections::HashMap;
    use serde_json::json;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_api_error_from_error_document() {
        let value = json!({
            "symbol": "not_found",
            "description": "Couldn't find Account with account_code = abc"
        });

        let error = ApiError::from_value(&value, 404);
        assert_eq!(error.symbol.as_deref(), Some("not_found"));
        assert_eq!(error.status, 404);
        assert!(error.to_string().contains("Couldn't find Account"));
    }

    #[test]
    fn test_api_error_description_with_attributes() {
        // <description lang="en-US">text</description> decodes to an object
        let value = json!({
            "symbol": "not_found",
            "description": { "#": "No such plan", "lang": "en-US" }
        });

        let error = ApiError::from_value(&value, 404);
        assert_eq!(error.description.as_deref(), Some("No such plan"));
    }

    #[test]
    fn test_api_error_without_fields_has_fallback_message() {
        let error = ApiError::from_value(&json!({}), 404);
        assert!(error.to_string().contains("unknown error"));
    }

    #[test]
    fn test_classify_accepts_listed_statuses() {
        let decoder = XmlDecoder::new();
        assert!(classify(&response(204, ""), &[204], &decoder).is_ok());
        assert!(classify(&response(200, "<r/>"), &[200, 201], &decoder).is_ok());
    }

    #[test]
    fn test_classify_maps_401_to_auth() {
        let decoder = XmlDecoder::new();
        let result = classify(&response(401, "ignored body"), &[200], &decoder);
        assert!(matches!(result, Err(ResourceError::Auth)));
    }

    #[test]
    fn test_classify_prefers_decoded_error_document() {
        let decoder = XmlDecoder::new();
        let body = "<error><symbol>simultaneous_request</symbol>\
                    <description>A transaction is already in progress</description></error>";
        let result = classify(&response(400, body), &[200], &decoder);

        match result {
            Err(ResourceError::Api(e)) => {
                assert_eq!(e.symbol.as_deref(), Some("simultaneous_request"));
                assert_eq!(e.status, 400);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_falls_back_to_unexpected_status() {
        let decoder = XmlDecoder::new();
        let result = classify(&response(503, "<<< not xml"), &[200], &decoder);

        match result {
            Err(ResourceError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 503);
                assert!(body.contains("not xml"));
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_all_variants_implement_std_error() {
        let errors: Vec<ResourceError> = vec![
            ResourceError::Auth,
            ResourceError::NotFound { resource: "account" },
            ResourceError::MissingHref { resource: "account" },
            ResourceError::NotEnumerable { resource: "billing_info" },
            ResourceError::NonObjectPayload { resource: "plan" },
            ResourceError::MissingRecordCount,
            ResourceError::Poisoned {
                message: "probe failed".to_string(),
            },
        ];

        for error in &errors {
            let as_std: &dyn std::error::Error = error;
            assert!(!as_std.to_string().is_empty());
        }
    }
}
