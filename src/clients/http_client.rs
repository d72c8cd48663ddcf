//! HTTP client for Recurly API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Recurly API with opt-in retry handling.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::clients::errors::{HttpError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::RecurlyConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Recurly API.
///
/// The client handles:
/// - Default headers: HTTP Basic `Authorization` from the API key,
///   `Accept: application/xml`, `User-Agent`, and `X-Api-Version`
/// - Opt-in retry logic for 429 and 500 responses
/// - Parsing of Recurly pagination headers into [`HttpResponse`]
///
/// Non-2xx statuses are returned as responses, not errors: status
/// classification (error documents on 404, credential failures on 401,
/// accepted-status sets) belongs to the model layer, which needs the
/// response body to do it.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use recurly_api::{RecurlyConfig, ApiKey};
/// use recurly_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = RecurlyConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.recurly.com/v2/accounts")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &RecurlyConfig) -> Self {
        // Basic auth: the API key is the username, the password is empty.
        let credentials = BASE64.encode(format!("{}:", config.api_key().as_ref()));

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}recurly-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/xml".to_string());
        default_headers.insert("Authorization".to_string(), format!("Basic {credentials}"));
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "X-Api-Version".to_string(),
            config.api_version().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Recurly API.
    ///
    /// This method handles:
    /// - Request validation
    /// - Header merging
    /// - Response header parsing
    /// - Retry logic for 429 and 500 responses (when `tries > 1`)
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Max retries exceeded (`MaxRetries`)
    ///
    /// Any HTTP status, including 4xx/5xx, is a successful `Ok` result.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
                HttpMethod::Put => self.client.put(&request.url),
                HttpMethod::Delete => self.client.delete(&request.url),
                HttpMethod::Head => self.client.head(&request.url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.clone());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let response = HttpResponse::new(code, res_headers, body_text);

            tracing::debug!(
                method = %request.http_method,
                url = %request.url,
                status = code,
                "request completed"
            );

            let should_retry = (code == 429 || code == 500) && request.tries > 1;
            if !should_retry {
                return Ok(response);
            }

            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: response.body,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // For 429: use Retry-After if present, otherwise fixed delay
        // For 500: always use fixed delay
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_config() -> RecurlyConfig {
        RecurlyConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_basic_auth_header_encoding() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        // base64("test-api-key:")
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Basic dGVzdC1hcGkta2V5Og==".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_xml() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/xml".to_string())
        );
    }

    #[test]
    fn test_api_version_header() {
        let config = RecurlyConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .api_version("2.29")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("X-Api-Version"),
            Some(&"2.29".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("recurly-api-rust v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = RecurlyConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .user_agent_prefix("billing-worker/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("billing-worker/1.0 | "));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
