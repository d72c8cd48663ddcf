//! Configuration types for the Recurly API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Recurly.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RecurlyConfig`]: The main configuration struct holding all SDK settings
//! - [`RecurlyConfigBuilder`]: A builder for constructing [`RecurlyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiHost`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use recurly_api::{RecurlyConfig, ApiKey};
//!
//! let config = RecurlyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host(), "https://api.recurly.com/v2");
//! ```

mod newtypes;

pub use newtypes::{ApiHost, ApiKey};

use crate::error::ConfigError;

/// Default API host for the Recurly v2 API.
pub const DEFAULT_API_HOST: &str = "https://api.recurly.com/v2";

/// Default value sent in the `X-Api-Version` header.
pub const DEFAULT_API_VERSION: &str = "2.22";

/// Configuration for the Recurly API SDK.
///
/// This struct holds all configuration needed for SDK operations: the
/// private API key used for HTTP Basic authentication, the API host, the
/// `X-Api-Version` header value, and an optional User-Agent prefix.
///
/// # Thread Safety
///
/// `RecurlyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use recurly_api::{RecurlyConfig, ApiKey, ApiHost};
///
/// let config = RecurlyConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .api_host(ApiHost::new("https://api.recurly.com/v2").unwrap())
///     .user_agent_prefix("my-billing-worker/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct RecurlyConfig {
    api_key: ApiKey,
    api_host: Option<ApiHost>,
    api_version: String,
    user_agent_prefix: Option<String>,
}

impl RecurlyConfig {
    /// Creates a new builder for constructing a `RecurlyConfig`.
    #[must_use]
    pub fn builder() -> RecurlyConfigBuilder {
        RecurlyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API host the SDK targets.
    ///
    /// Falls back to [`DEFAULT_API_HOST`] when no override is configured.
    #[must_use]
    pub fn api_host(&self) -> &str {
        self.api_host
            .as_ref()
            .map_or(DEFAULT_API_HOST, ApiHost::as_ref)
    }

    /// Returns the value sent in the `X-Api-Version` header.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the configured User-Agent prefix, if any.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`RecurlyConfig`].
///
/// # Example
///
/// ```rust
/// use recurly_api::{RecurlyConfig, ApiKey};
///
/// let config = RecurlyConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_version("2.22")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct RecurlyConfigBuilder {
    api_key: Option<ApiKey>,
    api_host: Option<ApiHost>,
    api_version: Option<String>,
    user_agent_prefix: Option<String>,
}

impl RecurlyConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Overrides the API host.
    ///
    /// Mainly useful for tests and proxies; the default is
    /// [`DEFAULT_API_HOST`].
    #[must_use]
    pub fn api_host(mut self, api_host: ApiHost) -> Self {
        self.api_host = Some(api_host);
        self
    }

    /// Sets the `X-Api-Version` header value.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets a prefix prepended to the SDK's User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` was not
    /// set, or [`ConfigError::InvalidApiVersion`] for an empty version.
    pub fn build(self) -> Result<RecurlyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_version = self
            .api_version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        if api_version.trim().is_empty() {
            return Err(ConfigError::InvalidApiVersion {
                version: api_version,
            });
        }

        Ok(RecurlyConfig {
            api_key,
            api_host: self.api_host,
            api_version,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

// Verify RecurlyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RecurlyConfig>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = RecurlyConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = RecurlyConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_host(), DEFAULT_API_HOST);
        assert_eq!(config.api_version(), DEFAULT_API_VERSION);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = RecurlyConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_host(ApiHost::new("http://127.0.0.1:9999").unwrap())
            .api_version("2.29")
            .user_agent_prefix("billing-worker/2.0")
            .build()
            .unwrap();

        assert_eq!(config.api_host(), "http://127.0.0.1:9999");
        assert_eq!(config.api_version(), "2.29");
        assert_eq!(config.user_agent_prefix(), Some("billing-worker/2.0"));
    }

    #[test]
    fn test_builder_rejects_blank_api_version() {
        let result = RecurlyConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_version("  ")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidApiVersion { .. })));
    }
}
