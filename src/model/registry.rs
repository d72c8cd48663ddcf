//! Top-level handle and resource type registry.
//!
//! [`Recurly`] is built once from a [`RecurlyConfig`] and hands out
//! [`ResourceType`] handles for the built-in Recurly v2 types. A
//! `ResourceType` materializes empty resources, pagers, and the batch
//! helpers built on top of the pager.
//!
//! # Example
//!
//! ```rust,ignore
//! use recurly_api::{Recurly, RecurlyConfig, ApiKey};
//!
//! let config = RecurlyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key")?)
//!     .build()?;
//! let recurly = Recurly::new(&config);
//!
//! let accounts = recurly.accounts().all(BTreeMap::new()).await?;
//! for (code, account) in &accounts {
//!     println!("{code}: {:?}", account.property_str("state"));
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::RecurlyConfig;
use crate::model::client::ApiClient;
use crate::model::errors::ResourceError;
use crate::model::pager::{BatchError, Pager};
use crate::model::resource::Resource;
use crate::model::schema::{self, ResourceSchema};
use crate::xml::{Decode, XmlDecoder};

/// Top-level handle for the Recurly v2 API.
///
/// Cheap to clone; clones share the transport connection pool and the
/// decoder.
#[derive(Clone, Debug)]
pub struct Recurly {
    client: ApiClient,
}

impl Recurly {
    /// Creates a handle with the default XML decoder.
    #[must_use]
    pub fn new(config: &RecurlyConfig) -> Self {
        Self::with_decoder(config, Arc::new(XmlDecoder::new()))
    }

    /// Creates a handle with an injected decoder.
    #[must_use]
    pub fn with_decoder(config: &RecurlyConfig, decoder: Arc<dyn Decode>) -> Self {
        let http = Arc::new(HttpClient::new(config));
        let base_url = config.api_host().to_string();
        Self {
            client: ApiClient::new(http, decoder, base_url),
        }
    }

    /// Looks up a resource type by its singular name (e.g. `"account"`).
    #[must_use]
    pub fn model(&self, name: &str) -> Option<ResourceType> {
        schema::builtin(name).map(|schema| ResourceType {
            client: self.client.clone(),
            schema,
        })
    }

    fn resource_type(&self, schema: &'static ResourceSchema) -> ResourceType {
        ResourceType {
            client: self.client.clone(),
            schema,
        }
    }

    /// The account resource type.
    #[must_use]
    pub fn accounts(&self) -> ResourceType {
        self.resource_type(&schema::ACCOUNT)
    }

    /// The plan resource type.
    #[must_use]
    pub fn plans(&self) -> ResourceType {
        self.resource_type(&schema::PLAN)
    }

    /// The subscription resource type.
    #[must_use]
    pub fn subscriptions(&self) -> ResourceType {
        self.resource_type(&schema::SUBSCRIPTION)
    }

    /// The invoice resource type.
    #[must_use]
    pub fn invoices(&self) -> ResourceType {
        self.resource_type(&schema::INVOICE)
    }

    /// The transaction resource type.
    #[must_use]
    pub fn transactions(&self) -> ResourceType {
        self.resource_type(&schema::TRANSACTION)
    }

    /// The coupon resource type.
    #[must_use]
    pub fn coupons(&self) -> ResourceType {
        self.resource_type(&schema::COUPON)
    }

    /// The billing info resource type (not enumerable).
    #[must_use]
    pub fn billing_info(&self) -> ResourceType {
        self.resource_type(&schema::BILLING_INFO)
    }
}

/// One resource type bound to a client handle.
#[derive(Clone, Debug)]
pub struct ResourceType {
    client: ApiClient,
    schema: &'static ResourceSchema,
}

impl ResourceType {
    /// Returns the singular type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.schema.name
    }

    /// Returns this type's schema.
    #[must_use]
    pub const fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    /// Returns this type's collection endpoint URI.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.client.base_url(), self.schema.collection_path)
    }

    /// Creates a fresh, empty resource of this type.
    #[must_use]
    pub fn create(&self) -> Resource {
        Resource::new(self.client.clone(), self.schema)
    }

    /// Creates a pager over the type's collection endpoint.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotEnumerable`] if the type has no listing
    /// endpoint.
    pub fn pager(&self, filter: BTreeMap<String, String>) -> Result<Pager, ResourceError> {
        let endpoint = self.endpoint();
        self.pager_at(filter, &endpoint)
    }

    /// Creates a pager over an explicit endpoint, e.g. a sub-collection
    /// like `/accounts/<code>/transactions`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotEnumerable`] if the type has no listing
    /// endpoint.
    pub fn pager_at(
        &self,
        filter: BTreeMap<String, String>,
        endpoint: &str,
    ) -> Result<Pager, ResourceError> {
        if !self.schema.enumerable {
            return Err(ResourceError::NotEnumerable {
                resource: self.schema.name,
            });
        }
        Ok(Pager::new(
            self.client.clone(),
            self.schema,
            endpoint,
            &filter,
        ))
    }

    /// Fetches every matching resource, keyed by id.
    ///
    /// Rows that arrive without an identity value are skipped with a
    /// warning rather than clobbering each other under one key.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotEnumerable`] for types without a listing
    /// endpoint, or the first traversal error.
    pub async fn all(
        &self,
        filter: BTreeMap<String, String>,
    ) -> Result<HashMap<String, Resource>, ResourceError> {
        let mut pager = self.pager(filter)?;
        let mut items = HashMap::new();

        while let Some(resource) = pager.next().await? {
            match resource.id() {
                Some(id) => {
                    items.insert(id, resource);
                }
                None => tracing::warn!(
                    resource = self.schema.name,
                    "skipping listed row without an id"
                ),
            }
        }

        Ok(items)
    }

    /// Fetches every matching resource into an ordered list.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotEnumerable`] for types without a listing
    /// endpoint, or the first traversal error.
    pub async fn fetch_all(
        &self,
        filter: BTreeMap<String, String>,
    ) -> Result<Vec<Resource>, ResourceError> {
        self.pager(filter)?.collect_all().await
    }

    /// Applies an async callback to every matching resource, stopping on
    /// the first error. Returns the number of items processed.
    ///
    /// # Errors
    ///
    /// [`BatchError::Pager`] for traversal failures (including
    /// non-enumerable types) or [`BatchError::Callback`] for the first
    /// callback error.
    pub async fn fetch_in_batches<F, Fut, E>(
        &self,
        filter: BTreeMap<String, String>,
        f: F,
    ) -> Result<u64, BatchError<E>>
    where
        F: FnMut(Resource) -> Fut,
        Fut: std::future::Future<Output = Result<(), E>>,
    {
        let mut pager = self.pager(filter).map_err(BatchError::Pager)?;
        pager.try_for_each(f).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn test_handle() -> Recurly {
        let config = RecurlyConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap();
        Recurly::new(&config)
    }

    #[test]
    fn test_model_lookup_by_name() {
        let recurly = test_handle();

        assert_eq!(recurly.model("account").map(|t| t.name()), Some("account"));
        assert_eq!(recurly.model("coupon").map(|t| t.name()), Some("coupon"));
        assert!(recurly.model("gift_card").is_none());
    }

    #[test]
    fn test_endpoint_uses_configured_host() {
        let recurly = test_handle();
        assert_eq!(
            recurly.accounts().endpoint(),
            "https://api.recurly.com/v2/accounts"
        );
    }

    #[test]
    fn test_create_produces_empty_resource() {
        let recurly = test_handle();
        let account = recurly.accounts().create();

        assert!(account.properties().is_empty());
        assert!(account.href().is_none());
        assert!(!account.deleted());
    }

    #[test]
    fn test_pager_on_non_enumerable_type_is_a_usage_error() {
        let recurly = test_handle();
        let result = recurly.billing_info().pager(BTreeMap::new());

        assert!(matches!(
            result,
            Err(ResourceError::NotEnumerable {
                resource: "billing_info"
            })
        ));
    }

    #[tokio::test]
    async fn test_all_on_non_enumerable_type_is_a_usage_error() {
        let recurly = test_handle();
        let result = recurly.billing_info().all(BTreeMap::new()).await;

        assert!(matches!(
            result,
            Err(ResourceError::NotEnumerable { .. })
        ));
    }
}
