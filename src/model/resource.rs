//! The generic resource model.
//!
//! A [`Resource`] represents one remote Recurly object as a property bag
//! with href-based identity. Response payloads are merged in through
//! [`Resource::inflate`], which applies the wire conventions: typed-scalar
//! coercion, link-stub detection, and the legacy anchor list. Lifecycle
//! operations (`fetch`, `destroy`) and the raw verb wrappers all funnel
//! through one executor that owns status classification.
//!
//! # Example
//!
//! ```rust,ignore
//! use recurly_api::{Recurly, RecurlyConfig};
//!
//! let recurly = Recurly::new(&config);
//! let mut account = recurly.accounts().create();
//! account.set_id("abc-123");
//! account.fetch().await?;
//!
//! println!("state: {:?}", account.property_str("state"));
//! println!("billing info at: {:?}", account.linked_href("billing_info"));
//! ```

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::clients::{DataType, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::model::client::ApiClient;
use crate::model::errors::{classify, ApiError, ResourceError};
use crate::model::schema::ResourceSchema;

/// Reserved payload key carrying the legacy anchor list.
///
/// Anchors arrive as one `<a name=".." href=".."/>` element or a list of
/// them; each is indexed by its own `name` attribute.
const ANCHOR_KEY: &str = "a";

/// Per-request options for the verb wrappers.
///
/// `raw` skips body decoding and hands back the unparsed body; extra
/// headers are merged over the client defaults; `tries` enables the
/// transport's opt-in retry for 429/500.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    /// Return the body unparsed instead of decoding it.
    pub raw: bool,
    /// Additional headers for this request only.
    pub extra_headers: Option<BTreeMap<String, String>>,
    /// Number of attempts for this request (default 1, no retries).
    pub tries: u32,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            raw: false,
            extra_headers: None,
            tries: 1,
        }
    }
}

impl RequestOptions {
    /// Creates default options: decoded body, no extra headers, one try.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests raw body passthrough.
    #[must_use]
    pub const fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Adds an extra header for this request.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the number of attempts for this request.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }
}

/// Result of a verb wrapper: the transport response plus the decoded body.
///
/// `value` is `None` for raw passthrough and bodyless (204) responses; the
/// unparsed body remains available on `response`.
#[derive(Debug)]
pub struct ApiResponse {
    /// The underlying transport response (status, headers, raw body).
    pub response: HttpResponse,
    /// The decoded body, unless raw passthrough was requested.
    pub value: Option<Value>,
}

/// A generic client-side representation of one remote Recurly object.
///
/// Declared schema properties and any field discovered during inflation
/// live in one property bag; link stubs and anchors are kept in their own
/// maps. Identity is href-based: setting the id field recomputes the href
/// from the type's collection endpoint.
#[derive(Debug)]
pub struct Resource {
    client: ApiClient,
    schema: &'static ResourceSchema,
    endpoint: String,
    properties: Map<String, Value>,
    href: Option<String>,
    linked: HashMap<String, String>,
    anchors: HashMap<String, Value>,
    deleted: bool,
}

impl Resource {
    pub(crate) fn new(client: ApiClient, schema: &'static ResourceSchema) -> Self {
        let endpoint = format!("{}{}", client.base_url(), schema.collection_path);
        Self {
            client,
            schema,
            endpoint,
            properties: Map::new(),
            href: None,
            linked: HashMap::new(),
            anchors: HashMap::new(),
            deleted: false,
        }
    }

    /// Returns this resource's schema.
    #[must_use]
    pub const fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    /// Returns the collection endpoint this resource addresses itself under.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the resource's canonical network address, if known.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Overrides the resource's network address.
    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = Some(href.into());
    }

    /// Returns `true` after a successful delete.
    #[must_use]
    pub const fn deleted(&self) -> bool {
        self.deleted
    }

    /// Returns the identity value, rendered as a string.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.properties
            .get(self.schema.id_field)
            .and_then(render_scalar)
    }

    /// Sets the identity value and recomputes the href from it.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.set(self.schema.id_field, Value::String(id));
    }

    /// Returns a property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns a property as a string slice.
    #[must_use]
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Returns a property as a signed integer.
    #[must_use]
    pub fn property_i64(&self, key: &str) -> Option<i64> {
        self.properties.get(key).and_then(Value::as_i64)
    }

    /// Returns a property as a float.
    #[must_use]
    pub fn property_f64(&self, key: &str) -> Option<f64> {
        self.properties.get(key).and_then(Value::as_f64)
    }

    /// Returns a property as a boolean.
    #[must_use]
    pub fn property_bool(&self, key: &str) -> Option<bool> {
        self.properties.get(key).and_then(Value::as_bool)
    }

    /// Sets a property value.
    ///
    /// Setting the identity field also recomputes the href from the
    /// collection endpoint and the new value.
    pub fn set(&mut self, key: &str, value: Value) {
        if self.schema.is_id_field(key) {
            if let Some(id) = render_scalar(&value) {
                self.href = Some(format!("{}/{id}", self.endpoint));
            }
        }
        self.properties.insert(key.to_string(), value);
    }

    /// Returns the full property bag.
    #[must_use]
    pub const fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns the map of relation name to linked resource href.
    #[must_use]
    pub const fn linked(&self) -> &HashMap<String, String> {
        &self.linked
    }

    /// Returns the href a relation links to, if inflation saw a stub for it.
    #[must_use]
    pub fn linked_href(&self, relation: &str) -> Option<&str> {
        self.linked.get(relation).map(String::as_str)
    }

    /// Returns the anchor map, keyed by each anchor's own name.
    #[must_use]
    pub const fn anchors(&self) -> &HashMap<String, Value> {
        &self.anchors
    }

    /// Merges a decoded response payload into this resource.
    ///
    /// The merge is additive: keys absent from `payload` are left
    /// untouched. For each entry:
    ///
    /// - the reserved anchor key stores anchors indexed by their `name`;
    /// - a top-level `href` names the resource itself and becomes its
    ///   network address;
    /// - an object with exactly one key, `href`, is a link stub: the href
    ///   lands in the linked map and a derived `recurly_<relation>_id`
    ///   property is cut from the href's last path segment — no direct
    ///   property is created for the relation itself;
    /// - everything else is assigned through [`Resource::sanitize`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NonObjectPayload`] for anything that is not
    /// a key-value structure; the resource is left unmodified.
    pub fn inflate(&mut self, payload: &Value) -> Result<(), ResourceError> {
        let Some(map) = payload.as_object() else {
            tracing::error!(
                resource = self.schema.name,
                "cannot inflate from a non-object payload"
            );
            return Err(ResourceError::NonObjectPayload {
                resource: self.schema.name,
            });
        };

        for (key, value) in map {
            if key == ANCHOR_KEY {
                self.inflate_anchors(value);
                continue;
            }

            // a top-level href names this resource itself (the root
            // element's href attribute), not a property
            if key == "href" {
                if let Some(href) = value.as_str() {
                    self.href = Some(href.to_string());
                }
                continue;
            }

            if let Some(href) = link_stub(value) {
                let related_id = last_path_segment(href);
                self.linked.insert(key.clone(), href.to_string());
                self.properties.insert(
                    format!("recurly_{key}_id"),
                    Value::String(related_id.to_string()),
                );
                continue;
            }

            self.set(key, Self::sanitize(value));
        }

        Ok(())
    }

    fn inflate_anchors(&mut self, value: &Value) {
        match value {
            Value::Array(entries) => {
                for entry in entries {
                    self.store_anchor(entry);
                }
            }
            other => self.store_anchor(other),
        }
    }

    fn store_anchor(&mut self, entry: &Value) {
        match entry.get("name").and_then(Value::as_str) {
            Some(name) => {
                self.anchors.insert(name.to_string(), entry.clone());
            }
            None => tracing::debug!(
                resource = self.schema.name,
                "skipping anchor without a name attribute"
            ),
        }
    }

    /// Applies the value-coercion rules used during inflation.
    ///
    /// - `null`, `""` and `false` become `Null`; `0` is preserved.
    /// - A typed-text object (`{"#": text, "type": "float" | "integer"}`)
    ///   is parsed into a number; a parse failure leaves the value
    ///   unmodified, as does any other declared type.
    /// - Everything else passes through unchanged.
    #[must_use]
    pub fn sanitize(value: &Value) -> Value {
        match value {
            Value::Null | Value::Bool(false) => Value::Null,
            Value::String(s) if s.is_empty() => Value::Null,
            Value::Object(map) => {
                let text = map.get("#").and_then(Value::as_str);
                let kind = map.get("type").and_then(Value::as_str);
                match (text, kind) {
                    (Some(text), Some("float")) => text
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .and_then(serde_json::Number::from_f64)
                        .map_or_else(|| value.clone(), Value::Number),
                    (Some(text), Some("integer")) => text
                        .trim()
                        .parse::<i64>()
                        .map_or_else(|_| value.clone(), Value::from),
                    _ => value.clone(),
                }
            }
            other => other.clone(),
        }
    }

    /// Fetches the resource from its href and re-inflates it.
    ///
    /// # Errors
    ///
    /// Fails with [`ResourceError::MissingHref`] before any I/O if no href
    /// is set. A 404 maps to [`ResourceError::NotFound`]; other unexpected
    /// statuses go through the shared classification rule.
    pub async fn fetch(&mut self) -> Result<(), ResourceError> {
        let Some(href) = self.href.clone() else {
            return Err(ResourceError::MissingHref {
                resource: self.schema.name,
            });
        };

        let request = HttpRequest::builder(HttpMethod::Get, href)
            .build()
            .map_err(HttpError::from)?;
        let response = self.client.send(request).await?;

        if response.code == 404 {
            return Err(ResourceError::NotFound {
                resource: self.schema.name,
            });
        }
        classify(&response, &[200], self.client.decoder())?;

        let value = self.client.decoder().decode(&response.body)?;
        self.inflate(&value)
    }

    /// Deletes the resource at its href.
    ///
    /// # Errors
    ///
    /// Fails with [`ResourceError::MissingHref`] before any I/O if no href
    /// is set; otherwise classifies the response accepting only 204.
    pub async fn destroy(&mut self) -> Result<bool, ResourceError> {
        let Some(href) = self.href.clone() else {
            return Err(ResourceError::MissingHref {
                resource: self.schema.name,
            });
        };
        self.destroy_at(&href).await
    }

    /// Deletes the resource at an explicit href.
    ///
    /// On success the resource is marked deleted. The response body, if
    /// any, is decoded best-effort: a decode failure is tolerated and the
    /// raw body stays available on the transport response.
    ///
    /// # Errors
    ///
    /// Any status other than 204 is classified into the matching
    /// [`ResourceError`].
    pub async fn destroy_at(&mut self, href: &str) -> Result<bool, ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Delete, href)
            .build()
            .map_err(HttpError::from)?;
        let response = self.client.send(request).await?;

        classify(&response, &[204], self.client.decoder())?;

        if !response.body.is_empty() && self.client.decoder().decode(&response.body).is_err() {
            tracing::debug!(
                resource = self.schema.name,
                "undecodable body on delete response; passing it through raw"
            );
        }

        self.deleted = true;
        Ok(true)
    }

    /// Issues a GET against `uri`.
    ///
    /// # Errors
    ///
    /// See the executor contract on [`ApiResponse`] and
    /// [`ResourceError`].
    pub async fn get(
        &self,
        uri: &str,
        query: Option<BTreeMap<String, String>>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ResourceError> {
        let request = self.build_request(HttpMethod::Get, uri, query, None, options)?;
        self.execute(request, options).await
    }

    /// Issues a HEAD against `uri`.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn head(
        &self,
        uri: &str,
        query: Option<BTreeMap<String, String>>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ResourceError> {
        let request = self.build_request(HttpMethod::Head, uri, query, None, options)?;
        self.execute(request, options).await
    }

    /// Issues a PUT with an XML body against `uri`.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn put(
        &self,
        uri: &str,
        body: impl Into<String>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ResourceError> {
        let request = self.build_request(HttpMethod::Put, uri, None, Some(body.into()), options)?;
        self.execute(request, options).await
    }

    /// Issues a POST with an XML body against `uri`.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn post(
        &self,
        uri: &str,
        body: impl Into<String>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ResourceError> {
        let request = self.build_request(HttpMethod::Post, uri, None, Some(body.into()), options)?;
        self.execute(request, options).await
    }

    fn build_request(
        &self,
        method: HttpMethod,
        uri: &str,
        query: Option<BTreeMap<String, String>>,
        body: Option<String>,
        options: &RequestOptions,
    ) -> Result<HttpRequest, ResourceError> {
        let mut builder = HttpRequest::builder(method, uri).tries(options.tries);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Xml);
        }
        if let Some(headers) = &options.extra_headers {
            builder = builder.extra_headers(headers.clone());
        }
        builder.build().map_err(|e| HttpError::from(e).into())
    }

    /// Shared executor behind the verb wrappers.
    ///
    /// 404 decodes the body into an [`ApiError`] and always surfaces it as
    /// an error (callers wanting the soft not-found convention use
    /// [`Resource::fetch`]); 401 is a fixed credentials error; raw mode and
    /// bodyless responses return the body unparsed; anything else is
    /// decoded, with decode failures surfaced distinctly.
    async fn execute(
        &self,
        request: HttpRequest,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ResourceError> {
        let response = self.client.send(request).await?;

        match response.code {
            401 => Err(ResourceError::Auth),
            404 => {
                let value = self.client.decoder().decode(&response.body)?;
                Err(ResourceError::Api(ApiError::from_value(&value, 404)))
            }
            _ => {
                if options.raw || response.code == 204 || response.body.is_empty() {
                    return Ok(ApiResponse {
                        response,
                        value: None,
                    });
                }
                let value = self.client.decoder().decode(&response.body)?;
                Ok(ApiResponse {
                    response,
                    value: Some(value),
                })
            }
        }
    }
}

/// Detects a link stub: an object containing exactly one key, `href`.
fn link_stub(value: &Value) -> Option<&str> {
    let map = value.as_object()?;
    if map.len() == 1 {
        map.get("href")?.as_str()
    } else {
        None
    }
}

/// Returns the last `/`-delimited segment of an href.
fn last_path_segment(href: &str) -> &str {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}

/// Renders a scalar value the way it appears in a path segment.
fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::{ApiKey, RecurlyConfig};
    use crate::model::schema;
    use crate::xml::XmlDecoder;
    use serde_json::json;
    use std::sync::Arc;

    fn test_client() -> ApiClient {
        let config = RecurlyConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap();
        ApiClient::new(
            Arc::new(HttpClient::new(&config)),
            Arc::new(XmlDecoder::new()),
            "https://api.recurly.com/v2".to_string(),
        )
    }

    fn account() -> Resource {
        Resource::new(test_client(), &schema::ACCOUNT)
    }

    #[test]
    fn test_set_id_recomputes_href() {
        let mut resource = account();
        assert!(resource.href().is_none());

        resource.set_id("abc-123");
        assert_eq!(resource.id().as_deref(), Some("abc-123"));
        assert_eq!(
            resource.href(),
            Some("https://api.recurly.com/v2/accounts/abc-123")
        );
    }

    #[test]
    fn test_setting_id_field_property_recomputes_href() {
        let mut resource = account();
        resource.set("account_code", Value::String("xyz".to_string()));

        assert_eq!(
            resource.href(),
            Some("https://api.recurly.com/v2/accounts/xyz")
        );
    }

    #[test]
    fn test_numeric_id_field_renders_into_href() {
        let mut invoice = Resource::new(test_client(), &schema::INVOICE);
        invoice.set("invoice_number", json!(1402));

        assert_eq!(invoice.id().as_deref(), Some("1402"));
        assert_eq!(
            invoice.href(),
            Some("https://api.recurly.com/v2/invoices/1402")
        );
    }

    #[test]
    fn test_inflate_merges_disjoint_payloads_additively() {
        let mut resource = account();
        resource
            .inflate(&json!({ "email": "a@example.com" }))
            .unwrap();
        resource.inflate(&json!({ "first_name": "Ada" })).unwrap();

        assert_eq!(resource.property_str("email"), Some("a@example.com"));
        assert_eq!(resource.property_str("first_name"), Some("Ada"));
    }

    #[test]
    fn test_inflate_overwrites_on_repeated_key() {
        let mut resource = account();
        resource.inflate(&json!({ "state": "active" })).unwrap();
        resource.inflate(&json!({ "state": "closed" })).unwrap();

        assert_eq!(resource.property_str("state"), Some("closed"));
    }

    #[test]
    fn test_inflate_detects_link_stub() {
        let mut resource = account();
        resource
            .inflate(&json!({
                "account": { "href": "https://api.example.com/v2/accounts/42" }
            }))
            .unwrap();

        assert_eq!(
            resource.linked_href("account"),
            Some("https://api.example.com/v2/accounts/42")
        );
        assert_eq!(resource.property_str("recurly_account_id"), Some("42"));
        assert!(resource.property("account").is_none());
    }

    #[test]
    fn test_two_key_object_with_href_is_not_a_link_stub() {
        let mut resource = account();
        resource
            .inflate(&json!({
                "address": { "href": "https://x.test/a/1", "city": "Austin" }
            }))
            .unwrap();

        assert!(resource.linked_href("address").is_none());
        assert!(resource.property("address").is_some());
    }

    #[test]
    fn test_inflate_indexes_anchors_by_their_own_name() {
        let mut resource = account();
        resource
            .inflate(&json!({
                "a": [
                    { "name": "close", "href": "https://x.test/accounts/1/close" },
                    { "name": "reopen", "href": "https://x.test/accounts/1/reopen" }
                ]
            }))
            .unwrap();

        assert_eq!(resource.anchors().len(), 2);
        assert_eq!(
            resource.anchors()["close"]["href"].as_str(),
            Some("https://x.test/accounts/1/close")
        );
        assert_eq!(
            resource.anchors()["reopen"]["href"].as_str(),
            Some("https://x.test/accounts/1/reopen")
        );
    }

    #[test]
    fn test_inflate_single_anchor_object() {
        let mut resource = account();
        resource
            .inflate(&json!({
                "a": { "name": "close", "href": "https://x.test/accounts/1/close" }
            }))
            .unwrap();

        assert!(resource.anchors().contains_key("close"));
    }

    #[test]
    fn test_inflate_skips_nameless_anchor() {
        let mut resource = account();
        resource
            .inflate(&json!({ "a": { "href": "https://x.test/somewhere" } }))
            .unwrap();

        // an href-only object under "a" has no name to index by
        assert!(resource.anchors().is_empty());
    }

    #[test]
    fn test_inflate_rejects_non_object_payload_without_mutating() {
        let mut resource = account();
        resource.inflate(&json!({ "email": "a@example.com" })).unwrap();

        let result = resource.inflate(&json!(["not", "an", "object"]));
        assert!(matches!(
            result,
            Err(ResourceError::NonObjectPayload { resource: "account" })
        ));
        assert_eq!(resource.property_str("email"), Some("a@example.com"));
        assert_eq!(resource.properties().len(), 1);
    }

    #[test]
    fn test_inflate_top_level_href_sets_the_resource_address() {
        let mut resource = account();
        resource
            .inflate(&json!({
                "href": "https://api.recurly.com/v2/accounts/abc-123",
                "state": "active"
            }))
            .unwrap();

        assert_eq!(
            resource.href(),
            Some("https://api.recurly.com/v2/accounts/abc-123")
        );
        assert!(resource.property("href").is_none());
    }

    #[test]
    fn test_inflating_id_field_recomputes_href() {
        let mut resource = account();
        resource.inflate(&json!({ "account_code": "merged" })).unwrap();

        assert_eq!(
            resource.href(),
            Some("https://api.recurly.com/v2/accounts/merged")
        );
    }

    #[test]
    fn test_sanitize_typed_float() {
        let value = json!({ "#": "3.50", "type": "float" });
        assert_eq!(Resource::sanitize(&value), json!(3.5));
    }

    #[test]
    fn test_sanitize_typed_integer() {
        let value = json!({ "#": "7", "type": "integer" });
        assert_eq!(Resource::sanitize(&value), json!(7));
    }

    #[test]
    fn test_sanitize_null_and_falsy() {
        assert_eq!(Resource::sanitize(&Value::Null), Value::Null);
        assert_eq!(Resource::sanitize(&json!(false)), Value::Null);
        assert_eq!(Resource::sanitize(&json!("")), Value::Null);
    }

    #[test]
    fn test_sanitize_preserves_zero() {
        assert_eq!(Resource::sanitize(&json!(0)), json!(0));
    }

    #[test]
    fn test_sanitize_passes_other_declared_types_through() {
        let value = json!({ "#": "2015-06-23T00:00:00Z", "type": "datetime" });
        assert_eq!(Resource::sanitize(&value), value);
    }

    #[test]
    fn test_sanitize_unparsable_number_left_unmodified() {
        let value = json!({ "#": "three fifty", "type": "float" });
        assert_eq!(Resource::sanitize(&value), value);
    }

    #[test]
    fn test_sanitize_passes_plain_values_through() {
        assert_eq!(Resource::sanitize(&json!("active")), json!("active"));
        assert_eq!(Resource::sanitize(&json!(true)), json!(true));
        assert_eq!(Resource::sanitize(&json!(42)), json!(42));
    }

    #[tokio::test]
    async fn test_fetch_without_href_fails_before_any_io() {
        let mut resource = account();
        let result = resource.fetch().await;

        assert!(matches!(
            result,
            Err(ResourceError::MissingHref { resource: "account" })
        ));
    }

    #[tokio::test]
    async fn test_destroy_without_href_fails_before_any_io() {
        let mut resource = account();
        let result = resource.destroy().await;

        assert!(matches!(
            result,
            Err(ResourceError::MissingHref { resource: "account" })
        ));
        assert!(!resource.deleted());
    }

    #[test]
    fn test_last_path_segment() {
        assert_eq!(last_path_segment("https://x.test/v2/accounts/42"), "42");
        assert_eq!(last_path_segment("https://x.test/v2/accounts/42/"), "42");
    }
}
