//! Lazy paged iteration over collection endpoints.
//!
//! A [`Pager`] is a single-pass pull cursor: the first [`Pager::next`]
//! call probes the collection with a HEAD request to learn the total
//! record count, then pages through the listing with GETs, following the
//! server's `Link: rel="next"` continuation URIs and yielding one
//! materialized [`Resource`] at a time.
//!
//! The pager trusts the single upfront count for the whole traversal and
//! never reconciles it against later pages; if the collection mutates
//! mid-traversal, completion may be over- or under-reported.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut pager = recurly.accounts().pager(BTreeMap::new());
//! while let Some(account) = pager.next().await? {
//!     println!("{:?}", account.id());
//! }
//! ```

use std::collections::{BTreeMap, VecDeque};

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::model::client::ApiClient;
use crate::model::errors::{classify, ResourceError};
use crate::model::resource::Resource;
use crate::model::schema::ResourceSchema;

/// Page size hint sent with every listing request.
pub const PER_PAGE: u32 = 200;

/// Error from a batch traversal: either the pager failed or the caller's
/// callback did.
#[derive(Debug, Error)]
pub enum BatchError<E> {
    /// The pager itself failed (probe, page fetch, decode, ...).
    #[error(transparent)]
    Pager(#[from] ResourceError),

    /// The per-item callback returned an error.
    #[error("batch callback failed: {0}")]
    Callback(E),
}

/// A single-pass cursor over a collection endpoint.
///
/// Not restartable: re-iterating requires constructing a new pager. Holds
/// mutable cursor state with no synchronization, so a pager belongs to one
/// consumer; independent pagers share nothing and may run in parallel.
#[derive(Debug)]
pub struct Pager {
    client: ApiClient,
    schema: &'static ResourceSchema,
    endpoint_uri: String,
    total: Option<u64>,
    current: u64,
    buffer: VecDeque<Resource>,
    poison: Option<String>,
}

impl Pager {
    pub(crate) fn new(
        client: ApiClient,
        schema: &'static ResourceSchema,
        endpoint: &str,
        filter: &BTreeMap<String, String>,
    ) -> Self {
        let endpoint_uri = format!("{endpoint}?{}", query_string(filter));
        Self {
            client,
            schema,
            endpoint_uri,
            total: None,
            current: 0,
            buffer: VecDeque::new(),
            poison: None,
        }
    }

    /// Returns the server-reported total, once the count probe has run.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Returns the number of items yielded so far.
    #[must_use]
    pub const fn current(&self) -> u64 {
        self.current
    }

    /// Yields the next resource, or `None` on clean exhaustion.
    ///
    /// The first call issues the count probe; page fetches happen whenever
    /// the buffer runs dry. Once exhausted, further calls return
    /// `Ok(None)` with no network activity.
    ///
    /// # Errors
    ///
    /// A failed count probe poisons the pager: the original error is
    /// returned once and every later call gets
    /// [`ResourceError::Poisoned`] without further I/O. Page fetch errors
    /// are returned without advancing the cursor.
    pub async fn next(&mut self) -> Result<Option<Resource>, ResourceError> {
        if let Some(message) = &self.poison {
            return Err(ResourceError::Poisoned {
                message: message.clone(),
            });
        }

        if self.total.is_none() {
            if let Err(e) = self.probe_count().await {
                self.poison = Some(e.to_string());
                return Err(e);
            }
        }

        let total = self.total.unwrap_or(0);
        if self.current >= total {
            return Ok(None);
        }

        if self.buffer.is_empty() {
            self.fetch_page().await?;
        }

        match self.buffer.pop_front() {
            Some(resource) => {
                self.current += 1;
                Ok(Some(resource))
            }
            // the server returned an empty page before the promised count
            // was reached; report exhaustion rather than spinning
            None => Ok(None),
        }
    }

    /// Collects every remaining item into an ordered list.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error [`Pager::next`] yields.
    pub async fn collect_all(&mut self) -> Result<Vec<Resource>, ResourceError> {
        let mut items = Vec::new();
        while let Some(resource) = self.next().await? {
            items.push(resource);
        }
        Ok(items)
    }

    /// Applies an async callback to every remaining item, stopping on the
    /// first error from either side.
    ///
    /// Returns the number of items the callback processed.
    ///
    /// # Errors
    ///
    /// [`BatchError::Pager`] if the traversal fails, or
    /// [`BatchError::Callback`] with the first callback error.
    pub async fn try_for_each<F, Fut, E>(&mut self, mut f: F) -> Result<u64, BatchError<E>>
    where
        F: FnMut(Resource) -> Fut,
        Fut: std::future::Future<Output = Result<(), E>>,
    {
        let mut processed = 0;
        while let Some(resource) = self.next().await? {
            f(resource).await.map_err(BatchError::Callback)?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Issues the count probe: a HEAD against the filtered endpoint,
    /// reading the total from the `X-Records` header.
    async fn probe_count(&mut self) -> Result<(), ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Head, &self.endpoint_uri)
            .build()
            .map_err(HttpError::from)?;
        let response = self.client.send(request).await?;

        classify(&response, &[200], self.client.decoder())?;

        let Some(records) = response.records else {
            return Err(ResourceError::MissingRecordCount);
        };

        tracing::debug!(
            resource = self.schema.name,
            records,
            "count probe completed"
        );
        self.total = Some(records);
        Ok(())
    }

    /// Fetches the next page into the buffer and advances the endpoint to
    /// the server's continuation URI when one is given.
    async fn fetch_page(&mut self) -> Result<(), ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Get, &self.endpoint_uri)
            .build()
            .map_err(HttpError::from)?;
        let response = self.client.send(request).await?;

        classify(&response, &[200], self.client.decoder())?;

        let value = self.client.decoder().decode(&response.body)?;
        let mut rows = Vec::new();
        for row in rows_of(&value) {
            let mut resource = Resource::new(self.client.clone(), self.schema);
            resource.inflate(row)?;
            rows.push(resource);
        }

        // Only advance the cursor once the page decoded cleanly, so a
        // failed fetch can be retried against the same URI
        if let Some(next) = response.next_page() {
            self.endpoint_uri = next.to_string();
        }
        self.buffer.extend(rows);

        Ok(())
    }
}

/// Views a decoded page body as a sequence of rows.
///
/// Collections arrive as `<accounts type="array">...</accounts>`, which
/// decodes to an array; a single-element page without the array marker
/// decodes to a bare object.
fn rows_of(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(rows) => rows.iter().collect(),
        Value::Object(_) => vec![value],
        _ => Vec::new(),
    }
}

/// Renders a filter map as a query string, always including the page size
/// hint.
fn query_string(filter: &BTreeMap<String, String>) -> String {
    let mut parts: Vec<String> = filter
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();
    parts.push(format!("per_page={PER_PAGE}"));
    parts.join("&")
}
