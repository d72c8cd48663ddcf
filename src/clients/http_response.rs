//! HTTP response types for the Recurly API SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! accessing API response data and the Recurly-specific headers that drive
//! pagination.

use std::collections::HashMap;

/// Pagination links parsed from the `Link` header.
///
/// Recurly's collection endpoints return continuation cursors as full URIs
/// in the `Link` header, tagged with `rel="next"` / `rel="prev"`. The next
/// URI is what a paged iterator targets after exhausting the current page.
///
/// # Example
///
/// ```rust
/// use recurly_api::clients::LinkHeader;
///
/// let link = LinkHeader::parse(
///     r#"<https://api.recurly.com/v2/accounts?cursor=1827545887837797560>; rel="next""#,
/// );
/// assert_eq!(
///     link.next.as_deref(),
///     Some("https://api.recurly.com/v2/accounts?cursor=1827545887837797560")
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkHeader {
    /// Full URI of the previous page, if any.
    pub prev: Option<String>,
    /// Full URI of the next page, if any.
    pub next: Option<String>,
}

impl LinkHeader {
    /// Parses pagination links from a `Link` header value.
    ///
    /// The header format is `<url>; rel="next", <url>; rel="prev"`. Entries
    /// with unknown relations (e.g. `rel="start"`) are ignored.
    #[must_use]
    pub fn parse(header_value: &str) -> Self {
        let mut result = Self::default();

        for entry in header_value.split(',') {
            let entry = entry.trim();

            let rel = entry.split(';').find_map(|part| {
                let part = part.trim();
                part.strip_prefix("rel=").map(|r| r.trim_matches('"'))
            });

            let url = entry
                .split(';')
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));

            if let (Some(rel), Some(url)) = (rel, url) {
                match rel {
                    "prev" | "previous" => result.prev = Some(url.to_string()),
                    "next" => result.next = Some(url.to_string()),
                    _ => {}
                }
            }
        }

        result
    }
}

/// An HTTP response from the Recurly API.
///
/// Contains the response status code, headers, and the raw body, plus
/// parsed Recurly-specific header values: the total record count and the
/// pagination links.
///
/// The body is kept as the raw wire payload; XML decoding happens in the
/// model layer so that error classification can see undecoded bodies.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Total matching record count (from the `X-Records` header).
    pub records: Option<u64>,
    /// Pagination links (from the `Link` header).
    pub links: LinkHeader,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// This constructor parses Recurly-specific headers automatically:
    /// - `X-Records` -> `records`
    /// - `Link` -> `links`
    /// - `Retry-After` -> `retry_request_after`
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let links = headers
            .get("link")
            .and_then(|values| values.first())
            .map_or_else(LinkHeader::default, |value| LinkHeader::parse(value));

        let records = headers
            .get("x-records")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<u64>().ok());

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            records,
            links,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the URI of the next page, if the server provided one.
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.links.next.as_deref()
    }
}
