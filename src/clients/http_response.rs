//! HTTP response types for the MoySklad API client.
//!
//! This module provides the [`HttpResponse`] type and the parsed
//! [`RateLimitInfo`] attached to every response.

use std::collections::HashMap;

/// Header announcing that the requested API version is deprecated.
pub const DEPRECATION_HEADER: &str = "x-lognex-api-version-deprecated";

/// Rate limit information parsed from the `X-RateLimit-*` and
/// `X-Lognex-*` response headers.
///
/// # Example
///
/// ```rust
/// use moysklad_api::clients::RateLimitInfo;
/// use std::collections::HashMap;
///
/// let headers = HashMap::from([
///     ("x-ratelimit-limit".to_string(), vec!["45".to_string()]),
///     ("x-ratelimit-remaining".to_string(), vec!["44".to_string()]),
/// ]);
/// let info = RateLimitInfo::from_headers(&headers).unwrap();
/// assert_eq!(info.limit, 45);
/// assert_eq!(info.remaining, 44);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests allowed in the current window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Window length in milliseconds (`X-Lognex-Retry-TimeInterval`).
    pub retry_time_interval_ms: Option<u64>,
    /// Milliseconds until the limit resets (`X-Lognex-Reset`).
    pub reset_ms: Option<u64>,
}

impl RateLimitInfo {
    /// Parses the rate limit headers.
    ///
    /// Returns `None` unless both `X-RateLimit-Limit` and
    /// `X-RateLimit-Remaining` are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let limit = first_header(headers, "x-ratelimit-limit")?.parse().ok()?;
        let remaining = first_header(headers, "x-ratelimit-remaining")?
            .parse()
            .ok()?;

        Some(Self {
            limit,
            remaining,
            retry_time_interval_ms: first_header(headers, "x-lognex-retry-timeinterval")
                .and_then(|v| v.parse().ok()),
            reset_ms: first_header(headers, "x-lognex-reset").and_then(|v| v.parse().ok()),
        })
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

/// An HTTP response from the MoySklad API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. An empty body is `Value::Null`.
    pub body: serde_json::Value,
    /// Rate limit state reported by the server.
    pub rate_limit: Option<RateLimitInfo>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimitInfo::from_headers(&headers);
        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the value of the API version deprecation header, if present.
    #[must_use]
    pub fn deprecation(&self) -> Option<&str> {
        first_header(&self.headers, DEPRECATION_HEADER)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_header(&self.headers, "x-request-id")
    }
}
