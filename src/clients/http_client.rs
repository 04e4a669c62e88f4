//! HTTP client for MoySklad API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests against the JSON API.

use std::collections::HashMap;

use crate::clients::errors::{ApiClientError, ApiError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ApiConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the MoySklad API.
///
/// The client handles:
/// - Base URL construction from the configured host
/// - Default headers including `Authorization` and `User-Agent`
/// - Mapping of non-2xx responses to [`ApiError`]
///
/// Requests are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::{ApiConfig, HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&ApiConfig::from_env()?)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/entity/store/")
///     .query_param("limit", "10")
///     .build()?;
///
/// let response = client.request(request).await?;
/// println!("Stores: {}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.moysklad.ru/api/remap/1.2`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Network`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiClientError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}MoySklad API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Accept".to_string(),
            "application/json;charset=utf-8".to_string(),
        );
        default_headers.insert(
            "Authorization".to_string(),
            config.credentials().authorization_header(),
        );
        if config.pretty_print_json() {
            default_headers.insert("Lognex-Pretty-Print-JSON".to_string(), "true".to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        let base_url = config.base_url();

        tracing::debug!(base_url = %base_url, "Created MoySklad HTTP client");

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and parses the response body as JSON.
    ///
    /// An empty body is returned as `Value::Null`.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::InvalidRequest`] if request validation fails
    /// - [`ApiClientError::Network`] on transport failure
    /// - [`ApiClientError::Api`] for any non-2xx response
    /// - [`ApiClientError::Parse`] if a 2xx body is not valid JSON
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiClientError> {
        let (code, headers, bytes) = self.send(&request).await?;

        if !(200..=299).contains(&code) {
            return Err(Self::error_from_bytes(code, &bytes).into());
        }

        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|source| ApiClientError::Parse {
                target: "response body",
                source,
            })?
        };

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Sends a request and returns the raw response bytes.
    ///
    /// Used for binary artifacts such as exported print forms.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::request`], except that the body is never parsed
    /// on success.
    pub async fn request_bytes(&self, request: HttpRequest) -> Result<Vec<u8>, ApiClientError> {
        let (code, _, bytes) = self.send(&request).await?;

        if !(200..=299).contains(&code) {
            return Err(Self::error_from_bytes(code, &bytes).into());
        }
        Ok(bytes)
    }

    async fn send(
        &self,
        request: &HttpRequest,
    ) -> Result<(u16, HashMap<String, Vec<String>>, Vec<u8>), ApiClientError> {
        request.verify()?;

        let mut url = format!("{}{}", self.base_url, request.path);
        if !request.query.is_empty() {
            url.push('?');
            url.push_str(&request.query_string());
        }

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "Sending request");

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let bytes = res.bytes().await?.to_vec();

        tracing::debug!(method = %request.http_method, url = %url, status = code, "Received response");

        if let Some(deprecated) = res_headers
            .get(crate::clients::http_response::DEPRECATION_HEADER)
            .and_then(|values| values.first())
        {
            tracing::warn!(
                "Deprecated request to MoySklad API at {}, received: {}",
                request.path,
                deprecated
            );
        }

        Ok((code, res_headers, bytes))
    }

    /// Builds an [`ApiError`] from a raw error body.
    fn error_from_bytes(code: u16, bytes: &[u8]) -> ApiError {
        let body = serde_json::from_slice(bytes).unwrap_or(serde_json::Value::Null);
        ApiError::from_body(code, &body)
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
}
