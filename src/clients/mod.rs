//! HTTP layer for the MoySklad JSON API.
//!
//! This module provides the transport every resource client goes through.
//! It sends authenticated requests, maps error responses and parses the
//! service headers.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client bound to one account
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response, with [`RateLimitInfo`]
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestExecutor`]: typed single-call builder used by resource clients
//! - [`ApiClientError`]: the error type of every call
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::{ApiConfig, HttpClient, HttpMethod, HttpRequest};
//!
//! let config = ApiConfig::from_env()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/entity/store")
//!     .query_param("limit", "10")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! Nothing is retried. A `429` is returned as [`ApiError`] like any other
//! non-2xx status; the rate limit headers of successful responses are
//! available in [`HttpResponse::rate_limit`].

mod errors;
mod executor;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiClientError, ApiError, ErrorItem, ErrorPayload, InvalidHttpRequestError};
pub use executor::RequestExecutor;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimitInfo, DEPRECATION_HEADER};
