//! Error types for HTTP operations against the MoySklad API.
//!
//! - [`ApiError`]: non-2xx responses, with the structured error payload
//! - [`InvalidHttpRequestError`]: a request rejected before it is sent
//! - [`ApiClientError`]: unified error type returned by every client call
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::ApiClientError;
//!
//! match api.entity().store().get_by_id("missing", &[]).await {
//!     Ok(store) => println!("Found {:?}", store.name),
//!     Err(ApiClientError::Api(e)) => println!("API error {}: {}", e.status, e.message()),
//!     Err(ApiClientError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single error object from the `errors` array of an error payload.
///
/// The API reports the text in `error`; some endpoints and proxies use
/// `message` instead. [`ErrorItem::text`] returns whichever is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorItem {
    /// Error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Alternative error text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Numeric error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// The request parameter the error refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// Link to the error documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    /// Line in the request body where parsing failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    /// Column in the request body where parsing failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
}

impl ErrorItem {
    /// Returns the error text, preferring `error` over `message`.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// Error payload shape: `{info, errors: [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Individual errors.
    #[serde(default)]
    pub errors: Vec<ErrorItem>,
}

/// Error returned when the API answers with a non-2xx status code.
///
/// ```rust
/// use moysklad_api::clients::{ApiError, ErrorItem};
///
/// let error = ApiError {
///     status: 412,
///     info: None,
///     errors: vec![ErrorItem {
///         code: Some(1234),
///         message: Some("x".to_string()),
///         ..Default::default()
///     }],
/// };
/// assert_eq!(error.message(), "x");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub struct ApiError {
    /// The HTTP status code.
    pub status: u16,
    /// Summary text from the payload, if any.
    pub info: Option<String>,
    /// Errors reported by the server.
    pub errors: Vec<ErrorItem>,
}

impl ApiError {
    /// Builds an error from a status code and the raw response body.
    ///
    /// Bulk endpoints answer with an array of payloads; their errors are
    /// concatenated. A body that is not a valid error payload yields an
    /// empty error list.
    #[must_use]
    pub fn from_body(status: u16, body: &serde_json::Value) -> Self {
        let payloads: Vec<ErrorPayload> = match body {
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            _ => vec![serde_json::from_value(body.clone()).unwrap_or_default()],
        };

        let info = payloads.iter().find_map(|p| p.info.clone());
        let errors = payloads.into_iter().flat_map(|p| p.errors).collect();
        Self {
            status,
            info,
            errors,
        }
    }

    /// Returns the first error message, the `info` text, or a generic message.
    #[must_use]
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .find_map(ErrorItem::text)
            .or(self.info.as_deref())
            .map_or_else(|| format!("HTTP status {}", self.status), String::from)
    }

    /// Returns the code of the first error, if any.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.errors.iter().find_map(|e| e.code)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error {}: {}", self.status, self.message())
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// An entity-scoped call was made on an entity that has no id.
    #[error("{entity} has no id; save it before calling {operation}.")]
    MissingEntityId {
        /// The entity type name.
        entity: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },
}

/// Unified error type for every client operation.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The API returned a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response (or request body) did not match the expected JSON shape.
    #[error("Failed to parse {target}: {source}")]
    Parse {
        /// The type being (de)serialized.
        target: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing an exported file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiClientError {
    /// Returns the HTTP status if this is an API error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }
}
