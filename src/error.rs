//! Configuration error types for the MoySklad API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or hosts are rejected before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`ApiConfig`](crate::ApiConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Login cannot be empty.
    #[error("Login cannot be empty. Please provide a MoySklad login (e.g. 'admin@company').")]
    EmptyLogin,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the password for the MoySklad login.")]
    EmptyPassword,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid MoySklad access token.")]
    EmptyAccessToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.moysklad.ru').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Neither a token nor a login/password pair was found in the environment.
    #[error("No credentials found in environment. Set {token_var} or both {login_var} and {password_var}.")]
    MissingEnvCredentials {
        /// Variable holding the access token.
        token_var: &'static str,
        /// Variable holding the login.
        login_var: &'static str,
        /// Variable holding the password.
        password_var: &'static str,
    },
}
