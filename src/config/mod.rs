//! Configuration types for the MoySklad API client.
//!
//! # Overview
//!
//! - [`ApiConfig`]: host, credentials and request settings
//! - [`ApiConfigBuilder`]: a builder for constructing [`ApiConfig`] instances
//! - [`Credentials`]: basic (login/password) or bearer token authentication
//! - [`HostUrl`]: a validated API host URL
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::{ApiConfig, AccessToken, Credentials};
//!
//! let config = ApiConfig::builder()
//!     .credentials(Credentials::token(AccessToken::new("my-token").unwrap()))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.moysklad.ru");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, Credentials, HostUrl, Login, Password};

use crate::error::ConfigError;

/// Default API host.
pub const DEFAULT_HOST: &str = "https://api.moysklad.ru";

/// Path of the JSON API (remap 1.2) relative to the host.
pub const API_PATH: &str = "/api/remap/1.2";

/// Environment variable holding the API host.
pub const ENV_HOST: &str = "MOYSKLAD_HOST";
/// Environment variable holding a bearer token.
pub const ENV_TOKEN: &str = "MOYSKLAD_TOKEN";
/// Environment variable holding the login.
pub const ENV_LOGIN: &str = "MOYSKLAD_LOGIN";
/// Environment variable holding the password.
pub const ENV_PASSWORD: &str = "MOYSKLAD_PASSWORD";

/// Configuration for the MoySklad API client.
///
/// Set once at construction and read-only afterwards. `ApiConfig` is
/// `Clone`, `Send` and `Sync`.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    credentials: Credentials,
    host: HostUrl,
    user_agent_prefix: Option<String>,
    pretty_print_json: bool,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads [`ENV_TOKEN`], or [`ENV_LOGIN`] and [`ENV_PASSWORD`], and an
    /// optional [`ENV_HOST`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvCredentials`] if no credentials are set,
    /// or a validation error if a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// A token takes precedence over a login/password pair.
    ///
    /// # Errors
    ///
    /// Same as [`ApiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = if let Some(token) = lookup(ENV_TOKEN) {
            Credentials::token(AccessToken::new(token)?)
        } else if let (Some(login), Some(password)) = (lookup(ENV_LOGIN), lookup(ENV_PASSWORD)) {
            Credentials::basic(Login::new(login)?, Password::new(password)?)
        } else {
            return Err(ConfigError::MissingEnvCredentials {
                token_var: ENV_TOKEN,
                login_var: ENV_LOGIN,
                password_var: ENV_PASSWORD,
            });
        };

        let mut builder = Self::builder().credentials(credentials);
        if let Some(host) = lookup(ENV_HOST) {
            builder = builder.host(HostUrl::new(host)?);
        }
        builder.build()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the full API base URL (host plus [`API_PATH`]).
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}{API_PATH}", self.host)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether responses are requested with pretty-printed JSON.
    #[must_use]
    pub const fn pretty_print_json(&self) -> bool {
        self.pretty_print_json
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// # Defaults
///
/// - `host`: [`DEFAULT_HOST`]
/// - `user_agent_prefix`: `None`
/// - `pretty_print_json`: `false`
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    credentials: Option<Credentials>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    pretty_print_json: Option<bool>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Requests pretty-printed JSON responses.
    #[must_use]
    pub const fn pretty_print_json(mut self, enabled: bool) -> Self {
        self.pretty_print_json = Some(enabled);
        self
    }

    /// Builds the [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if credentials are not set.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        let host = match self.host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_HOST)?,
        };

        Ok(ApiConfig {
            credentials,
            host,
            user_agent_prefix: self.user_agent_prefix,
            pretty_print_json: self.pretty_print_json.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn token_credentials() -> Credentials {
        Credentials::token(AccessToken::new("token").unwrap())
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = ApiConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ApiConfig::builder()
            .credentials(token_credentials())
            .build()
            .unwrap();

        assert_eq!(config.host().as_ref(), DEFAULT_HOST);
        assert_eq!(config.base_url(), "https://api.moysklad.ru/api/remap/1.2");
        assert!(config.user_agent_prefix().is_none());
        assert!(!config.pretty_print_json());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ApiConfig::builder()
            .credentials(token_credentials())
            .host(HostUrl::new("http://localhost:9000").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .pretty_print_json(true)
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://localhost:9000/api/remap/1.2");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert!(config.pretty_print_json());
    }

    #[test]
    fn test_from_lookup_prefers_token() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_TOKEN, "tok"),
            (ENV_LOGIN, "admin@x"),
            (ENV_PASSWORD, "pw"),
        ]);
        let config = ApiConfig::from_lookup(|k| vars.get(k).map(ToString::to_string)).unwrap();

        assert!(matches!(config.credentials(), Credentials::Token(_)));
    }

    #[test]
    fn test_from_lookup_uses_login_password_and_host() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_LOGIN, "admin@x"),
            (ENV_PASSWORD, "pw"),
            (ENV_HOST, "https://online.moysklad.ru"),
        ]);
        let config = ApiConfig::from_lookup(|k| vars.get(k).map(ToString::to_string)).unwrap();

        assert!(matches!(config.credentials(), Credentials::Basic { .. }));
        assert_eq!(config.host().as_ref(), "https://online.moysklad.ru");
    }

    #[test]
    fn test_from_lookup_without_credentials_fails() {
        let result = ApiConfig::from_lookup(|_| None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvCredentials { .. })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiConfig>();
    }
}
