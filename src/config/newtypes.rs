//! Validated newtype wrappers for configuration values.
//!
//! Credentials and hosts are validated on construction; secrets are masked
//! in `Debug` output so they never end up in logs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

use crate::error::ConfigError;

/// A validated MoySklad login (e.g. `admin@company`).
///
/// # Example
///
/// ```rust
/// use moysklad_api::Login;
///
/// let login = Login::new("admin@company").unwrap();
/// assert_eq!(login.as_ref(), "admin@company");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Login(String);

impl Login {
    /// Creates a new validated login.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogin`] if the login is empty.
    pub fn new(login: impl Into<String>) -> Result<Self, ConfigError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(ConfigError::EmptyLogin);
        }
        Ok(Self(login))
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated password with masked debug output.
///
/// ```rust
/// use moysklad_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// A validated bearer access token with masked debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// Credentials sent with every request.
///
/// MoySklad accepts either HTTP Basic authentication with a login and
/// password, or a bearer token obtained from `POST /security/token`.
///
/// # Example
///
/// ```rust
/// use moysklad_api::{Credentials, Login, Password};
///
/// let credentials = Credentials::basic(
///     Login::new("admin@company").unwrap(),
///     Password::new("secret").unwrap(),
/// );
/// assert!(credentials.authorization_header().starts_with("Basic "));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP Basic authentication.
    Basic {
        /// The account login.
        login: Login,
        /// The account password.
        password: Password,
    },
    /// Bearer token authentication.
    Token(AccessToken),
}

impl Credentials {
    /// Creates basic credentials from a login and password.
    #[must_use]
    pub const fn basic(login: Login, password: Password) -> Self {
        Self::Basic { login, password }
    }

    /// Creates bearer token credentials.
    #[must_use]
    pub const fn token(token: AccessToken) -> Self {
        Self::Token(token)
    }

    /// Returns the value of the `Authorization` header for these credentials.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::Basic { login, password } => {
                let raw = format!("{}:{}", login.as_ref(), password.as_ref());
                format!("Basic {}", STANDARD.encode(raw))
            }
            Self::Token(token) => format!("Bearer {}", token.as_ref()),
        }
    }
}

/// A validated API host URL.
///
/// Trailing slashes are removed so that paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use moysklad_api::HostUrl;
///
/// let url = HostUrl::new("https://api.moysklad.ru/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.moysklad.ru");
/// assert_eq!(url.host_name(), Some("api.moysklad.ru"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
