//! The root API object.

use crate::clients::{ApiClientError, HttpClient, RequestExecutor};
use crate::config::ApiConfig;
use crate::resources::{ContextClients, EntityClients};
use crate::responses::TokenResponse;

/// Entry point to the MoySklad API.
///
/// Holds the configuration and one shared [`HttpClient`]. Resource clients
/// borrow it, so a single `MoySkladApi` can serve any number of concurrent
/// calls; wrap it in an `Arc` to share it between tasks.
///
/// # Example
///
/// ```rust
/// use moysklad_api::{AccessToken, ApiConfig, Credentials, MoySkladApi};
///
/// let config = ApiConfig::builder()
///     .credentials(Credentials::token(AccessToken::new("token").unwrap()))
///     .build()
///     .unwrap();
/// let api = MoySkladApi::new(config).unwrap();
///
/// assert_eq!(api.client().base_url(), "https://api.moysklad.ru/api/remap/1.2");
/// ```
#[derive(Debug)]
pub struct MoySkladApi {
    config: ApiConfig,
    client: HttpClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoySkladApi>();
};

impl MoySkladApi {
    /// Creates the API object and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Network`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: ApiConfig) -> Result<Self, ApiClientError> {
        let client = HttpClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Returns the configuration this API was built with.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Clients for `/entity/...` collections.
    #[must_use]
    pub const fn entity(&self) -> EntityClients<'_> {
        EntityClients::new(self)
    }

    /// Clients for `/context/...` resources.
    #[must_use]
    pub const fn context(&self) -> ContextClients<'_> {
        ContextClients::new(self)
    }

    /// Exchanges the configured login and password for an access token.
    ///
    /// The token can be used to build a new configuration with
    /// [`crate::Credentials::token`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Api`] with status 401 if the credentials
    /// are rejected.
    pub async fn obtain_token(&self) -> Result<TokenResponse, ApiClientError> {
        RequestExecutor::path(&self.client, "/security/token")
            .post()
            .await
    }
}
