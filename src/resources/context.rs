use crate::clients::ApiClientError;
use crate::endpoints::{ApiEndpoint, MetadataEndpoint};
use crate::entities::{CompanySettings, PriceType};
use crate::responses::CompanySettingsMetadata;

resource_client!(
    /// Account-wide settings.
    CompanySettingsClient,
    "/context/companysettings/"
);

impl MetadataEndpoint<CompanySettingsMetadata> for CompanySettingsClient<'_> {}

impl CompanySettingsClient<'_> {
    /// Fetches the settings of the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    pub async fn get(&self) -> Result<CompanySettings, ApiClientError> {
        self.executor("").get().await
    }

    /// Lists the price types configured for the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    pub async fn price_types(&self) -> Result<Vec<PriceType>, ApiClientError> {
        self.executor("pricetype").get().await
    }
}
