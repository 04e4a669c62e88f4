//! User-defined dictionaries.
//!
//! The dictionaries themselves are created, renamed and deleted through the
//! capability traits. Their elements live one level down at
//! `/entity/customentity/{dictionary_id}/{element_id}` and are handled by
//! the inherent methods of [`CustomEntityClient`]. The list of existing
//! dictionaries comes from the company settings metadata.

use crate::clients::ApiClientError;
use crate::endpoints::{require_id, ApiEndpoint, DeleteByIdEndpoint, PostEndpoint, PutByIdEndpoint};
use crate::entities::{CustomEntity, CustomEntityElement};
use crate::params::ApiParam;
use crate::responses::ListEntity;
use crate::util::path_segment;

resource_client!(CustomEntityClient, "/entity/customentity/");

impl PostEndpoint<CustomEntity> for CustomEntityClient<'_> {}
impl PutByIdEndpoint<CustomEntity> for CustomEntityClient<'_> {}
impl DeleteByIdEndpoint<CustomEntity> for CustomEntityClient<'_> {}

impl CustomEntityClient<'_> {
    /// Lists the elements of a dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    pub async fn get_elements(
        &self,
        dictionary_id: &str,
        params: &[ApiParam],
    ) -> Result<ListEntity<CustomEntityElement>, ApiClientError> {
        self.executor(&path_segment(dictionary_id)).params(params).list().await
    }

    /// Fetches one element.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    pub async fn get_element(
        &self,
        dictionary_id: &str,
        element_id: &str,
        params: &[ApiParam],
    ) -> Result<CustomEntityElement, ApiClientError> {
        self.executor(&format!("{}/{}", path_segment(dictionary_id), path_segment(element_id)))
            .params(params)
            .get()
            .await
    }

    /// Adds `element` to a dictionary and replaces it with the created
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    pub async fn create_element(
        &self,
        dictionary_id: &str,
        element: &mut CustomEntityElement,
    ) -> Result<(), ApiClientError> {
        let created: CustomEntityElement =
            self.executor(&path_segment(dictionary_id)).body(&*element)?.post().await?;
        *element = created;
        Ok(())
    }

    /// Updates `element` in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::clients::InvalidHttpRequestError::MissingEntityId`]
    /// if the element has no ID, or [`ApiClientError`] if the request fails.
    pub async fn update_element(
        &self,
        dictionary_id: &str,
        element: &mut CustomEntityElement,
    ) -> Result<(), ApiClientError> {
        let id = require_id(&*element, "update_element")?;
        let updated: CustomEntityElement = self
            .executor(&format!("{}/{}", path_segment(dictionary_id), path_segment(&id)))
            .body(&*element)?
            .put()
            .await?;
        *element = updated;
        Ok(())
    }

    /// Deletes an element.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    pub async fn delete_element(&self, dictionary_id: &str, element_id: &str) -> Result<(), ApiClientError> {
        self.executor(&format!("{}/{}", path_segment(dictionary_id), path_segment(element_id)))
            .delete()
            .await
    }
}
