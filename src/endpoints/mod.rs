//! Endpoint capability traits.
//!
//! Every resource client implements [`ApiEndpoint`] (the API it talks to and
//! the collection path, ending in `/`) and then opts into the capabilities
//! its resource supports by implementing the traits below with no body.
//! All operations have default implementations built on
//! [`RequestExecutor`].
//!
//! Create and update calls overwrite the value passed in with the server
//! representation, so generated fields (ID, meta, timestamps) are available
//! on the caller's value afterwards.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::prelude::*;
//! use moysklad_api::entities::Store;
//!
//! let mut store = Store {
//!     name: Some("Main".to_string()),
//!     ..Store::default()
//! };
//! api.entity().store().create(&mut store).await?;
//! assert!(store.id.is_some());
//!
//! store.address = Some("Moscow".to_string());
//! api.entity().store().update(&mut store).await?;
//! ```

mod documents;

use serde::de::DeserializeOwned;

use crate::api::MoySkladApi;
use crate::clients::{ApiClientError, InvalidHttpRequestError, RequestExecutor};
use crate::entities::{Attribute, Entity};
use crate::params::ApiParam;
use crate::responses::{ListEntity, MassDeleteResponse};
use crate::util::path_segment;

pub use documents::{DocumentNewEndpoint, DocumentPositionsEndpoint, ExportEndpoint};

/// A client bound to one collection path.
pub trait ApiEndpoint {
    /// The API this client sends requests through.
    fn api(&self) -> &MoySkladApi;

    /// Collection path relative to the API base URL, ending in `/`.
    fn path(&self) -> &str;

    /// Starts a request against `{path}{suffix}`.
    fn executor(&self, suffix: &str) -> RequestExecutor<'_> {
        RequestExecutor::path(self.api().client(), format!("{}{}", self.path(), suffix))
    }
}

/// Returns the entity's ID or a local error naming the operation.
pub(crate) fn require_id<T: Entity>(
    entity: &T,
    operation: &'static str,
) -> Result<String, ApiClientError> {
    entity.id().map(str::to_owned).ok_or_else(|| {
        InvalidHttpRequestError::MissingEntityId {
            entity: T::ENTITY_TYPE,
            operation,
        }
        .into()
    })
}

/// Overwrites `targets` with `rows` index by index.
pub(crate) fn write_back<T>(targets: &mut [T], rows: Vec<T>) {
    for (target, row) in targets.iter_mut().zip(rows) {
        *target = row;
    }
}

/// `GET {path}` returning a page.
#[allow(async_fn_in_trait)]
pub trait GetListEndpoint<T: DeserializeOwned>: ApiEndpoint {
    /// Lists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn get_list(&self, params: &[ApiParam]) -> Result<ListEntity<T>, ApiClientError> {
        self.executor("").params(params).list().await
    }
}

/// `GET {path}{id}`.
#[allow(async_fn_in_trait)]
pub trait GetByIdEndpoint<T: DeserializeOwned>: ApiEndpoint {
    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Api`] with status 404 if it does not exist.
    async fn get_by_id(&self, id: &str, params: &[ApiParam]) -> Result<T, ApiClientError> {
        self.executor(&path_segment(id)).params(params).get().await
    }
}

/// `POST {path}`.
#[allow(async_fn_in_trait)]
pub trait PostEndpoint<T: Entity>: ApiEndpoint {
    /// Creates `entity` and replaces it with the created record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails; `entity` is left
    /// unchanged.
    async fn create(&self, entity: &mut T) -> Result<(), ApiClientError> {
        let created: T = self.executor("").body(&*entity)?.post().await?;
        *entity = created;
        Ok(())
    }

    /// Creates or updates several records in one request.
    ///
    /// Response rows are written back by index; inputs without a matching
    /// row are left as sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn create_all(&self, entities: &mut [T]) -> Result<(), ApiClientError> {
        let created: Vec<T> = self.executor("").body(&*entities)?.post_list().await?;
        write_back(entities, created);
        Ok(())
    }
}

/// `PUT {path}{id}`.
#[allow(async_fn_in_trait)]
pub trait PutByIdEndpoint<T: Entity>: ApiEndpoint {
    /// Sends `entity` as the new state of record `id` and replaces it with
    /// the server copy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn update_by_id(&self, id: &str, entity: &mut T) -> Result<(), ApiClientError> {
        let updated: T = self.executor(&path_segment(id)).body(&*entity)?.put().await?;
        *entity = updated;
        Ok(())
    }

    /// Updates the record identified by `entity`'s own ID.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingEntityId`] if `entity` has
    /// no ID.
    async fn update(&self, entity: &mut T) -> Result<(), ApiClientError> {
        let id = require_id(&*entity, "update")?;
        self.update_by_id(&id, entity).await
    }
}

/// `DELETE {path}{id}`.
#[allow(async_fn_in_trait)]
pub trait DeleteByIdEndpoint<T: Entity>: ApiEndpoint {
    /// Deletes record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn delete_by_id(&self, id: &str) -> Result<(), ApiClientError> {
        self.executor(&path_segment(id)).delete().await
    }

    /// Deletes the record identified by `entity`'s ID.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingEntityId`] if `entity` has
    /// no ID.
    async fn delete(&self, entity: &T) -> Result<(), ApiClientError> {
        let id = require_id(entity, "delete")?;
        self.delete_by_id(&id).await
    }
}

/// `POST {path}delete`.
#[allow(async_fn_in_trait)]
pub trait MassDeleteEndpoint<T: Entity>: ApiEndpoint {
    /// Deletes several records in one request.
    ///
    /// The server handles each item on its own; the result holds one entry
    /// per item, with `errors` set for those that were not deleted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingEntityId`] before sending
    /// if an entity has neither ID nor meta, or [`ApiClientError`] if the
    /// request as a whole fails.
    async fn mass_delete(&self, entities: &[T]) -> Result<Vec<MassDeleteResponse>, ApiClientError> {
        let metas = entities
            .iter()
            .map(|entity| {
                entity
                    .reference_meta()
                    .map(|meta| serde_json::json!({ "meta": meta }))
                    .ok_or(InvalidHttpRequestError::MissingEntityId {
                        entity: T::ENTITY_TYPE,
                        operation: "mass_delete",
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.executor("delete").body(&metas)?.post_list().await
    }
}

/// `GET {path}metadata`.
#[allow(async_fn_in_trait)]
pub trait MetadataEndpoint<M: DeserializeOwned>: ApiEndpoint {
    /// Fetches the metadata of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn metadata(&self) -> Result<M, ApiClientError> {
        self.executor("metadata").get().await
    }
}

/// `GET {path}metadata/attributes`.
#[allow(async_fn_in_trait)]
pub trait MetadataAttributeEndpoint: ApiEndpoint {
    /// Lists the additional fields defined for the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn metadata_attributes(&self) -> Result<ListEntity<Attribute>, ApiClientError> {
        self.executor("metadata/attributes").list().await
    }

    /// Fetches one additional field by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn metadata_attribute(&self, id: &str) -> Result<Attribute, ApiClientError> {
        self.executor(&format!("metadata/attributes/{}", path_segment(id))).get().await
    }
}
