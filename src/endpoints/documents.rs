//! Capabilities specific to documents: templates for new documents, print
//! form export and line items.

use std::path::Path;

use serde::Serialize;

use crate::clients::{ApiClientError, InvalidHttpRequestError};
use crate::endpoints::{write_back, ApiEndpoint};
use crate::entities::Entity;
use crate::params::ApiParam;
use crate::responses::{ExportExtension, ExportFile, ListEntity, Template};
use crate::util::path_segment;

fn positions_path(document_id: &str) -> String {
    format!("{}/positions", path_segment(document_id))
}

fn position_path(document_id: &str, position_id: &str) -> String {
    format!(
        "{}/positions/{}",
        path_segment(document_id),
        path_segment(position_id)
    )
}

/// `PUT {path}new`: a document pre-filled with server defaults.
#[allow(async_fn_in_trait)]
pub trait DocumentNewEndpoint<T: Entity>: ApiEndpoint {
    /// Returns a new, unsaved document with default values filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn new_document(&self) -> Result<T, ApiClientError> {
        self.executor("new")
            .body(&serde_json::json!({}))?
            .put()
            .await
    }

    /// Returns a new document based on `template`, a partial document whose
    /// linked values (e.g. a source document) determine what is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn new_document_from<B: Serialize + Sync>(&self, template: &B) -> Result<T, ApiClientError> {
        self.executor("new").body(template)?.put().await
    }
}

/// Print form templates and document export.
#[allow(async_fn_in_trait)]
pub trait ExportEndpoint: ApiEndpoint {
    /// Lists the built-in print form templates.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn embedded_templates(&self) -> Result<ListEntity<Template>, ApiClientError> {
        self.executor("metadata/embeddedtemplate").list().await
    }

    /// Fetches one built-in template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn embedded_template(&self, id: &str) -> Result<Template, ApiClientError> {
        self.executor(&format!("metadata/embeddedtemplate/{}", path_segment(id)))
            .get()
            .await
    }

    /// Lists the templates uploaded by the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn custom_templates(&self) -> Result<ListEntity<Template>, ApiClientError> {
        self.executor("metadata/customtemplate").list().await
    }

    /// Fetches one uploaded template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn custom_template(&self, id: &str) -> Result<Template, ApiClientError> {
        self.executor(&format!("metadata/customtemplate/{}", path_segment(id)))
            .get()
            .await
    }

    /// Renders document `document_id` with `template`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingEntityId`] if `template`
    /// has no meta, or [`ApiClientError`] if the request fails.
    async fn export(
        &self,
        document_id: &str,
        template: &Template,
        extension: ExportExtension,
    ) -> Result<ExportFile, ApiClientError> {
        let meta = template
            .meta
            .as_ref()
            .ok_or(InvalidHttpRequestError::MissingEntityId {
                entity: "template",
                operation: "export",
            })?;

        let body = serde_json::json!({
            "template": { "meta": meta },
            "extension": extension,
        });
        let bytes = self
            .executor(&format!("{}/export/", path_segment(document_id)))
            .body(&body)?
            .post_bytes()
            .await?;

        Ok(ExportFile { bytes, extension })
    }

    /// Renders a document and writes the result to `path`.
    ///
    /// # Errors
    ///
    /// As [`ExportEndpoint::export`], plus [`ApiClientError::Io`] if the
    /// file cannot be written.
    async fn export_to_file(
        &self,
        document_id: &str,
        template: &Template,
        extension: ExportExtension,
        path: impl AsRef<Path>,
    ) -> Result<(), ApiClientError> {
        let file = self.export(document_id, template, extension).await?;
        file.write_to(path.as_ref()).await?;
        tracing::debug!(
            document_id,
            path = %path.as_ref().display(),
            len = file.bytes.len(),
            "Export written"
        );
        Ok(())
    }
}

/// `{path}{document_id}/positions`: line items of a document.
#[allow(async_fn_in_trait)]
pub trait DocumentPositionsEndpoint<P: Entity>: ApiEndpoint {
    /// Lists the line items of a document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn get_positions(
        &self,
        document_id: &str,
        params: &[ApiParam],
    ) -> Result<ListEntity<P>, ApiClientError> {
        self.executor(&positions_path(document_id))
            .params(params)
            .list()
            .await
    }

    /// Fetches one line item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn get_position(
        &self,
        document_id: &str,
        position_id: &str,
        params: &[ApiParam],
    ) -> Result<P, ApiClientError> {
        self.executor(&position_path(document_id, position_id))
            .params(params)
            .get()
            .await
    }

    /// Adds line items to a document. The created items are written back
    /// to `positions` by index; items the server did not return are left
    /// as sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn create_positions(
        &self,
        document_id: &str,
        positions: &mut [P],
    ) -> Result<(), ApiClientError> {
        let created: Vec<P> = self
            .executor(&positions_path(document_id))
            .body(&*positions)?
            .post_list()
            .await?;
        write_back(positions, created);
        Ok(())
    }

    /// Adds one line item and replaces `position` with the created item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn create_position(&self, document_id: &str, position: &mut P) -> Result<(), ApiClientError> {
        self.create_positions(document_id, std::slice::from_mut(position))
            .await
    }

    /// Updates line item `position_id` and replaces `position` with the
    /// server copy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn update_position(
        &self,
        document_id: &str,
        position_id: &str,
        position: &mut P,
    ) -> Result<(), ApiClientError> {
        let updated: P = self
            .executor(&position_path(document_id, position_id))
            .body(&*position)?
            .put()
            .await?;
        *position = updated;
        Ok(())
    }

    /// Removes a line item from a document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn delete_position(&self, document_id: &str, position_id: &str) -> Result<(), ApiClientError> {
        self.executor(&position_path(document_id, position_id))
            .delete()
            .await
    }
}
