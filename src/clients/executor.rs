//! Request executor: one call against one path, with typed results.
//!
//! Resource clients build an executor per call, attach query parameters and
//! a body, and finish with the verb that matches the operation.
//!
//! ```rust,ignore
//! use moysklad_api::clients::RequestExecutor;
//! use moysklad_api::entities::Store;
//! use moysklad_api::params::filter_eq;
//!
//! let stores = RequestExecutor::path(api.client(), "/entity/store/")
//!     .params(&[filter_eq("name", "Main")])
//!     .list::<Store>()
//!     .await?;
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiClientError, HttpClient, HttpMethod, HttpRequest};
use crate::params::{render_query, ApiParam};
use crate::responses::ListEntity;

/// Builder for a single API call.
#[derive(Debug)]
pub struct RequestExecutor<'a> {
    client: &'a HttpClient,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl<'a> RequestExecutor<'a> {
    /// Starts a call against `path`, relative to the API base URL.
    #[must_use]
    pub fn path(client: &'a HttpClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Adds rendered API parameters to the query string.
    #[must_use]
    pub fn params(mut self, params: &[ApiParam]) -> Self {
        self.query.extend(render_query(params));
        self
    }

    /// Adds a raw query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Parse`] if the value cannot be serialized.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiClientError> {
        let value = serde_json::to_value(body).map_err(|source| ApiClientError::Parse {
            target: std::any::type_name::<B>(),
            source,
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// `GET` returning a single value.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`]; a body of the wrong shape gives
    /// [`ApiClientError::Parse`].
    pub async fn get<T: DeserializeOwned>(self) -> Result<T, ApiClientError> {
        let body = self.send(HttpMethod::Get).await?;
        parse(body)
    }

    /// `GET` returning a page of values.
    ///
    /// # Errors
    ///
    /// See [`RequestExecutor::get`].
    pub async fn list<T: DeserializeOwned>(self) -> Result<ListEntity<T>, ApiClientError> {
        let body = self.send(HttpMethod::Get).await?;
        parse(body)
    }

    /// `POST` returning a single value.
    ///
    /// # Errors
    ///
    /// See [`RequestExecutor::get`].
    pub async fn post<T: DeserializeOwned>(self) -> Result<T, ApiClientError> {
        let body = self.send(HttpMethod::Post).await?;
        parse(body)
    }

    /// `POST` returning a JSON array.
    ///
    /// # Errors
    ///
    /// See [`RequestExecutor::get`].
    pub async fn post_list<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiClientError> {
        let body = self.send(HttpMethod::Post).await?;
        parse(body)
    }

    /// `PUT` returning a single value. A body is required.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidRequest`] if no body was set,
    /// otherwise see [`RequestExecutor::get`].
    pub async fn put<T: DeserializeOwned>(self) -> Result<T, ApiClientError> {
        let body = self.send(HttpMethod::Put).await?;
        parse(body)
    }

    /// `DELETE`, discarding the response body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(self) -> Result<(), ApiClientError> {
        self.send(HttpMethod::Delete).await?;
        Ok(())
    }

    /// `POST` returning the raw response bytes.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request_bytes`].
    pub async fn post_bytes(self) -> Result<Vec<u8>, ApiClientError> {
        let client = self.client;
        let request = self.into_request(HttpMethod::Post)?;
        client.request_bytes(request).await
    }

    async fn send(self, method: HttpMethod) -> Result<Value, ApiClientError> {
        let client = self.client;
        let request = self.into_request(method)?;
        let response = client.request(request).await?;
        Ok(response.body)
    }

    fn into_request(self, method: HttpMethod) -> Result<HttpRequest, ApiClientError> {
        let mut builder = HttpRequest::builder(method, self.path).query(self.query);
        if let Some(body) = self.body {
            builder = builder.body(body);
        }
        Ok(builder.build()?)
    }
}

fn parse<T: DeserializeOwned>(body: Value) -> Result<T, ApiClientError> {
    serde_json::from_value(body).map_err(|source| ApiClientError::Parse {
        target: std::any::type_name::<T>(),
        source,
    })
}
