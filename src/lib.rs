//! # MoySklad API Rust Client
//!
//! A typed async client for the MoySklad JSON API (remap 1.2), covering
//! documents, agents, products, dictionaries and account context.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for credentials and the API host
//! - Entity types mirroring the remote schema, in [`entities`]
//! - Query parameter builders (filter, search, order, expand, paging) in
//!   [`params`]
//! - One client per resource, composed from capability traits in
//!   [`endpoints`]
//! - An async HTTP layer with structured API errors and rate limit headers
//!
//! ## Quick Start
//!
//! ```rust
//! use moysklad_api::{ApiConfig, Credentials, Login, MoySkladApi, Password};
//!
//! let config = ApiConfig::builder()
//!     .credentials(Credentials::basic(
//!         Login::new("admin@company").unwrap(),
//!         Password::new("secret").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let api = MoySkladApi::new(config).unwrap();
//! ```
//!
//! ## Working With Entities
//!
//! Capability traits are brought into scope with the prelude. Create and
//! update calls take `&mut` and replace the value with the server copy.
//!
//! ```rust,ignore
//! use moysklad_api::prelude::*;
//! use moysklad_api::entities::Store;
//! use moysklad_api::params::filter_eq;
//!
//! let mut store = Store {
//!     name: Some("store_abc123".to_string()),
//!     ..Store::default()
//! };
//! api.entity().store().create(&mut store).await?;
//!
//! let found = api
//!     .entity()
//!     .store()
//!     .get_list(&[filter_eq("name", "store_abc123")])
//!     .await?;
//! assert_eq!(found.rows.len(), 1);
//! ```
//!
//! ## Paging
//!
//! ```rust,ignore
//! use moysklad_api::params::{limit, offset};
//!
//! let mut page = api.entity().product().get_list(&[limit(100)]).await?;
//! while page.has_next_page() {
//!     let next = page.next_offset();
//!     page = api
//!         .entity()
//!         .product()
//!         .get_list(&[limit(100), offset(next)])
//!         .await?;
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: [`MoySkladApi`], [`HttpClient`] and [`ApiConfig`] are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No hidden traffic**: nothing is retried, cached or batched

pub mod api;
pub mod clients;
pub mod config;
pub mod endpoints;
pub mod entities;
pub mod error;
pub mod params;
pub mod resources;
pub mod responses;
pub mod util;

pub use api::MoySkladApi;
pub use config::{AccessToken, ApiConfig, ApiConfigBuilder, Credentials, HostUrl, Login, Password};
pub use error::ConfigError;

pub use clients::{
    ApiClientError, ApiError, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, RateLimitInfo,
};

/// Capability traits, for `use moysklad_api::prelude::*`.
pub mod prelude {
    pub use crate::endpoints::{
        ApiEndpoint, DeleteByIdEndpoint, DocumentNewEndpoint, DocumentPositionsEndpoint,
        ExportEndpoint, GetByIdEndpoint, GetListEndpoint, MassDeleteEndpoint,
        MetadataAttributeEndpoint, MetadataEndpoint, PostEndpoint, PutByIdEndpoint,
    };
    pub use crate::entities::{Entity, MetaEntity};
    pub use crate::resources::AgentAccountsEndpoint;
}
