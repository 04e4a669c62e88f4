//! Entity model types mirroring the remote schema.
//!
//! Every record the API returns carries a [`Meta`] describing its canonical
//! href and type. Types that are addressable this way implement
//! [`MetaEntity`]; records with their own ID also implement [`Entity`].
//!
//! All fields are optional: a value can be built empty with `Default`,
//! filled in by the caller, and sent to the server. Create and update calls
//! replace the caller's value with the server representation.
//!
//! Equality and hashing of entities compare the ID only, so a reference
//! built with `with_id` equals the fully loaded record.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::entities::{Entity, Store};
//!
//! let reference = Store::with_id("7944ef04-f831-11e5-7a69-971500188b19");
//! let loaded = Store {
//!     id: Some("7944ef04-f831-11e5-7a69-971500188b19".to_string()),
//!     name: Some("Main".to_string()),
//!     ..Store::default()
//! };
//!
//! assert_eq!(reference, loaded);
//! assert_eq!(Store::ENTITY_TYPE, "store");
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::util::{make_href, DEFAULT_BASE_URL};

/// Implements [`MetaEntity`], [`Entity`] and ID-based equality for a struct
/// with `meta: Option<Meta>` and `id: Option<String>` fields.
///
/// The `with_id` form also generates a `with_id` constructor building the
/// canonical reference.
macro_rules! impl_entity {
    ($ty:ident, $entity_type:literal) => {
        impl $crate::entities::MetaEntity for $ty {
            fn meta(&self) -> Option<&$crate::entities::Meta> {
                self.meta.as_ref()
            }
        }

        impl $crate::entities::Entity for $ty {
            const ENTITY_TYPE: &'static str = $entity_type;

            fn id(&self) -> Option<&str> {
                self.id
                    .as_deref()
                    .or_else(|| self.meta.as_ref().and_then($crate::entities::Meta::id))
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::entities::Entity::id(self) == $crate::entities::Entity::id(other)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::entities::Entity::id(self).hash(state);
            }
        }
    };
    ($ty:ident, $entity_type:literal, with_id) => {
        impl_entity!($ty, $entity_type);

        impl $ty {
            #[doc = concat!("Creates a reference to an existing `", $entity_type, "` by ID.")]
            #[must_use]
            pub fn with_id(id: impl Into<String>) -> Self {
                let id = id.into();
                Self {
                    meta: Some($crate::entities::Meta::for_entity($entity_type, &id)),
                    id: Some(id),
                    ..Self::default()
                }
            }
        }
    };
}

mod agents;
mod company_settings;
mod custom_entity;
mod directories;
pub mod documents;
mod meta;
mod products;

pub use agents::{Address, Agent, AgentAccount, CompanyType, Counterparty, Employee, Organization};
pub use company_settings::{CompanySettings, PriceType};
pub use custom_entity::{CustomEntity, CustomEntityElement};
pub use directories::{
    Attribute, Contract, Currency, ExpenseItem, Group, Project, Rate, State, StateType, Store,
};
pub use documents::{
    CashOut, DocumentPosition, Loss, PaymentIn, PaymentOut, Prepayment, Pricelist,
    PricelistCell, PricelistColumn, PricelistRow, RetailSalesReturn, TaxSystem,
};
pub use meta::{Meta, MetaRef, JSON_MEDIA_TYPE};
pub use products::{
    Assortment, Bundle, Characteristic, MinPrice, Product, SalePrice, Service, Variant,
};

/// A value addressable via a meta href.
pub trait MetaEntity {
    /// Returns the value's meta, if it has one.
    fn meta(&self) -> Option<&Meta>;

    /// Returns the entity type recorded in the meta.
    fn meta_type(&self) -> Option<&str> {
        self.meta()
            .map(|m| m.entity_type.as_str())
            .filter(|t| !t.is_empty())
    }
}

/// A record with its own ID.
pub trait Entity: MetaEntity + Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The API name of the entity type (e.g. `organization`).
    const ENTITY_TYPE: &'static str;

    /// Returns the ID, falling back to the one encoded in the meta href.
    fn id(&self) -> Option<&str>;

    /// Returns the canonical href: the meta href if present, otherwise one
    /// built from the ID.
    fn href(&self) -> Option<String> {
        self.meta()
            .map(|m| m.href.clone())
            .filter(|href| !href.is_empty())
            .or_else(|| {
                self.id()
                    .map(|id| make_href(DEFAULT_BASE_URL, Self::ENTITY_TYPE, id))
            })
    }

    /// Returns a meta suitable for referencing this entity in a request.
    fn reference_meta(&self) -> Option<Meta> {
        match self.meta() {
            Some(meta) if !meta.href.is_empty() => Some(meta.clone()),
            _ => self.href().map(|href| Meta::new(href, Self::ENTITY_TYPE)),
        }
    }
}

/// Reads `meta.type` from a raw JSON value.
pub(crate) fn json_meta_type(value: &serde_json::Value) -> Option<&str> {
    value
        .get("meta")
        .and_then(|meta| meta.get("type"))
        .and_then(serde_json::Value::as_str)
}
