//! Goods and services, and the polymorphic [`Assortment`] reference used
//! by document positions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::agents::Employee;
use crate::entities::company_settings::PriceType;
use crate::entities::directories::{Attribute, Currency, Group};
use crate::entities::{json_meta_type, Meta, MetaEntity};
use crate::util::date_format;

/// A sale price of a product for one price type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePrice {
    /// Price in kopecks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
}

/// A minimum or purchase price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinPrice {
    /// Price in kopecks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

/// A product card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Employee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    /// VAT rate in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_parent_vat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_vat: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<MinPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<MinPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_prices: Option<Vec<SalePrice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_serial_trackable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl_entity!(Product, "product", with_id);

/// A service card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<MinPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_prices: Option<Vec<SalePrice>>,
}

impl_entity!(Service, "service", with_id);

/// A bundle of products sold together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_prices: Option<Vec<SalePrice>>,
}

impl_entity!(Bundle, "bundle", with_id);

/// A characteristic value of a variant (e.g. size or color).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A variant (modification) of a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Vec<Characteristic>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_prices: Option<Vec<SalePrice>>,
}

impl_entity!(Variant, "variant", with_id);

/// The goods referenced by a document position.
///
/// Deserialization dispatches on `meta.type`; serialization writes the inner
/// entity unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Assortment {
    /// A product.
    Product(Product),
    /// A service.
    Service(Service),
    /// A bundle.
    Bundle(Bundle),
    /// A product variant.
    Variant(Variant),
}

impl Assortment {
    /// Returns the ID of the inner entity.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        use crate::entities::Entity;
        match self {
            Self::Product(e) => e.id(),
            Self::Service(e) => e.id(),
            Self::Bundle(e) => e.id(),
            Self::Variant(e) => e.id(),
        }
    }

    /// Returns the name of the inner entity.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Product(e) => e.name.as_deref(),
            Self::Service(e) => e.name.as_deref(),
            Self::Bundle(e) => e.name.as_deref(),
            Self::Variant(e) => e.name.as_deref(),
        }
    }
}

impl MetaEntity for Assortment {
    fn meta(&self) -> Option<&Meta> {
        match self {
            Self::Product(e) => e.meta.as_ref(),
            Self::Service(e) => e.meta.as_ref(),
            Self::Bundle(e) => e.meta.as_ref(),
            Self::Variant(e) => e.meta.as_ref(),
        }
    }
}

impl<'de> Deserialize<'de> for Assortment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let assortment = match json_meta_type(&value) {
            Some("product") => serde_json::from_value(value).map(Self::Product),
            Some("service") => serde_json::from_value(value).map(Self::Service),
            Some("bundle") => serde_json::from_value(value).map(Self::Bundle),
            Some("variant") => serde_json::from_value(value).map(Self::Variant),
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "unknown assortment type '{other}'"
                )))
            }
            None => return Err(D::Error::custom("assortment has no meta.type")),
        };
        assortment.map_err(D::Error::custom)
    }
}

impl From<Product> for Assortment {
    fn from(value: Product) -> Self {
        Self::Product(value)
    }
}

impl From<Service> for Assortment {
    fn from(value: Service) -> Self {
        Self::Service(value)
    }
}

impl From<Bundle> for Assortment {
    fn from(value: Bundle) -> Self {
        Self::Bundle(value)
    }
}

impl From<Variant> for Assortment {
    fn from(value: Variant) -> Self {
        Self::Variant(value)
    }
}
