use serde::{Deserialize, Serialize};

use crate::entities::products::Assortment;
use crate::entities::Meta;

/// A line item of a document.
///
/// The same shape is used by losses, retail returns and prepayments; fields
/// a document type does not support are simply absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit price in kopecks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Discount in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// VAT rate in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assortment: Option<Assortment>,
    /// Write-off reason (losses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Serial numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub things: Option<Vec<String>>,
}

impl_entity!(DocumentPosition, "position");

impl DocumentPosition {
    /// Creates a position for the given goods.
    #[must_use]
    pub fn new(assortment: impl Into<Assortment>, quantity: f64, price: f64) -> Self {
        Self {
            assortment: Some(assortment.into()),
            quantity: Some(quantity),
            price: Some(price),
            ..Self::default()
        }
    }
}
