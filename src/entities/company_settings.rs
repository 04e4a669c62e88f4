//! Account-wide settings available under `/context/companysettings`.

use serde::{Deserialize, Serialize};

use crate::entities::directories::Currency;
use crate::entities::{Meta, MetaEntity};

/// A price type configured for the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
}

impl MetaEntity for PriceType {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Company settings of the account.
///
/// There is exactly one settings object per account, so it has no ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Accounting currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_types: Option<Vec<PriceType>>,
    /// How discounts combine: `bySum` or `byPriority`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_operation_numbering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_shipping_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_min_price: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_recycle_bin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_company_address: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
}

impl MetaEntity for CompanySettings {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}
