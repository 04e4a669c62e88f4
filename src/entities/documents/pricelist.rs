use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::agents::{Employee, Organization};
use crate::entities::company_settings::PriceType;
use crate::entities::directories::{Attribute, Group, State};
use crate::entities::products::Assortment;
use crate::entities::Meta;
use crate::responses::ListEntity;
use crate::util::date_format;

/// A price list column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricelistColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_discount: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
}

/// A price in a row, tied to a column by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricelistCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
}

impl PricelistCell {
    #[must_use]
    pub fn new(column: impl Into<String>, sum: f64) -> Self {
        Self {
            column: Some(column.into()),
            sum: Some(sum),
        }
    }
}

/// A price list row: one item of the assortment and its prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricelistRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assortment: Option<Assortment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<PricelistCell>>,
}

impl_entity!(PricelistRow, "pricelistrow");

impl PricelistRow {
    #[must_use]
    pub fn new(assortment: impl Into<Assortment>, cells: Vec<PricelistCell>) -> Self {
        Self {
            assortment: Some(assortment.into()),
            cells: Some(cells),
            ..Self::default()
        }
    }
}

/// A price list document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricelist {
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
    pub external_code: Option<String>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub moment: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<PricelistColumn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<ListEntity<PricelistRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl_entity!(Pricelist, "pricelist", with_id);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Product;
    use serde_json::json;

    #[test]
    fn test_positions_serialize_as_plain_array() {
        let pricelist = Pricelist {
            columns: Some(vec![PricelistColumn {
                name: Some("Retail".to_string()),
                percentage_discount: Some(0),
                price_type: None,
            }]),
            positions: Some(ListEntity::from_rows(vec![PricelistRow::new(
                Product::with_id("p1"),
                vec![PricelistCell::new("Retail", 1000.0)],
            )])),
            ..Pricelist::default()
        };

        let value = serde_json::to_value(&pricelist).unwrap();
        let rows = value["positions"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["cells"][0]["column"], "Retail");
        assert_eq!(rows[0]["assortment"]["meta"]["type"], "product");
    }

    #[test]
    fn test_positions_deserialize_from_page() {
        let pricelist: Pricelist = serde_json::from_value(json!({
            "id": "pl1",
            "positions": {
                "meta": {
                    "href": "https://api.moysklad.ru/api/remap/1.2/entity/pricelist/pl1/positions",
                    "type": "pricelistrow",
                    "size": 3,
                    "limit": 1000,
                    "offset": 0
                },
                "rows": []
            }
        }))
        .unwrap();

        let positions = pricelist.positions.unwrap();
        assert_eq!(positions.total(), Some(3));
        assert!(positions.rows.is_empty());
    }
}
