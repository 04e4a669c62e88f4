//! Bank payments and retail prepayments.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::agents::{Agent, AgentAccount, Employee, Organization};
use crate::entities::directories::{
    Attribute, Contract, ExpenseItem, Group, Project, Rate, State,
};
use crate::entities::documents::DocumentPosition;
use crate::entities::{Meta, MetaRef};
use crate::responses::ListEntity;
use crate::util::date_format;

/// Taxation system applied to a retail operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxSystem {
    GeneralTaxSystem,
    SimplifiedTaxSystemIncome,
    SimplifiedTaxSystemIncomeOutcome,
    UnifiedAgriculturalTax,
    PresumptiveTaxSystem,
    PatentBased,
    TaxSystemSameAsGroup,
}

/// An incoming bank payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIn {
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
    pub sum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_account: Option<AgentAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_account: Option<AgentAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<f64>,
    /// Date of the payer's payment order.
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub incoming_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facture_out: Option<MetaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<MetaRef>>,
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
    pub attributes: Option<Vec<Attribute>>,
}

impl_entity!(PaymentIn, "paymentin", with_id);

/// An outgoing bank payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOut {
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
    pub sum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_account: Option<AgentAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_account: Option<AgentAccount>,
    /// Required by the server for outgoing payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_item: Option<ExpenseItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facture_in: Option<MetaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<MetaRef>>,
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
    pub attributes: Option<Vec<Attribute>>,
}

impl_entity!(PaymentOut, "paymentout", with_id);

/// A prepayment accepted at a retail point.
///
/// Prepayments are created by the point of sale; the API allows reading,
/// editing and deleting them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prepayment {
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
    pub sum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_store: Option<MetaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_shift: Option<MetaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_order: Option<MetaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Vec<MetaRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_cash_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_system: Option<TaxSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<ListEntity<DocumentPosition>>,
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
    pub attributes: Option<Vec<Attribute>>,
}

impl_entity!(Prepayment, "prepayment", with_id);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;
    use serde_json::json;

    #[test]
    fn test_tax_system_wire_names() {
        assert_eq!(
            serde_json::to_value(TaxSystem::SimplifiedTaxSystemIncomeOutcome).unwrap(),
            json!("SIMPLIFIED_TAX_SYSTEM_INCOME_OUTCOME")
        );
        let parsed: TaxSystem = serde_json::from_value(json!("PATENT_BASED")).unwrap();
        assert_eq!(parsed, TaxSystem::PatentBased);
    }

    #[test]
    fn test_payment_in_with_counterparty_agent() {
        let payment: PaymentIn = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/paymentin/p1",
                "type": "paymentin"
            },
            "id": "p1",
            "sum": 150000.0,
            "incomingDate": "2024-03-01 09:00:00.000",
            "agent": {
                "meta": {
                    "href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/c1",
                    "type": "counterparty"
                }
            }
        }))
        .unwrap();

        assert_eq!(payment.id(), Some("p1"));
        assert!(matches!(payment.agent, Some(Agent::Counterparty(_))));
        assert_eq!(payment.agent.unwrap().id(), Some("c1"));
        assert_eq!(
            payment.incoming_date.unwrap().to_string(),
            "2024-03-01 09:00:00"
        );
    }

    #[test]
    fn test_prepayment_serializes_without_empty_fields() {
        let prepayment = Prepayment {
            cash_sum: Some(100.0),
            tax_system: Some(TaxSystem::GeneralTaxSystem),
            ..Prepayment::default()
        };
        assert_eq!(
            serde_json::to_value(&prepayment).unwrap(),
            json!({"cashSum": 100.0, "taxSystem": "GENERAL_TAX_SYSTEM"})
        );
    }
}
