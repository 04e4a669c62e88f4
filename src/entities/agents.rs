//! Counterparties, own legal entities, employees and their bank accounts.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::directories::{Attribute, Group, State};
use crate::entities::{json_meta_type, Meta, MetaEntity};
use crate::responses::ListEntity;
use crate::util::date_format;

/// Legal form of an organization or counterparty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    /// Legal entity.
    Legal,
    /// Individual entrepreneur.
    Entrepreneur,
    /// Private person.
    Individual,
}

/// A postal address in structured form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    /// Free-form addition to the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A bank account of an organization or counterparty.
///
/// Accounts live under `{agent}/accounts` and are managed through
/// [`AgentAccountsEndpoint`](crate::resources::AgentAccountsEndpoint).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Whether this is the agent's main account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correspondent_account: Option<String>,
    /// Bank identification code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<NaiveDateTime>,
}

impl_entity!(AgentAccount, "account");

/// An own legal entity of the account.
///
/// # Example
///
/// ```rust
/// use moysklad_api::entities::{CompanyType, Organization};
///
/// let organization = Organization {
///     name: Some("ООО Ромашка".to_string()),
///     company_type: Some(CompanyType::Legal),
///     ..Organization::default()
/// };
///
/// let json = serde_json::to_value(&organization).unwrap();
/// assert_eq!(json["companyType"], "legal");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
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
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_address_full: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_address_full: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ogrn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ogrnip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub okpo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chief_accountant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_vat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_egais_enable: Option<bool>,
    /// Bank accounts; only `meta` is returned unless expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<ListEntity<AgentAccount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl_entity!(Organization, "organization", with_id);

/// A customer or supplier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
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
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_address_full: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_address_full: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ogrn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub okpo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    /// Total sales to this counterparty, in kopecks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<ListEntity<AgentAccount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl_entity!(Counterparty, "counterparty", with_id);

/// A user of the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
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
    /// Display name, derived from the name parts.
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
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<NaiveDateTime>,
    /// Login of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_fio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl_entity!(Employee, "employee", with_id);

/// The other party of a document: a counterparty, an own organization or
/// an employee.
///
/// Deserialization dispatches on `meta.type`; serialization writes the inner
/// entity unchanged.
///
/// ```rust
/// use moysklad_api::entities::Agent;
///
/// let agent: Agent = serde_json::from_str(
///     r#"{"meta":{"href":"https://api.moysklad.ru/api/remap/1.2/entity/employee/1","type":"employee"}}"#,
/// ).unwrap();
/// assert!(matches!(agent, Agent::Employee(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Agent {
    /// A customer or supplier.
    Counterparty(Counterparty),
    /// An own legal entity.
    Organization(Organization),
    /// A user of the account.
    Employee(Employee),
}

impl Agent {
    /// Returns the ID of the inner entity.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        use crate::entities::Entity;
        match self {
            Self::Counterparty(e) => e.id(),
            Self::Organization(e) => e.id(),
            Self::Employee(e) => e.id(),
        }
    }
}

impl MetaEntity for Agent {
    fn meta(&self) -> Option<&Meta> {
        match self {
            Self::Counterparty(e) => e.meta.as_ref(),
            Self::Organization(e) => e.meta.as_ref(),
            Self::Employee(e) => e.meta.as_ref(),
        }
    }
}

impl<'de> Deserialize<'de> for Agent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let agent = match json_meta_type(&value) {
            Some("counterparty") => serde_json::from_value(value).map(Self::Counterparty),
            Some("organization") => serde_json::from_value(value).map(Self::Organization),
            Some("employee") => serde_json::from_value(value).map(Self::Employee),
            Some(other) => return Err(D::Error::custom(format!("unknown agent type '{other}'"))),
            None => return Err(D::Error::custom("agent has no meta.type")),
        };
        agent.map_err(D::Error::custom)
    }
}

impl From<Counterparty> for Agent {
    fn from(value: Counterparty) -> Self {
        Self::Counterparty(value)
    }
}

impl From<Organization> for Agent {
    fn from(value: Organization) -> Self {
        Self::Organization(value)
    }
}

impl From<Employee> for Agent {
    fn from(value: Employee) -> Self {
        Self::Employee(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;
    use serde_json::json;

    #[test]
    fn test_agent_dispatches_on_meta_type() {
        let agent: Agent = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/c1",
                "type": "counterparty"
            },
            "name": "Buyer"
        }))
        .unwrap();

        match &agent {
            Agent::Counterparty(c) => assert_eq!(c.name.as_deref(), Some("Buyer")),
            other => panic!("unexpected agent: {other:?}"),
        }
        assert_eq!(agent.id(), Some("c1"));
        assert_eq!(agent.meta_type(), Some("counterparty"));
    }

    #[test]
    fn test_agent_rejects_unknown_type() {
        let result: Result<Agent, _> =
            serde_json::from_value(json!({"meta": {"href": "x", "type": "store"}}));
        assert!(result.unwrap_err().to_string().contains("unknown agent type 'store'"));

        let result: Result<Agent, _> = serde_json::from_value(json!({"name": "no meta"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_agent_serializes_inner_entity() {
        let agent = Agent::from(Organization::with_id("o1"));
        let json = serde_json::to_value(&agent).unwrap();
        assert_eq!(json["meta"]["type"], "organization");
        assert_eq!(json["id"], "o1");
    }

    #[test]
    fn test_organization_parses_expanded_accounts() {
        let organization: Organization = serde_json::from_value(json!({
            "meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/organization/o1", "type": "organization"},
            "id": "o1",
            "name": "Own",
            "created": "2024-01-15 12:00:00.000",
            "accounts": {
                "meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/organization/o1/accounts", "type": "account", "size": 1, "limit": 1000, "offset": 0},
                "rows": [{"id": "a1", "accountNumber": "40702810000000000001", "isDefault": true}]
            }
        }))
        .unwrap();

        let accounts = organization.accounts.unwrap();
        assert_eq!(accounts.total(), Some(1));
        assert_eq!(accounts.rows[0].account_number.as_deref(), Some("40702810000000000001"));
        assert_eq!(accounts.rows[0].id(), Some("a1"));
    }

    #[test]
    fn test_company_type_serialization() {
        assert_eq!(
            serde_json::to_value(CompanyType::Entrepreneur).unwrap(),
            json!("entrepreneur")
        );
    }
}
