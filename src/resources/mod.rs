//! Resource clients, one per API collection.
//!
//! Clients are cheap borrowed views of a [`MoySkladApi`]; obtain them through
//! [`MoySkladApi::entity`] and [`MoySkladApi::context`]. The operations a
//! client supports are the capability traits from [`crate::endpoints`] it
//! implements, plus a few inherent methods for nested collections.
//!
//! | Client | Path |
//! |--------|------|
//! | [`OrganizationClient`] | `/entity/organization/` |
//! | [`CounterpartyClient`] | `/entity/counterparty/` |
//! | [`EmployeeClient`] | `/entity/employee/` |
//! | [`StoreClient`] | `/entity/store/` |
//! | [`GroupClient`] | `/entity/group/` |
//! | [`CurrencyClient`] | `/entity/currency/` |
//! | [`ContractClient`] | `/entity/contract/` |
//! | [`ProductClient`] | `/entity/product/` |
//! | [`CustomEntityClient`] | `/entity/customentity/` |
//! | [`CashOutClient`] | `/entity/cashout/` |
//! | [`LossClient`] | `/entity/loss/` |
//! | [`PricelistClient`] | `/entity/pricelist/` |
//! | [`RetailSalesReturnClient`] | `/entity/retailsalesreturn/` |
//! | [`PaymentInClient`] | `/entity/paymentin/` |
//! | [`PaymentOutClient`] | `/entity/paymentout/` |
//! | [`PrepaymentClient`] | `/entity/prepayment/` |
//! | [`CompanySettingsClient`] | `/context/companysettings/` |

use crate::api::MoySkladApi;

/// Defines a client struct bound to a fixed collection path.
macro_rules! resource_client {
    ($(#[$doc:meta])* $name:ident, $path:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            api: &'a $crate::api::MoySkladApi,
        }

        impl<'a> $name<'a> {
            pub(crate) const fn new(api: &'a $crate::api::MoySkladApi) -> Self {
                Self { api }
            }
        }

        impl $crate::endpoints::ApiEndpoint for $name<'_> {
            fn api(&self) -> &$crate::api::MoySkladApi {
                self.api
            }

            fn path(&self) -> &str {
                $path
            }
        }
    };
}

mod agents;
mod context;
mod custom_entity;
mod directories;
mod documents;

pub use agents::{AgentAccountsEndpoint, CounterpartyClient, EmployeeClient, OrganizationClient};
pub use context::CompanySettingsClient;
pub use custom_entity::CustomEntityClient;
pub use directories::{ContractClient, CurrencyClient, GroupClient, ProductClient, StoreClient};
pub use documents::{
    CashOutClient, LossClient, PaymentInClient, PaymentOutClient, PrepaymentClient,
    PricelistClient, RetailSalesReturnClient,
};

/// Clients for `/entity/...` collections.
#[derive(Debug, Clone, Copy)]
pub struct EntityClients<'a> {
    api: &'a MoySkladApi,
}

impl<'a> EntityClients<'a> {
    pub(crate) const fn new(api: &'a MoySkladApi) -> Self {
        Self { api }
    }

    #[must_use]
    pub const fn organization(&self) -> OrganizationClient<'a> {
        OrganizationClient::new(self.api)
    }

    #[must_use]
    pub const fn counterparty(&self) -> CounterpartyClient<'a> {
        CounterpartyClient::new(self.api)
    }

    #[must_use]
    pub const fn employee(&self) -> EmployeeClient<'a> {
        EmployeeClient::new(self.api)
    }

    #[must_use]
    pub const fn store(&self) -> StoreClient<'a> {
        StoreClient::new(self.api)
    }

    #[must_use]
    pub const fn group(&self) -> GroupClient<'a> {
        GroupClient::new(self.api)
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyClient<'a> {
        CurrencyClient::new(self.api)
    }

    #[must_use]
    pub const fn contract(&self) -> ContractClient<'a> {
        ContractClient::new(self.api)
    }

    #[must_use]
    pub const fn product(&self) -> ProductClient<'a> {
        ProductClient::new(self.api)
    }

    #[must_use]
    pub const fn custom_entity(&self) -> CustomEntityClient<'a> {
        CustomEntityClient::new(self.api)
    }

    #[must_use]
    pub const fn cash_out(&self) -> CashOutClient<'a> {
        CashOutClient::new(self.api)
    }

    #[must_use]
    pub const fn loss(&self) -> LossClient<'a> {
        LossClient::new(self.api)
    }

    #[must_use]
    pub const fn pricelist(&self) -> PricelistClient<'a> {
        PricelistClient::new(self.api)
    }

    #[must_use]
    pub const fn retail_sales_return(&self) -> RetailSalesReturnClient<'a> {
        RetailSalesReturnClient::new(self.api)
    }

    #[must_use]
    pub const fn payment_in(&self) -> PaymentInClient<'a> {
        PaymentInClient::new(self.api)
    }

    #[must_use]
    pub const fn payment_out(&self) -> PaymentOutClient<'a> {
        PaymentOutClient::new(self.api)
    }

    #[must_use]
    pub const fn prepayment(&self) -> PrepaymentClient<'a> {
        PrepaymentClient::new(self.api)
    }
}

/// Clients for `/context/...` resources.
#[derive(Debug, Clone, Copy)]
pub struct ContextClients<'a> {
    api: &'a MoySkladApi,
}

impl<'a> ContextClients<'a> {
    pub(crate) const fn new(api: &'a MoySkladApi) -> Self {
        Self { api }
    }

    #[must_use]
    pub const fn company_settings(&self) -> CompanySettingsClient<'a> {
        CompanySettingsClient::new(self.api)
    }
}
