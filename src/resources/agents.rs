use crate::clients::ApiClientError;
use crate::endpoints::{
    write_back, ApiEndpoint, DeleteByIdEndpoint, GetByIdEndpoint, GetListEndpoint,
    MassDeleteEndpoint, MetadataAttributeEndpoint, MetadataEndpoint, PostEndpoint,
    PutByIdEndpoint,
};
use crate::entities::{AgentAccount, Counterparty, Employee, Organization};
use crate::params::ApiParam;
use crate::responses::{
    ListEntity, MetadataAttributeSharedResponse, MetadataAttributeSharedStatesResponse,
};
use crate::util::path_segment;

fn account_path(agent_id: &str, account_id: &str) -> String {
    format!(
        "{}/accounts/{}",
        path_segment(agent_id),
        path_segment(account_id)
    )
}

resource_client!(
    /// Legal entities of the account.
    OrganizationClient,
    "/entity/organization/"
);

impl GetListEndpoint<Organization> for OrganizationClient<'_> {}
impl GetByIdEndpoint<Organization> for OrganizationClient<'_> {}
impl PostEndpoint<Organization> for OrganizationClient<'_> {}
impl PutByIdEndpoint<Organization> for OrganizationClient<'_> {}
impl DeleteByIdEndpoint<Organization> for OrganizationClient<'_> {}
impl MassDeleteEndpoint<Organization> for OrganizationClient<'_> {}
impl MetadataEndpoint<MetadataAttributeSharedResponse> for OrganizationClient<'_> {}
impl MetadataAttributeEndpoint for OrganizationClient<'_> {}
impl AgentAccountsEndpoint for OrganizationClient<'_> {}

resource_client!(
    /// Customers and suppliers.
    CounterpartyClient,
    "/entity/counterparty/"
);

impl GetListEndpoint<Counterparty> for CounterpartyClient<'_> {}
impl GetByIdEndpoint<Counterparty> for CounterpartyClient<'_> {}
impl PostEndpoint<Counterparty> for CounterpartyClient<'_> {}
impl PutByIdEndpoint<Counterparty> for CounterpartyClient<'_> {}
impl DeleteByIdEndpoint<Counterparty> for CounterpartyClient<'_> {}
impl MassDeleteEndpoint<Counterparty> for CounterpartyClient<'_> {}
impl MetadataEndpoint<MetadataAttributeSharedStatesResponse> for CounterpartyClient<'_> {}
impl MetadataAttributeEndpoint for CounterpartyClient<'_> {}
impl AgentAccountsEndpoint for CounterpartyClient<'_> {}

resource_client!(EmployeeClient, "/entity/employee/");

impl GetListEndpoint<Employee> for EmployeeClient<'_> {}
impl GetByIdEndpoint<Employee> for EmployeeClient<'_> {}
impl PostEndpoint<Employee> for EmployeeClient<'_> {}
impl PutByIdEndpoint<Employee> for EmployeeClient<'_> {}
impl DeleteByIdEndpoint<Employee> for EmployeeClient<'_> {}
impl MassDeleteEndpoint<Employee> for EmployeeClient<'_> {}
impl MetadataEndpoint<MetadataAttributeSharedResponse> for EmployeeClient<'_> {}
impl MetadataAttributeEndpoint for EmployeeClient<'_> {}

/// `{path}{agent_id}/accounts`: bank accounts of an organization or
/// counterparty.
#[allow(async_fn_in_trait)]
pub trait AgentAccountsEndpoint: ApiEndpoint {
    /// Lists the bank accounts of an agent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn get_accounts(
        &self,
        agent_id: &str,
        params: &[ApiParam],
    ) -> Result<ListEntity<AgentAccount>, ApiClientError> {
        self.executor(&format!("{}/accounts", path_segment(agent_id)))
            .params(params)
            .list()
            .await
    }

    /// Fetches one bank account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn get_account(&self, agent_id: &str, account_id: &str) -> Result<AgentAccount, ApiClientError> {
        self.executor(&account_path(agent_id, account_id))
            .get()
            .await
    }

    /// Adds bank accounts to an agent; the created accounts are written
    /// back to `accounts` by index.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn create_accounts(
        &self,
        agent_id: &str,
        accounts: &mut [AgentAccount],
    ) -> Result<(), ApiClientError> {
        let created: Vec<AgentAccount> = self
            .executor(&format!("{}/accounts", path_segment(agent_id)))
            .body(&*accounts)?
            .post_list()
            .await?;
        write_back(accounts, created);
        Ok(())
    }

    /// Updates one bank account and replaces `account` with the server
    /// copy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] if the request fails.
    async fn update_account(
        &self,
        agent_id: &str,
        account_id: &str,
        account: &mut AgentAccount,
    ) -> Result<(), ApiClientError> {
        let updated: AgentAccount = self
            .executor(&account_path(agent_id, account_id))
            .body(&*account)?
            .put()
            .await?;
        *account = updated;
        Ok(())
    }
}
