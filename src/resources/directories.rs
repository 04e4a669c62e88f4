use crate::endpoints::{
    DeleteByIdEndpoint, GetByIdEndpoint, GetListEndpoint, MassDeleteEndpoint,
    MetadataAttributeEndpoint, MetadataEndpoint, PostEndpoint, PutByIdEndpoint,
};
use crate::entities::{Contract, Currency, Group, Product, Store};
use crate::responses::{MetadataAttributeSharedResponse, MetadataAttributeSharedStatesResponse};

resource_client!(
    /// Warehouses.
    StoreClient,
    "/entity/store/"
);

impl GetListEndpoint<Store> for StoreClient<'_> {}
impl GetByIdEndpoint<Store> for StoreClient<'_> {}
impl PostEndpoint<Store> for StoreClient<'_> {}
impl PutByIdEndpoint<Store> for StoreClient<'_> {}
impl DeleteByIdEndpoint<Store> for StoreClient<'_> {}
impl MassDeleteEndpoint<Store> for StoreClient<'_> {}
impl MetadataEndpoint<MetadataAttributeSharedResponse> for StoreClient<'_> {}
impl MetadataAttributeEndpoint for StoreClient<'_> {}

resource_client!(
    /// Departments. Read-only through this client.
    GroupClient,
    "/entity/group/"
);

impl GetListEndpoint<Group> for GroupClient<'_> {}
impl GetByIdEndpoint<Group> for GroupClient<'_> {}

resource_client!(CurrencyClient, "/entity/currency/");

impl GetListEndpoint<Currency> for CurrencyClient<'_> {}
impl GetByIdEndpoint<Currency> for CurrencyClient<'_> {}
impl PostEndpoint<Currency> for CurrencyClient<'_> {}
impl PutByIdEndpoint<Currency> for CurrencyClient<'_> {}
impl DeleteByIdEndpoint<Currency> for CurrencyClient<'_> {}
impl MassDeleteEndpoint<Currency> for CurrencyClient<'_> {}

resource_client!(ContractClient, "/entity/contract/");

impl GetListEndpoint<Contract> for ContractClient<'_> {}
impl GetByIdEndpoint<Contract> for ContractClient<'_> {}
impl PostEndpoint<Contract> for ContractClient<'_> {}
impl PutByIdEndpoint<Contract> for ContractClient<'_> {}
impl DeleteByIdEndpoint<Contract> for ContractClient<'_> {}
impl MassDeleteEndpoint<Contract> for ContractClient<'_> {}
impl MetadataEndpoint<MetadataAttributeSharedStatesResponse> for ContractClient<'_> {}
impl MetadataAttributeEndpoint for ContractClient<'_> {}

resource_client!(ProductClient, "/entity/product/");

impl GetListEndpoint<Product> for ProductClient<'_> {}
impl GetByIdEndpoint<Product> for ProductClient<'_> {}
impl PostEndpoint<Product> for ProductClient<'_> {}
impl PutByIdEndpoint<Product> for ProductClient<'_> {}
impl DeleteByIdEndpoint<Product> for ProductClient<'_> {}
impl MassDeleteEndpoint<Product> for ProductClient<'_> {}
impl MetadataEndpoint<MetadataAttributeSharedResponse> for ProductClient<'_> {}
impl MetadataAttributeEndpoint for ProductClient<'_> {}
