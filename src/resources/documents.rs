use crate::endpoints::{
    DeleteByIdEndpoint, DocumentNewEndpoint, DocumentPositionsEndpoint, ExportEndpoint,
    GetByIdEndpoint, GetListEndpoint, MassDeleteEndpoint, MetadataAttributeEndpoint,
    MetadataEndpoint, PostEndpoint, PutByIdEndpoint,
};
use crate::entities::{
    CashOut, DocumentPosition, Loss, PaymentIn, PaymentOut, Prepayment, Pricelist, PricelistRow,
    RetailSalesReturn,
};
use crate::responses::MetadataAttributeSharedStatesResponse;

type DocumentMetadata = MetadataAttributeSharedStatesResponse;

resource_client!(
    /// Outgoing cash orders.
    CashOutClient,
    "/entity/cashout/"
);

impl GetListEndpoint<CashOut> for CashOutClient<'_> {}
impl GetByIdEndpoint<CashOut> for CashOutClient<'_> {}
impl PostEndpoint<CashOut> for CashOutClient<'_> {}
impl PutByIdEndpoint<CashOut> for CashOutClient<'_> {}
impl DeleteByIdEndpoint<CashOut> for CashOutClient<'_> {}
impl MassDeleteEndpoint<CashOut> for CashOutClient<'_> {}
impl MetadataEndpoint<DocumentMetadata> for CashOutClient<'_> {}
impl MetadataAttributeEndpoint for CashOutClient<'_> {}
impl DocumentNewEndpoint<CashOut> for CashOutClient<'_> {}
impl ExportEndpoint for CashOutClient<'_> {}

resource_client!(
    /// Write-offs.
    LossClient,
    "/entity/loss/"
);

impl GetListEndpoint<Loss> for LossClient<'_> {}
impl GetByIdEndpoint<Loss> for LossClient<'_> {}
impl PostEndpoint<Loss> for LossClient<'_> {}
impl PutByIdEndpoint<Loss> for LossClient<'_> {}
impl DeleteByIdEndpoint<Loss> for LossClient<'_> {}
impl MassDeleteEndpoint<Loss> for LossClient<'_> {}
impl MetadataEndpoint<DocumentMetadata> for LossClient<'_> {}
impl MetadataAttributeEndpoint for LossClient<'_> {}
impl DocumentNewEndpoint<Loss> for LossClient<'_> {}
impl DocumentPositionsEndpoint<DocumentPosition> for LossClient<'_> {}
impl ExportEndpoint for LossClient<'_> {}

resource_client!(
    /// Price lists. Rows are managed as positions.
    PricelistClient,
    "/entity/pricelist/"
);

impl GetListEndpoint<Pricelist> for PricelistClient<'_> {}
impl GetByIdEndpoint<Pricelist> for PricelistClient<'_> {}
impl PostEndpoint<Pricelist> for PricelistClient<'_> {}
impl PutByIdEndpoint<Pricelist> for PricelistClient<'_> {}
impl DeleteByIdEndpoint<Pricelist> for PricelistClient<'_> {}
impl MetadataEndpoint<DocumentMetadata> for PricelistClient<'_> {}
impl MetadataAttributeEndpoint for PricelistClient<'_> {}
impl DocumentPositionsEndpoint<PricelistRow> for PricelistClient<'_> {}
impl ExportEndpoint for PricelistClient<'_> {}

resource_client!(RetailSalesReturnClient, "/entity/retailsalesreturn/");

impl GetListEndpoint<RetailSalesReturn> for RetailSalesReturnClient<'_> {}
impl GetByIdEndpoint<RetailSalesReturn> for RetailSalesReturnClient<'_> {}
impl PostEndpoint<RetailSalesReturn> for RetailSalesReturnClient<'_> {}
impl PutByIdEndpoint<RetailSalesReturn> for RetailSalesReturnClient<'_> {}
impl DeleteByIdEndpoint<RetailSalesReturn> for RetailSalesReturnClient<'_> {}
impl MetadataEndpoint<DocumentMetadata> for RetailSalesReturnClient<'_> {}
impl MetadataAttributeEndpoint for RetailSalesReturnClient<'_> {}
impl DocumentPositionsEndpoint<DocumentPosition> for RetailSalesReturnClient<'_> {}
impl ExportEndpoint for RetailSalesReturnClient<'_> {}

resource_client!(PaymentInClient, "/entity/paymentin/");

impl GetListEndpoint<PaymentIn> for PaymentInClient<'_> {}
impl GetByIdEndpoint<PaymentIn> for PaymentInClient<'_> {}
impl PostEndpoint<PaymentIn> for PaymentInClient<'_> {}
impl PutByIdEndpoint<PaymentIn> for PaymentInClient<'_> {}
impl DeleteByIdEndpoint<PaymentIn> for PaymentInClient<'_> {}
impl MassDeleteEndpoint<PaymentIn> for PaymentInClient<'_> {}
impl MetadataEndpoint<DocumentMetadata> for PaymentInClient<'_> {}
impl MetadataAttributeEndpoint for PaymentInClient<'_> {}
impl DocumentNewEndpoint<PaymentIn> for PaymentInClient<'_> {}
impl ExportEndpoint for PaymentInClient<'_> {}

resource_client!(PaymentOutClient, "/entity/paymentout/");

impl GetListEndpoint<PaymentOut> for PaymentOutClient<'_> {}
impl GetByIdEndpoint<PaymentOut> for PaymentOutClient<'_> {}
impl PostEndpoint<PaymentOut> for PaymentOutClient<'_> {}
impl PutByIdEndpoint<PaymentOut> for PaymentOutClient<'_> {}
impl DeleteByIdEndpoint<PaymentOut> for PaymentOutClient<'_> {}
impl MassDeleteEndpoint<PaymentOut> for PaymentOutClient<'_> {}
impl MetadataEndpoint<DocumentMetadata> for PaymentOutClient<'_> {}
impl MetadataAttributeEndpoint for PaymentOutClient<'_> {}
impl DocumentNewEndpoint<PaymentOut> for PaymentOutClient<'_> {}
impl ExportEndpoint for PaymentOutClient<'_> {}

resource_client!(
    /// Retail prepayments. They are created at the point of sale, so there
    /// is no create operation.
    PrepaymentClient,
    "/entity/prepayment/"
);

impl GetListEndpoint<Prepayment> for PrepaymentClient<'_> {}
impl GetByIdEndpoint<Prepayment> for PrepaymentClient<'_> {}
impl PutByIdEndpoint<Prepayment> for PrepaymentClient<'_> {}
impl DeleteByIdEndpoint<Prepayment> for PrepaymentClient<'_> {}
impl MetadataEndpoint<DocumentMetadata> for PrepaymentClient<'_> {}
impl MetadataAttributeEndpoint for PrepaymentClient<'_> {}
impl DocumentPositionsEndpoint<DocumentPosition> for PrepaymentClient<'_> {}
impl ExportEndpoint for PrepaymentClient<'_> {}
