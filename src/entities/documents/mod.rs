//! Document entities.
//!
//! Documents share a common header (number, moment, organization, state,
//! posting flag). Documents with goods carry their line items in
//! `positions`, which the server returns as a collapsed page unless
//! expanded; the full list is available through the positions endpoints.

mod cash_out;
mod loss;
mod payments;
mod position;
mod pricelist;
mod retail_sales_return;

pub use cash_out::CashOut;
pub use loss::Loss;
pub use payments::{PaymentIn, PaymentOut, Prepayment, TaxSystem};
pub use position::DocumentPosition;
pub use pricelist::{Pricelist, PricelistCell, PricelistColumn, PricelistRow};
pub use retail_sales_return::RetailSalesReturn;
