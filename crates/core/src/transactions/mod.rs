//! Transactions module - sales transaction model, aggregation service, and traits.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{SkuSummary, Transaction};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
