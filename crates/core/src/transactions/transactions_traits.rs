use super::transactions_model::{SkuSummary, Transaction};
use crate::errors::Result;
use rust_decimal::Decimal;

/// Trait defining the contract for loading transactions.
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Returns every transaction in load order.
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for transaction aggregation.
pub trait TransactionServiceTrait: Send + Sync {
    /// All transactions, unconverted, in load order.
    fn get_transactions(&self) -> Vec<Transaction>;

    /// Transactions for `sku`, each restated in EUR. Empty when none match.
    fn get_transactions_by_sku(&self, sku: &str) -> Result<Vec<Transaction>>;

    /// Sum of the EUR amounts for `sku`, rounded half-to-even to 2 dp.
    fn get_total_in_eur_by_sku(&self, sku: &str) -> Result<Decimal>;

    /// Converted transactions and their total from a single pass.
    fn get_sku_summary(&self, sku: &str) -> Result<SkuSummary>;
}
