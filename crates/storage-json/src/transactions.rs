use std::path::{Path, PathBuf};

use salesfx_core::transactions::{Transaction, TransactionRepositoryTrait};
use salesfx_core::Result;

use crate::utils::read_json_list;

/// Transactions backed by a JSON array of `{"sku", "amount", "currency"}` objects.
#[derive(Debug, Clone)]
pub struct JsonTransactionRepository {
    path: PathBuf,
}

impl JsonTransactionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionRepositoryTrait for JsonTransactionRepository {
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        let transactions: Vec<Transaction> = read_json_list(&self.path)?;
        log::info!(
            "Loaded {} transactions from {}",
            transactions.len(),
            self.path.display()
        );
        Ok(transactions)
    }
}
