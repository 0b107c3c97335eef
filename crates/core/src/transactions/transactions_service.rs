use std::sync::Arc;

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::utils::round_half_even;

use super::transactions_model::{SkuSummary, Transaction};
use super::transactions_traits::TransactionServiceTrait;

/// Aggregates sales per SKU in the reporting currency.
///
/// Holds the transactions loaded at startup and never mutates them.
/// Conversion failures from the FX service are returned as-is.
pub struct TransactionService {
    transactions: Vec<Transaction>,
    fx_service: Arc<dyn FxServiceTrait>,
}

impl TransactionService {
    pub fn new(transactions: Vec<Transaction>, fx_service: Arc<dyn FxServiceTrait>) -> Self {
        TransactionService {
            transactions,
            fx_service,
        }
    }

    fn matching<'a>(&'a self, sku: &'a str) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions.iter().filter(move |t| t.sku == sku)
    }

    fn convert_transaction(&self, transaction: &Transaction) -> Result<Transaction> {
        let converted = self
            .fx_service
            .convert(transaction.amount, &transaction.currency)?;
        Ok(transaction.in_reporting_currency(round_half_even(
            converted,
            DISPLAY_DECIMAL_PRECISION,
        )))
    }

    fn total(transactions: &[Transaction]) -> Decimal {
        let sum: Decimal = transactions.iter().map(|t| t.amount).sum();
        round_half_even(sum, DISPLAY_DECIMAL_PRECISION)
    }
}

impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    fn get_transactions_by_sku(&self, sku: &str) -> Result<Vec<Transaction>> {
        self.matching(sku)
            .map(|t| self.convert_transaction(t))
            .collect()
    }

    fn get_total_in_eur_by_sku(&self, sku: &str) -> Result<Decimal> {
        let converted = self.get_transactions_by_sku(sku)?;
        Ok(Self::total(&converted))
    }

    fn get_sku_summary(&self, sku: &str) -> Result<SkuSummary> {
        let transactions = self.get_transactions_by_sku(sku)?;
        let total_amount_in_eur = Self::total(&transactions);
        Ok(SkuSummary {
            sku: sku.to_string(),
            transactions,
            total_amount_in_eur,
        })
    }
}
