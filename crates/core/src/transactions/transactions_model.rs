use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::REPORTING_CURRENCY;

/// A single sale, in whatever currency it was booked in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub sku: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub currency: String,
}

impl Transaction {
    pub fn new(sku: impl Into<String>, amount: Decimal, currency: impl Into<String>) -> Self {
        Transaction {
            sku: sku.into(),
            amount,
            currency: currency.into(),
        }
    }

    /// Copy of this transaction restated in the reporting currency.
    pub(crate) fn in_reporting_currency(&self, amount: Decimal) -> Self {
        Transaction {
            sku: self.sku.clone(),
            amount,
            currency: REPORTING_CURRENCY.to_string(),
        }
    }
}

/// Converted transactions for one SKU together with their total.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkuSummary {
    pub sku: String,
    pub transactions: Vec<Transaction>,
    #[serde(
        rename = "totalAmountInEUR",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub total_amount_in_eur: Decimal,
}
