use super::fx_model::Rate;
use crate::errors::Result;
use rust_decimal::Decimal;

/// Trait defining the contract for loading the rate table.
pub trait FxRepositoryTrait: Send + Sync {
    /// Returns every rate in load order. Duplicates are kept.
    fn get_rates(&self) -> Result<Vec<Rate>>;
}

/// Trait defining the contract for FX service operations.
pub trait FxServiceTrait: Send + Sync {
    fn get_rates(&self) -> Vec<Rate>;

    /// Scalar factor such that `1 from == factor to`. Never rounded.
    fn find_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal>;

    /// Converts `amount` into the reporting currency, rounded to 2 dp.
    fn convert(&self, amount: Decimal, from_currency: &str) -> Result<Decimal>;
}
