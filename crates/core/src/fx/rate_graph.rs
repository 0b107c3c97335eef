use super::fx_errors::FxError;
use super::fx_model::Rate;
use super::fx_traits::FxServiceTrait;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, REPORTING_CURRENCY};
use crate::errors::Result;
use crate::utils::round_half_even;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Resolves conversion factors over a sparse table of pairwise rates.
///
/// The search is depth-first in table load order and stops at the first
/// path it finds. It is not shortest-path: with redundant or conflicting
/// rates, reordering the table can change the resolved factor.
///
/// The graph is immutable after construction, so it can be shared across
/// threads without locking. Each lookup carries its own visited set.
pub struct RateGraph {
    /// Rates exactly as loaded.
    rates: Vec<Rate>,

    /// Adjacency list: source currency -> positions in `rates` of its
    /// outgoing edges, in load order. Duplicate pairs are kept so that
    /// first-match lookups see the same order as a linear scan.
    outgoing: HashMap<String, Vec<usize>>,
}

impl RateGraph {
    pub fn new(rates: Vec<Rate>) -> Self {
        let mut outgoing: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, rate) in rates.iter().enumerate() {
            outgoing.entry(rate.from.clone()).or_default().push(idx);
        }
        RateGraph { rates, outgoing }
    }

    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Every currency code mentioned by the table, sorted.
    pub fn currencies(&self) -> BTreeSet<&str> {
        self.rates
            .iter()
            .flat_map(|r| [r.from.as_str(), r.to.as_str()])
            .collect()
    }

    fn edges_from<'a>(&'a self, currency: &str) -> impl Iterator<Item = &'a Rate> + 'a {
        self.outgoing
            .get(currency)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.rates[idx])
    }

    /// First rate stated as `from -> to`.
    fn direct_edge(&self, from: &str, to: &str) -> Option<&Rate> {
        self.edges_from(from).find(|r| r.to == to)
    }

    /// First rate stated as `to -> from`.
    fn inverse_edge(&self, from: &str, to: &str) -> Option<&Rate> {
        self.edges_from(to).find(|r| r.to == from)
    }

    /// Returns the factor such that `1 from == factor to`.
    ///
    /// Resolution order: identity, first direct rate, reciprocal of the
    /// first inverse rate, then a depth-first walk over `from`'s outgoing
    /// rates. The factor is not rounded.
    pub fn find_rate(&self, from: &str, to: &str) -> std::result::Result<Decimal, FxError> {
        let mut visited: HashSet<&str> = HashSet::new();
        self.search(from, to, &mut visited)?
            .ok_or_else(|| FxError::no_path(from, to))
    }

    /// `Ok(None)` means no path via `from`; errors abort the whole lookup.
    fn search<'a>(
        &'a self,
        from: &'a str,
        to: &str,
        visited: &mut HashSet<&'a str>,
    ) -> std::result::Result<Option<Decimal>, FxError> {
        if from == to {
            return Ok(Some(Decimal::ONE));
        }

        if let Some(rate) = self.direct_edge(from, to) {
            return Ok(Some(rate.rate));
        }

        if let Some(rate) = self.inverse_edge(from, to) {
            if rate.rate.is_zero() {
                return Err(FxError::MalformedRate {
                    from: rate.from.clone(),
                    to: rate.to.clone(),
                });
            }
            return Decimal::ONE
                .checked_div(rate.rate)
                .map(Some)
                .ok_or_else(|| FxError::overflow(from, to));
        }

        visited.insert(from);

        for rate in self.edges_from(from) {
            // Checked per edge: a sibling branch may have visited it already.
            if visited.contains(rate.to.as_str()) {
                continue;
            }
            match self.search(&rate.to, to, visited)? {
                Some(factor) if !factor.is_zero() => {
                    return rate
                        .rate
                        .checked_mul(factor)
                        .map(Some)
                        .ok_or_else(|| FxError::overflow(from, to));
                }
                _ => continue,
            }
        }

        Ok(None)
    }

    /// Converts `amount` from `from` to `to`, rounded half-to-even to 2 dp.
    /// Same-currency amounts are returned untouched.
    pub fn convert_to(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
    ) -> std::result::Result<Decimal, FxError> {
        if from == to {
            return Ok(amount);
        }
        let factor = self.find_rate(from, to)?;
        let converted = amount
            .checked_mul(factor)
            .ok_or_else(|| FxError::overflow(from, to))?;
        Ok(round_half_even(converted, DISPLAY_DECIMAL_PRECISION))
    }

    /// Converts `amount` into the reporting currency (EUR).
    pub fn convert(&self, amount: Decimal, from: &str) -> std::result::Result<Decimal, FxError> {
        self.convert_to(amount, from, REPORTING_CURRENCY)
    }
}

impl FxServiceTrait for RateGraph {
    fn get_rates(&self) -> Vec<Rate> {
        self.rates.clone()
    }

    fn find_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        Ok(RateGraph::find_rate(self, from_currency, to_currency)?)
    }

    fn convert(&self, amount: Decimal, from_currency: &str) -> Result<Decimal> {
        Ok(RateGraph::convert(self, amount, from_currency)?)
    }
}
