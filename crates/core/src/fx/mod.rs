//! FX (Foreign Exchange) module - rate model, rate-graph resolver, and traits.

mod fx_errors;
mod fx_model;
mod fx_traits;
pub mod rate_graph;

pub use fx_errors::FxError;
pub use fx_model::Rate;
pub use fx_traits::{FxRepositoryTrait, FxServiceTrait};
pub use rate_graph::RateGraph;
