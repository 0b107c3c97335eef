//! SalesFx Core - Domain entities, services, and traits.
//!
//! This crate holds the business logic for converting sales transactions
//! into the reporting currency. It performs no I/O: rates and transactions
//! arrive already deserialized through the repository traits, which are
//! implemented by the `storage-json` crate.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
