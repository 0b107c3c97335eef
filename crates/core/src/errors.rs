//! Core error types for the SalesFx application.
//!
//! This module defines storage-agnostic error types. Loading errors (file
//! access, JSON parsing) are converted to these types by the storage layer.

use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Data source operation failed: {0}")]
    DataSource(#[from] DataSourceError),
}

/// Storage-agnostic error type for loading rates and transactions.
///
/// Uses `String` for all details so the storage layer can convert its own
/// errors (io, serde_json) into this format.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// The backing source does not exist.
    #[error("Data source not found: {0}")]
    NotFound(String),

    /// The backing source exists but could not be read.
    #[error("Failed to read data source: {0}")]
    ReadFailed(String),

    /// The content could not be deserialized.
    #[error("Failed to parse data source: {0}")]
    ParseFailed(String),
}
