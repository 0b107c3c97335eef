//! Storage-specific error types for JSON file loading.
//!
//! These wrap io and serde_json errors and convert them into the
//! storage-agnostic error types defined in `salesfx_core`.

use std::path::PathBuf;

use salesfx_core::errors::{DataSourceError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize {}: {source}", .path.display())]
    DeserializationFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let message = err.to_string();
        match err {
            StorageError::FileNotFound(_) => Error::DataSource(DataSourceError::NotFound(message)),
            StorageError::ReadFailed { .. } => {
                Error::DataSource(DataSourceError::ReadFailed(message))
            }
            StorageError::DeserializationFailed { .. } => {
                Error::DataSource(DataSourceError::ParseFailed(message))
            }
        }
    }
}
