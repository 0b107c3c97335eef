use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::errors::StorageError;

pub const RATES_FILE_NAME: &str = "rates.json";
pub const TRANSACTIONS_FILE_NAME: &str = "transactions.json";

/// Locations of the two data files inside a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub rates: PathBuf,
    pub transactions: PathBuf,
}

pub fn data_files(data_dir: impl AsRef<Path>) -> DataFiles {
    let dir = data_dir.as_ref();
    DataFiles {
        rates: dir.join(RATES_FILE_NAME),
        transactions: dir.join(TRANSACTIONS_FILE_NAME),
    }
}

/// Reads a JSON array from `path`, keeping element order.
pub(crate) fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    if !path.exists() {
        log::warn!("Data file not found at {}", path.display());
        return Err(StorageError::FileNotFound(path.to_path_buf()));
    }

    log::info!("Reading {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| StorageError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| {
        log::error!("Failed to deserialize {}: {}", path.display(), source);
        StorageError::DeserializationFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}
