//! JSON file storage implementation for SalesFx.
//!
//! This crate is the loading collaborator of the core: it reads the rate
//! table and the transaction list from JSON files and hands them over as
//! the in-memory shapes the core expects. It implements the repository
//! traits defined in `salesfx-core`.
//!
//! ```text
//!   rates.json  transactions.json
//!        │             │
//!        └──────┬──────┘
//!               ▼
//!      storage-json (this crate)
//!               │
//!               ▼
//!     core (RateGraph, TransactionService)
//! ```

pub mod errors;
pub mod fx;
pub mod transactions;
mod utils;

pub use fx::JsonFxRepository;
pub use transactions::JsonTransactionRepository;
pub use utils::{data_files, DataFiles, RATES_FILE_NAME, TRANSACTIONS_FILE_NAME};
