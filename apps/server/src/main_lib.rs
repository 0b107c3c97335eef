use std::sync::Arc;

use crate::config::Config;
use salesfx_core::{
    fx::{FxRepositoryTrait, FxServiceTrait, RateGraph},
    transactions::{TransactionRepositoryTrait, TransactionService, TransactionServiceTrait},
};
use salesfx_storage_json::{data_files, JsonFxRepository, JsonTransactionRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Services shared by every request. Built once; never mutated afterwards.
pub struct AppState {
    pub fx_service: Arc<dyn FxServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let files = data_files(&config.data_dir);
    tracing::info!("Data directory in use: {}", config.data_dir.display());

    let fx_repository = JsonFxRepository::new(files.rates);
    let rates = fx_repository.get_rates()?;
    let rate_graph = RateGraph::new(rates);
    tracing::info!(
        "Rate graph ready: {} rates over currencies {:?}",
        rate_graph.len(),
        rate_graph.currencies()
    );
    let fx_service: Arc<dyn FxServiceTrait> = Arc::new(rate_graph);

    let transaction_repository = JsonTransactionRepository::new(files.transactions);
    let transactions = transaction_repository.get_transactions()?;
    tracing::info!("Loaded {} transactions", transactions.len());
    let transaction_service: Arc<dyn TransactionServiceTrait> =
        Arc::new(TransactionService::new(transactions, fx_service.clone()));

    Ok(Arc::new(AppState {
        fx_service,
        transaction_service,
    }))
}
