use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use salesfx_core::{
    fx::Rate,
    transactions::{SkuSummary, Transaction},
};

async fn get_all_transactions(State(state): State<Arc<AppState>>) -> Json<Vec<Transaction>> {
    let transactions = state.transaction_service.get_transactions();
    tracing::info!("Returning {} transactions", transactions.len());
    Json(transactions)
}

async fn get_rates(State(state): State<Arc<AppState>>) -> Json<Vec<Rate>> {
    let rates = state.fx_service.get_rates();
    tracing::info!("Returning {} rates", rates.len());
    Json(rates)
}

/// Transactions for one SKU restated in EUR, plus their total.
async fn get_transactions_by_sku(
    Path(sku): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SkuSummary>> {
    let summary = state
        .transaction_service
        .get_sku_summary(&sku)
        .inspect_err(|e| {
            tracing::error!("Failed to convert transactions for SKU {}: {}", sku, e)
        })?;

    if summary.transactions.is_empty() {
        tracing::warn!("No transactions found for SKU: {}", sku);
        return Err(ApiError::NotFound(format!(
            "No transactions found for SKU: {}",
            sku
        )));
    }

    tracing::info!(
        "Returning {} transactions for SKU {}, total {} EUR",
        summary.transactions.len(),
        sku,
        summary.total_amount_in_eur
    );
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", get(get_all_transactions))
        .route("/transactions/rates", get(get_rates))
        .route("/transactions/{sku}", get(get_transactions_by_sku))
}
