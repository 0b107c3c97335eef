use std::{fs, net::SocketAddr, path::Path, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salesfx_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

const RATES: &str = r#"[
    {"from": "USD", "to": "GBP", "rate": 0.8},
    {"from": "GBP", "to": "EUR", "rate": 1.2},
    {"from": "EUR", "to": "CAD", "rate": 1.5}
]"#;

const TRANSACTIONS: &str = r#"[
    {"sku": "T2006", "amount": 100, "currency": "USD"},
    {"sku": "T2006", "amount": 30, "currency": "CAD"},
    {"sku": "M2007", "amount": 12.5, "currency": "EUR"},
    {"sku": "B1000", "amount": 5, "currency": "AUD"}
]"#;

fn test_config(data_dir: &Path) -> Config {
    Config {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        data_dir: data_dir.to_path_buf(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        log_format: "text".to_string(),
    }
}

fn test_app() -> (TempDir, Router) {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("rates.json"), RATES).unwrap();
    fs::write(tmp.path().join("transactions.json"), TRANSACTIONS).unwrap();
    let config = test_config(tmp.path());
    let state = build_state(&config).unwrap();
    (tmp, app_router(state, &config))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn decimal(value: &Value) -> Decimal {
    value.to_string().parse().unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let (_tmp, app) = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn lists_all_transactions_unconverted() {
    let (_tmp, app) = test_app();
    let (status, body) = get(app, "/api/transactions").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1]["currency"], "CAD");
    assert_eq!(decimal(&items[1]["amount"]), dec!(30));
}

#[tokio::test]
async fn lists_rates_in_load_order() {
    let (_tmp, app) = test_app();
    let (status, body) = get(app, "/api/transactions/rates").await;

    assert_eq!(status, StatusCode::OK);
    let froms: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["from"].as_str().unwrap())
        .collect();
    assert_eq!(froms, vec!["USD", "GBP", "EUR"]);
}

#[tokio::test]
async fn sku_summary_is_converted_to_eur() {
    let (_tmp, app) = test_app();
    let (status, body) = get(app, "/api/transactions/T2006").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sku"], "T2006");
    let amounts: Vec<Decimal> = body["transactions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| {
            assert_eq!(t["currency"], "EUR");
            decimal(&t["amount"])
        })
        .collect();
    assert_eq!(amounts, vec![dec!(96), dec!(20)]);
    assert_eq!(decimal(&body["totalAmountInEUR"]), dec!(116));
}

#[tokio::test]
async fn unknown_sku_is_not_found() {
    let (_tmp, app) = test_app();
    let (status, body) = get(app, "/api/transactions/UNKNOWN").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "No transactions found for SKU: UNKNOWN");
}

#[tokio::test]
async fn unresolvable_currency_is_server_error() {
    let (_tmp, app) = test_app();
    let (status, body) = get(app, "/api/transactions/B1000").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("No conversion path found for AUD -> EUR"));
}

#[tokio::test]
async fn missing_data_files_fail_startup() {
    let tmp = tempdir().unwrap();
    let config = test_config(tmp.path());
    assert!(build_state(&config).is_err());
}
