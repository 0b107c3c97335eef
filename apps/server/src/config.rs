use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SFX_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SFX_LISTEN_ADDR")?;
        let data_dir = std::env::var("SFX_DATA_DIR").unwrap_or_else(|_| "./data".into());
        let cors_allow = std::env::var("SFX_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SFX_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .context("Invalid SFX_REQUEST_TIMEOUT_MS")?;
        let log_format = std::env::var("SFX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Ok(Self {
            listen_addr,
            data_dir: PathBuf::from(data_dir),
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}
