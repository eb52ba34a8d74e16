use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_NPG_BASE_URL: &str = "https://stg-ta.nexigroup.com/api/phoenix-0.0/psp/api/v1";

/// NPG card-data service settings
#[derive(Debug, Clone, Deserialize)]
pub struct NpgConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl NpgConfig {
    pub fn from_env() -> Result<Self> {
        Ok(NpgConfig {
            api_key: env::var("NPG_API_KEY").unwrap_or_default(),
            base_url: env::var("NPG_BASE_URL").unwrap_or_else(|_| DEFAULT_NPG_BASE_URL.to_string()),
            timeout_ms: env::var("NPG_TIMEOUT_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid NPG_TIMEOUT_MS".to_string()))?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Passthrough target for requests no mock route handles
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    pub target: Option<String>,
    pub timeout_ms: u64,
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self> {
        let target = match env::var("PROXY_TARGET_HOST") {
            Ok(host) => {
                let port: u16 = env::var("PROXY_TARGET_PORT")
                    .unwrap_or_else(|_| "80".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid PROXY_TARGET_PORT".to_string()))?;
                Some(format!("http://{}:{}", host, port))
            }
            Err(_) => None,
        };

        Ok(ProxyConfig {
            target,
            timeout_ms: env::var("PROXY_TIMEOUT_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid PROXY_TIMEOUT_MS".to_string()))?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
