use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;
pub mod upstream;

pub use server::ServerConfig;
pub use upstream::{NpgConfig, ProxyConfig};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub flow: FlowConfig,
    pub npg: NpgConfig,
    pub proxy: ProxyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Artificial delay applied to every response, in milliseconds
    pub endpoint_delay_ms: u64,
}

/// Scenario engine settings
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// HMAC key for flow session tokens
    pub session_secret: String,
    /// Base URL embedded in the 3DS method notification callback
    pub notification_base_url: String,
}

pub const DEFAULT_SESSION_SECRET: &str = "checkout-mock-development-secret";

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            session_secret: DEFAULT_SESSION_SECRET.to_string(),
            notification_base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                endpoint_delay_ms: env::var("ENDPOINT_DELAY")
                    .unwrap_or_else(|_| "0".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid ENDPOINT_DELAY".to_string()))?,
            },
            server: ServerConfig::from_env()?,
            flow: FlowConfig {
                session_secret: env::var("FLOW_SESSION_SECRET")
                    .unwrap_or_else(|_| DEFAULT_SESSION_SECRET.to_string()),
                notification_base_url: env::var("CHECKOUT_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            },
            npg: NpgConfig::from_env()?,
            proxy: ProxyConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.ports.is_empty() {
            return Err(AppError::Configuration(
                "At least one listening port is required".to_string(),
            ));
        }

        if self.flow.session_secret.is_empty() {
            return Err(AppError::Configuration(
                "FLOW_SESSION_SECRET must not be empty".to_string(),
            ));
        }

        if self.npg.timeout_ms == 0 {
            return Err(AppError::Configuration(
                "NPG timeout must be greater than 0".to_string(),
            ));
        }

        if self.proxy.timeout_ms == 0 {
            return Err(AppError::Configuration(
                "Passthrough timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
