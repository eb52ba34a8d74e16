use crate::core::{AppError, Result};
use std::env;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub ports: Vec<u16>,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, ports: Vec<u16>) -> Self {
        Self {
            host,
            ports,
            workers: num_cpus::get() * 2,
        }
    }

    pub fn from_env() -> Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let ports = parse_ports(
            &env::var("SERVER_PORTS").unwrap_or_else(|_| "8080,8081".to_string()),
        )?;

        Ok(Self::new(host, ports))
    }

    /// One `host:port` per configured listener
    pub fn bind_addresses(&self) -> Vec<String> {
        self.ports
            .iter()
            .map(|port| format!("{}:{}", self.host, port))
            .collect()
    }
}

fn parse_ports(raw: &str) -> Result<Vec<u16>> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<u16>()
                .map_err(|_| AppError::Configuration(format!("Invalid port in SERVER_PORTS: {}", p)))
        })
        .collect()
}
