use serde::{Deserialize, Serialize};
use std::env;

use crate::error::WebhookError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl AppConfig {
    pub fn load() -> Result<Self, WebhookError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://events.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| WebhookError::ConfigError(format!("invalid SERVER_PORT: {}", e)))?;

        Ok(AppConfig {
            database_url,
            server_host,
            server_port,
        })
    }
}
