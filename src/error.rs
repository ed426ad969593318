use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Unsupported event type: {0}")]
    UnsupportedEventType(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Storage error: {0}")]
    StoreError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<sqlx::Error> for WebhookError {
    fn from(err: sqlx::Error) -> Self {
        Self::StoreError(format!("database error: {}", err))
    }
}
