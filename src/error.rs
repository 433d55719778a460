#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Card search failed with status {status}: {details}")]
    Api { status: u16, details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DraftError>;
