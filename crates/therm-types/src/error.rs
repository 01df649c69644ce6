use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThermError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type ThermResult<T> = Result<T, ThermError>;
