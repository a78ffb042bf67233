use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid rule pattern '{label}': {source}")]
    InvalidPattern {
        label: &'static str,
        source: regex::Error,
    },

    #[error("Remote scoring error: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DetectError>;
