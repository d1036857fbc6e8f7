use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with ZoomError
pub type Result<T> = std::result::Result<T, ZoomError>;
