//! Ingest error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected dataset shape: {0}")]
    UnexpectedShape(String),
}
