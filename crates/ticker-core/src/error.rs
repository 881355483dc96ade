// File: crates/ticker-core/src/error.rs
// Summary: Error type for recoverable, per-pass failures.

use thiserror::Error;

/// Failures that abort a single render pass. The poll loop logs them and
/// retries on the next cycle; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum Error {
    #[error("series length mismatch: {values} values vs {timestamps} timestamps")]
    LengthMismatch { values: usize, timestamps: usize },

    #[error("no close prices available for {symbol}")]
    MissingData { symbol: String },

    #[error("data source failed: {0}")]
    Source(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
