//! Error types for the ingestion layer.

use thiserror::Error;

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while reading a delimited source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source could not be opened, read or parsed.
    #[error("source could not be read: {0}")]
    Source(#[from] csv::Error),
}
