//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A document with the same key already exists in the collection.
    #[error("duplicate key {key:?} in collection {collection:?}")]
    DuplicateKey { collection: String, key: String },

    /// The document does not carry a string value at its key field.
    #[error("document in collection {collection:?} has no string key at {field:?}")]
    MissingKeyField { collection: String, field: String },
}

impl StoreError {
    /// True when the error is a unique-key violation.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}
