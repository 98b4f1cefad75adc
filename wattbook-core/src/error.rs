//! Error types for wattbook-core

use thiserror::Error;

/// Errors from the durable record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Corrupt record: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Migration failed: {0}")]
    Migration(String),
}

/// Errors for assessment operations
#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Assessment not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
