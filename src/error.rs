//! Error types for the sync pipeline
//!
//! This module provides idiomatic Rust error types using thiserror for
//! better error messages and proper error chain handling.

use thiserror::Error;

/// Main error type for a sync run
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Record shape error: {0}")]
    RecordShape(#[from] RecordShapeError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Startup configuration failures. These abort the run before any network
/// or storage access.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required configuration value '{0}'")]
    Missing(String),

    #[error("invalid configuration value '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

/// Failures fetching or decoding the upstream feed. The run aborts before
/// touching storage.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode feed body: {0}")]
    Decode(String),
}

/// A single feed record is missing a required field. The record is skipped
/// with a warning; the run continues.
#[derive(Error, Debug)]
pub enum RecordShapeError {
    #[error("record {} is missing required field '{field}'", .id.as_deref().unwrap_or("<no id>"))]
    MissingField {
        id: Option<String>,
        field: &'static str,
    },
}

/// Storage failures. The enclosing transaction is rolled back in full; no
/// rows are left half-updated.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
