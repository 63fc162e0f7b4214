//! Error types for the JSON input boundary.
//!
//! The grid pipeline itself is total — malformed day/time data degrades to
//! `Unknown` buckets, never to an error. The only fallible surface is
//! turning an optimizer payload into typed records.

use thiserror::Error;

/// Result type for timegrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from parsing an optimizer job-result payload.
#[derive(Error, Debug)]
pub enum Error {
    /// The payload was not valid JSON, or did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was structurally wrong (e.g. a record that is not an
    /// object).
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
