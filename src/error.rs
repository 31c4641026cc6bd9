//! Error types for outcome
//!
//! Errors carried *inside* a `Response` are plain strings. This type covers
//! the few crate operations that can actually fail.

use thiserror::Error;

/// Result type alias using OutcomeError
pub type Result<T> = std::result::Result<T, OutcomeError>;

/// Unified error type for outcome operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    // -------------------------------------------------------------------------
    // Status Errors
    // -------------------------------------------------------------------------
    #[error("Unknown status code: {0}")]
    UnknownStatus(i32),

    // -------------------------------------------------------------------------
    // Response Errors
    // -------------------------------------------------------------------------
    #[error("Unsuccessful response ({status_code}): {message}")]
    Unsuccessful { status_code: i32, message: String },
}
