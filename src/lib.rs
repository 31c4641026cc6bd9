//! # outcome
//!
//! A value object describing how an operation ended:
//! - Numeric status code (HTTP-like numbering, no transport attached)
//! - Optional human readable description
//! - Ordered list of error messages, append-only
//! - Creation timestamp
//! - Success predicate: code below 400 and no errors
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────┐   factories    ┌─────────────────────────────┐
//! │   caller     │ ─────────────▶ │          Response           │
//! │ (operation)  │                │ status_code | description   │
//! └──────┬───────┘                │ errors[]    | timestamp     │
//!        │ Failure                └──────────────┬──────────────┘
//!        ▼                                       │ into_result()
//! ┌──────────────┐  from_exception               ▼
//! │ OutcomeError │ ◀──────────────────── Result<Response>
//! └──────────────┘
//! ```
//!
//! ```
//! use outcome::Response;
//!
//! let mut response = Response::not_found(Some("no such user"));
//! response.add_error("lookup exhausted");
//!
//! assert_eq!(response.status_code(), 404);
//! assert!(!response.is_successful());
//! assert_eq!(response.to_string(), "no such user\nlookup exhausted");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod builder;

pub mod status;
pub mod failure;
pub mod response;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{OutcomeError, Result};
pub use builder::ResponseBuilder;
pub use status::Status;
pub use failure::Failure;
pub use response::{Outcome, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of outcome
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
