//! Response Module
//!
//! The outcome of an operation: a status code, an optional description, the
//! errors collected along the way, and the moment the response was created.
//!
//! ## Success
//! A response is successful when its code is below 400 *and* no error has been
//! recorded. Adding a single error flips an otherwise successful response.
//!
//! ## Lifecycle
//! ```text
//!   new() / factory ──▶ set_status_code / set_description / add_error ──▶ returned up the call chain
//! ```
//! Errors only ever grow. The timestamp never changes after construction.

mod factory;
mod outcome;

pub use outcome::Outcome;

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::builder::ResponseBuilder;
use crate::error::{OutcomeError, Result};
use crate::status::Status;

/// The outcome of an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Status code, 200 unless set otherwise
    status_code: i32,

    /// Optional human readable description
    description: Option<String>,

    /// Error messages in insertion order
    errors: Vec<String>,

    /// Wall-clock time of construction
    timestamp: SystemTime,
}

impl Response {
    // -------------------------------------------------------------------------
    // Named Codes
    // -------------------------------------------------------------------------
    pub const IGNORED: i32 = Status::Ignored as i32;
    pub const SKIPPED: i32 = Status::Skipped as i32;
    pub const UPDATED: i32 = Status::Updated as i32;
    pub const CREATED: i32 = Status::Created as i32;
    pub const REMOVED: i32 = Status::Removed as i32;
    pub const BAD_REQUEST: i32 = Status::BadRequest as i32;
    pub const INVALID_CREDENTIALS: i32 = Status::InvalidCredentials as i32;
    pub const NOT_FOUND: i32 = Status::NotFound as i32;
    pub const UNPROCESSABLE_ENTITY: i32 = Status::UnprocessableEntity as i32;
    pub const INTERNAL_SERVER_ERROR: i32 = Status::InternalServerError as i32;

    /// Create a successful response (200) with no description and no errors
    pub fn new() -> Self {
        Self::with_status_code(Self::UPDATED)
    }

    /// Create a response carrying `status_code`
    pub fn with_status_code(status_code: i32) -> Self {
        Self {
            status_code,
            description: None,
            errors: Vec::new(),
            timestamp: SystemTime::now(),
        }
    }

    /// Create a new response builder
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// Replace the status code. No range check is applied.
    pub fn set_status_code(&mut self, status_code: i32) -> &mut Self {
        self.status_code = status_code;
        self
    }

    /// The named status matching the current code, if there is one
    pub fn status(&self) -> Option<Status> {
        Status::try_from(self.status_code).ok()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Creation time, fixed for the lifetime of the response
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    /// Read-only view over the recorded errors
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        Outcome::has_errors(self)
    }

    /// Append `message` after every previously recorded error
    pub fn add_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(status_code = self.status_code, "Recording error: {}", message);
        self.errors.push(message);
    }

    pub fn first_error(&self) -> Option<&str> {
        Outcome::first_error(self)
    }

    /// Errors joined by `\n`, oldest first
    pub fn errors_as_string(&self) -> String {
        Outcome::errors_as_string(self)
    }

    pub fn is_successful(&self) -> bool {
        Outcome::is_successful(self)
    }

    // -------------------------------------------------------------------------
    // Result Bridging
    // -------------------------------------------------------------------------

    /// `Ok(self)` when successful, otherwise the code and joined errors as an error
    pub fn into_result(self) -> Result<Response> {
        if self.is_successful() {
            return Ok(self);
        }

        tracing::debug!(
            status_code = self.status_code,
            errors = self.errors.len(),
            "Response is unsuccessful"
        );
        Err(OutcomeError::Unsuccessful {
            status_code: self.status_code,
            message: self.errors_as_string(),
        })
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Outcome for Response {
    fn status_code(&self) -> i32 {
        self.status_code
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }

    fn add_error(&mut self, message: &str) {
        Response::add_error(self, message);
    }
}

/// Renders the errors only, one per line. Code and description are omitted.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors_as_string())
    }
}

impl From<OutcomeError> for Response {
    fn from(err: OutcomeError) -> Self {
        Response::from_exception(&err)
    }
}
