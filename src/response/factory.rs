//! Named constructors for common outcomes

use super::{Outcome, Response};
use crate::failure::Failure;

impl Response {
    // -------------------------------------------------------------------------
    // Error Outcomes
    // -------------------------------------------------------------------------

    /// Response with `code`, recording `message` only when one is given
    pub fn error(message: Option<&str>, code: i32) -> Self {
        let mut response = Self::with_status_code(code);
        if let Some(message) = message {
            response.add_error(message);
        }
        response
    }

    pub fn not_found(message: Option<&str>) -> Self {
        Self::error(message, Self::NOT_FOUND)
    }

    pub fn bad_request(message: Option<&str>) -> Self {
        Self::error(message, Self::BAD_REQUEST)
    }

    pub fn invalid_credentials(message: Option<&str>) -> Self {
        Self::error(message, Self::INVALID_CREDENTIALS)
    }

    pub fn unprocessable_entity(message: Option<&str>) -> Self {
        Self::error(message, Self::UNPROCESSABLE_ENTITY)
    }

    pub fn internal_server_error(message: Option<&str>) -> Self {
        Self::error(message, Self::INTERNAL_SERVER_ERROR)
    }

    // -------------------------------------------------------------------------
    // Success Outcomes
    // -------------------------------------------------------------------------

    pub fn success(code: i32) -> Self {
        Self::with_status_code(code)
    }

    pub fn created() -> Self {
        Self::with_status_code(Self::CREATED)
    }

    pub fn modified() -> Self {
        Self::with_status_code(Self::UPDATED)
    }

    pub fn removed() -> Self {
        Self::with_status_code(Self::REMOVED)
    }

    /// The operation turned out to be a no-op
    pub fn ignored() -> Self {
        Self::with_status_code(Self::IGNORED)
    }

    /// The operation was not attempted; `description` may say why
    pub fn skipped(description: Option<&str>) -> Self {
        let mut response = Self::with_status_code(Self::SKIPPED);
        response.set_description(description.map(str::to_string));
        response
    }

    // -------------------------------------------------------------------------
    // Conversions
    // -------------------------------------------------------------------------

    /// Wrap an external failure. The message is always recorded, even if empty.
    pub fn from_exception<F: Failure + ?Sized>(failure: &F) -> Self {
        let code = failure.code();
        let message = failure.message();
        tracing::debug!(code, "Building response from failure: {}", message);
        Self::error(Some(message.as_str()), code)
    }

    /// Fresh response copying code, description and every error of `other`
    pub fn from_response<O: Outcome + ?Sized>(other: &O) -> Self {
        let mut response = Self::with_status_code(other.status_code());
        for error in other.errors() {
            response.add_error(error.as_str());
        }
        response.set_description(other.description().map(str::to_string));
        response
    }
}
