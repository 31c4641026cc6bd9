//! Failure contract
//!
//! Anything that can be turned into a `Response` through
//! `Response::from_exception` must expose a message and a numeric code.

use crate::error::OutcomeError;

/// An external failure signal carrying a message and a numeric code
pub trait Failure {
    /// Human readable message
    fn message(&self) -> String;

    /// Numeric code. Stored as-is, it need not be a meaningful status.
    fn code(&self) -> i32;
}

impl Failure for OutcomeError {
    fn message(&self) -> String {
        match self {
            OutcomeError::Unsuccessful { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    fn code(&self) -> i32 {
        match self {
            OutcomeError::UnknownStatus(code) => *code,
            OutcomeError::Unsuccessful { status_code, .. } => *status_code,
        }
    }
}

impl Failure for (i32, String) {
    fn message(&self) -> String {
        self.1.clone()
    }

    fn code(&self) -> i32 {
        self.0
    }
}

impl Failure for (i32, &str) {
    fn message(&self) -> String {
        self.1.to_string()
    }

    fn code(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsuccessful_keeps_raw_message_and_code() {
        let err = OutcomeError::Unsuccessful {
            status_code: 422,
            message: "name is required".to_string(),
        };
        assert_eq!(err.message(), "name is required");
        assert_eq!(err.code(), 422);
    }

    #[test]
    fn test_unknown_status_carries_its_code() {
        let err = OutcomeError::UnknownStatus(999);
        assert_eq!(err.message(), "Unknown status code: 999");
        assert_eq!(err.code(), 999);
    }

    #[test]
    fn test_tuple_failures() {
        assert_eq!((503_i32, "down").code(), 503);
        assert_eq!((503_i32, "down").message(), "down");
        assert_eq!((7_i32, String::from("odd")).code(), 7);
        assert_eq!((7_i32, String::from("odd")).message(), "odd");
    }
}
