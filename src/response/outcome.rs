//! Outcome capability
//!
//! The behaviour shared by anything that reports the result of an operation.

/// Status, description and error reporting of an operation result
pub trait Outcome {
    /// Current status code
    fn status_code(&self) -> i32;

    /// Optional human readable description
    fn description(&self) -> Option<&str>;

    /// Accumulated error messages, oldest first
    fn errors(&self) -> &[String];

    /// Append an error message
    fn add_error(&mut self, message: &str);

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// Below 400 and no errors recorded
    fn is_successful(&self) -> bool {
        self.status_code() < 400 && !self.has_errors()
    }

    fn first_error(&self) -> Option<&str> {
        self.errors().first().map(String::as_str)
    }

    /// All errors joined by newlines
    fn errors_as_string(&self) -> String {
        self.errors().join("\n")
    }
}
