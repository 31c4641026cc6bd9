//! Response builder
//!
//! Fluent construction with the same defaults as `Response::new()`.

use crate::response::Response;
use crate::status::Status;

/// Builder for Response
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    status_code: i32,
    description: Option<String>,
    errors: Vec<String>,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self {
            status_code: Response::UPDATED,
            description: None,
            errors: Vec::new(),
        }
    }
}

impl ResponseBuilder {
    /// Set the raw status code
    pub fn status_code(mut self, code: i32) -> Self {
        self.status_code = code;
        self
    }

    /// Set the status code from a named status
    pub fn status(mut self, status: Status) -> Self {
        self.status_code = status.code();
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append one error
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Append several errors, keeping their order
    pub fn errors<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.extend(messages.into_iter().map(Into::into));
        self
    }

    /// Build the response. The timestamp is taken here, not when the builder was made.
    pub fn build(self) -> Response {
        let mut response = Response::with_status_code(self.status_code);
        response.set_description(self.description);
        for error in self.errors {
            response.add_error(error);
        }
        response
    }
}
