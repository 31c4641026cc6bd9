//! Status definitions
//!
//! Named status codes. The numbering borrows from HTTP status families but
//! nothing here is tied to a transport. Two sentinels sit outside the usual
//! ranges: `Ignored` (-1, the operation was a no-op) and `Skipped` (0).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OutcomeError;

/// Named status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum Status {
    Ignored = -1,
    Skipped = 0,
    Updated = 200,
    Created = 201,
    Removed = 204,
    BadRequest = 400,
    InvalidCredentials = 401,
    NotFound = 404,
    UnprocessableEntity = 422,
    InternalServerError = 500,
}

impl Status {
    /// Every named status, in ascending code order
    pub const ALL: [Status; 10] = [
        Status::Ignored,
        Status::Skipped,
        Status::Updated,
        Status::Created,
        Status::Removed,
        Status::BadRequest,
        Status::InvalidCredentials,
        Status::NotFound,
        Status::UnprocessableEntity,
        Status::InternalServerError,
    ];

    /// The raw integer code
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Upper snake case name, e.g. `NOT_FOUND`
    pub fn name(self) -> &'static str {
        match self {
            Status::Ignored => "IGNORED",
            Status::Skipped => "SKIPPED",
            Status::Updated => "UPDATED",
            Status::Created => "CREATED",
            Status::Removed => "REMOVED",
            Status::BadRequest => "BAD_REQUEST",
            Status::InvalidCredentials => "INVALID_CREDENTIALS",
            Status::NotFound => "NOT_FOUND",
            Status::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Status::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// True when the code alone is below the error threshold (400)
    pub fn is_success(self) -> bool {
        self.code() < 400
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> i32 {
        status.code()
    }
}

impl TryFrom<i32> for Status {
    type Error = OutcomeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.code() == code)
            .ok_or(OutcomeError::UnknownStatus(code))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
