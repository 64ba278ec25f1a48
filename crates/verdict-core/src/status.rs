use std::error::Error;

use http::StatusCode;

use crate::chain::{self, BoxError};

/// Status reported for a missing error
pub const STATUS_OK: u16 = 200;

/// Status reported for an error chain carrying no status decoration
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Client closed the request before a response was produced
pub const STATUS_CANCELED: u16 = 499;

/// Server failed in a way no standard status describes
pub const STATUS_UNKNOWN: u16 = 520;

/// Statuses at or above this value are server faults
pub const SERVER_FAULT_THRESHOLD: u16 = 500;

/// Error decorated with a transport status code
///
/// Displays exactly like its cause. Any code is accepted, including values
/// outside the registered HTTP range.
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct WithStatus {
    code: u16,
    #[source]
    cause: BoxError,
}

impl WithStatus {
    /// Wrap `cause` with a status code
    pub fn new(cause: impl Into<BoxError> + 'static, code: u16) -> Self {
        Self {
            code,
            cause: chain::into_cause(cause),
        }
    }

    /// Status code attached to this link
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// The wrapped error
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Discard the decoration and return the wrapped error
    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

/// Wrap `cause` with a status code
pub fn with_status(cause: impl Into<BoxError> + 'static, code: u16) -> WithStatus {
    WithStatus::new(cause, code)
}

/// Resolve the status code carried by an error chain
///
/// A missing error is a success. Otherwise the outermost [`WithStatus`] in
/// the chain wins, and a chain without one is an internal server error.
pub fn status_code(err: Option<&(dyn Error + 'static)>) -> u16 {
    let Some(err) = err else {
        return STATUS_OK;
    };

    chain::find::<WithStatus>(err).map_or(STATUS_INTERNAL_SERVER_ERROR, WithStatus::code)
}

/// Whether a status must hide error details from the client
pub const fn is_server_fault(code: u16) -> bool {
    code >= SERVER_FAULT_THRESHOLD
}

/// Human-readable reason for a status code, including the synthetic ones
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    match code {
        STATUS_CANCELED => Some("Client Closed Request"),
        STATUS_UNKNOWN => Some("Unknown Error"),
        _ => StatusCode::from_u16(code).ok()?.canonical_reason(),
    }
}
