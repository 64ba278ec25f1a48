use std::error::Error;

use serde_json::Value;

use crate::chain::{self, BoxError};

/// Error decorated with a user-facing payload
///
/// The payload may be any JSON value, scalar or structured. Displays exactly
/// like its cause.
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct WithMessage {
    message: Value,
    #[source]
    cause: BoxError,
}

impl WithMessage {
    /// Wrap `cause` with a message payload
    pub fn new(cause: impl Into<BoxError> + 'static, message: impl Into<Value>) -> Self {
        Self {
            message: message.into(),
            cause: chain::into_cause(cause),
        }
    }

    /// Payload attached to this link
    pub const fn message(&self) -> &Value {
        &self.message
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

/// Wrap `cause` with a message payload
pub fn with_message(cause: impl Into<BoxError> + 'static, message: impl Into<Value>) -> WithMessage {
    WithMessage::new(cause, message)
}

/// Resolve the message payload carried by an error chain
///
/// Returns the payload of the outermost [`WithMessage`] in the chain, or
/// `None` when the error is missing or carries no message. `None` is not
/// the same as an empty string or a JSON `null` payload.
pub fn message<'a>(err: Option<&'a (dyn Error + 'static)>) -> Option<&'a Value> {
    chain::find::<WithMessage>(err?).map(WithMessage::message)
}
