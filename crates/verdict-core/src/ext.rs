use serde_json::Value;

use crate::chain::BoxError;
use crate::message::WithMessage;
use crate::status::WithStatus;

/// Method-style decoration for any error value
///
/// ```
/// use verdict_core::{Decorate, status_code};
///
/// let err = std::io::Error::other("denied").with_status(403);
/// assert_eq!(status_code(Some(&err)), 403);
/// ```
pub trait Decorate: Into<BoxError> + Sized + 'static {
    /// Wrap `self` with a status code
    fn with_status(self, code: u16) -> WithStatus {
        WithStatus::new(self, code)
    }

    /// Wrap `self` with a message payload
    fn with_message(self, message: impl Into<Value>) -> WithMessage {
        WithMessage::new(self, message)
    }
}

impl<E> Decorate for E where E: std::error::Error + Send + Sync + 'static {}

/// Decorate the error side of a `Result`
pub trait ResultExt<T> {
    /// Attach a status code to the error, if any
    fn status(self, code: u16) -> Result<T, WithStatus>;

    /// Attach a message payload to the error, if any
    fn message(self, message: impl Into<Value>) -> Result<T, WithMessage>;

    /// Attach a lazily built message payload to the error, if any
    fn with_message<F, M>(self, f: F) -> Result<T, WithMessage>
    where
        F: FnOnce() -> M,
        M: Into<Value>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError> + 'static,
{
    fn status(self, code: u16) -> Result<T, WithStatus> {
        self.map_err(|err| WithStatus::new(err, code))
    }

    fn message(self, message: impl Into<Value>) -> Result<T, WithMessage> {
        self.map_err(|err| WithMessage::new(err, message))
    }

    fn with_message<F, M>(self, f: F) -> Result<T, WithMessage>
    where
        F: FnOnce() -> M,
        M: Into<Value>,
    {
        self.map_err(|err| WithMessage::new(err, f()))
    }
}
