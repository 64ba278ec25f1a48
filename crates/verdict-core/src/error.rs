use crate::chain::BoxError;
use crate::message::WithMessage;
use crate::status::WithStatus;

/// Trait for domain errors that know their own HTTP classification
///
/// Implemented by feature error types that would rather describe
/// themselves than be decorated at every call site. [`into_decorated`]
/// turns such an error into the decorator chain the response boundary
/// understands, keeping domain errors decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Message safe to expose to API consumers, if it differs from the
    /// error's own display text
    fn client_message(&self) -> Option<String> {
        None
    }
}

/// Decorate a self-describing error with its status and optional message
pub fn into_decorated<E>(err: E) -> BoxError
where
    E: HttpError + Send + Sync + 'static,
{
    let code = err.status_code();
    let client_message = err.client_message();
    let decorated = WithStatus::new(err, code);

    match client_message {
        Some(text) => Box::new(WithMessage::new(decorated, text)),
        None => Box::new(decorated),
    }
}
