//! Error decoration for request handlers
//!
//! Attach a transport status code or a user-facing message to any error at
//! the point it is produced, then recover the outermost decoration of each
//! kind from anywhere in the cause chain at the response boundary.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

pub mod catalog;
pub mod chain;
pub mod error;
mod ext;
pub mod message;
pub mod status;

pub use catalog::*;
pub use chain::BoxError;
pub use error::{HttpError, into_decorated};
pub use ext::{Decorate, ResultExt};
pub use message::{WithMessage, message, with_message};
pub use status::{
    SERVER_FAULT_THRESHOLD, STATUS_CANCELED, STATUS_INTERNAL_SERVER_ERROR, STATUS_OK, STATUS_UNKNOWN, WithStatus,
    is_server_fault, reason_phrase, status_code, with_status,
};
