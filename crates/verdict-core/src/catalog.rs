//! Named constructors for common failure categories
//!
//! Each constructor is shorthand for [`WithStatus::new`] with a fixed code.
//! The same table also produces [`CATALOG`] for lookups by name or code.

use crate::chain::BoxError;
use crate::status::{STATUS_CANCELED, STATUS_UNKNOWN, WithStatus};

/// One named failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Constructor name
    pub name: &'static str,
    /// Status code applied by the constructor
    pub code: u16,
}

macro_rules! status_catalog {
    ($($name:ident => $code:expr),* $(,)?) => {
        $(
            #[doc = concat!("Decorate `cause` with status ", stringify!($code), " (`", stringify!($name), "`)")]
            pub fn $name(cause: impl Into<BoxError> + 'static) -> WithStatus {
                WithStatus::new(cause, $code)
            }
        )*

        /// Every named constructor and the status it applies, in table order
        pub const CATALOG: &[CatalogEntry] = &[
            $(CatalogEntry { name: stringify!($name), code: $code }),*
        ];
    };
}

status_catalog! {
    // client-side
    bad_request => 400,
    unauthorized => 401,
    payment_required => 402,
    forbidden => 403,
    not_found => 404,
    method_not_allowed => 405,
    not_acceptable => 406,
    proxy_auth_required => 407,
    request_timeout => 408,
    conflict => 409,
    gone => 410,
    length_required => 411,
    precondition_failed => 412,
    request_entity_too_large => 413,
    request_uri_too_long => 414,
    unsupported_media_type => 415,
    requested_range_not_satisfiable => 416,
    expectation_failed => 417,
    misdirected_request => 421,
    unprocessable_entity => 422,
    locked => 423,
    failed_dependency => 424,
    too_early => 425,
    upgrade_required => 426,
    precondition_required => 428,
    too_many_requests => 429,
    request_header_fields_too_large => 431,
    unavailable_for_legal_reasons => 451,
    canceled => STATUS_CANCELED,

    // server-side
    internal_server_error => 500,
    not_implemented => 501,
    bad_gateway => 502,
    service_unavailable => 503,
    gateway_timeout => 504,
    http_version_not_supported => 505,
    variant_also_negotiates => 506,
    insufficient_storage => 507,
    loop_detected => 508,
    not_extended => 510,
    network_authentication_required => 511,
    unknown => STATUS_UNKNOWN,
}

/// Look up a catalog entry by constructor name
pub fn by_name(name: &str) -> Option<CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name).copied()
}

/// Look up the catalog entry applying `code`
pub fn by_code(code: u16) -> Option<CatalogEntry> {
    CATALOG.iter().find(|entry| entry.code == code).copied()
}
