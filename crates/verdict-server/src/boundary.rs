use std::error::Error;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use verdict_core::{BoxError, chain, is_server_fault, message, reason_phrase, status_code};

/// Text sent in place of any detail for server-side failures
pub const GENERIC_MESSAGE: &str = "something went wrong";

/// Handler failure rendered at the HTTP boundary
///
/// Any error converts into a `Failure` with `?`. On the way out, the
/// outermost status and message decorations in the chain decide the
/// response; undecorated errors become a generic 500.
#[derive(Debug)]
pub struct Failure(BoxError);

impl Failure {
    /// Wrap an error that has no `From` conversion of its own
    ///
    /// Accepts boxed errors, strings and [`anyhow::Error`]. Decorations
    /// inside an `anyhow::Error` stay visible to the resolution.
    pub fn new(err: impl Into<BoxError> + 'static) -> Self {
        Self(chain::into_cause(err))
    }

    /// The underlying error chain
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Take back the underlying error chain
    pub fn into_inner(self) -> BoxError {
        self.0
    }

    /// Decide the status and body sent for this failure
    pub fn resolve(&self) -> Resolution {
        let err: &(dyn Error + 'static) = &*self.0;

        let Ok(status) = StatusCode::from_u16(status_code(Some(err))) else {
            return Resolution::generic(StatusCode::INTERNAL_SERVER_ERROR);
        };

        if is_server_fault(status.as_u16()) {
            return Resolution::generic(status);
        }

        let text = message(Some(err))
            .cloned()
            .unwrap_or_else(|| Value::String(err.to_string()));

        Resolution {
            status,
            body: ErrorBody { error: text },
        }
    }
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self(Box::new(err))
    }
}

/// Status and body chosen for a failed request
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl Resolution {
    fn generic(status: StatusCode) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: Value::String(GENERIC_MESSAGE.to_owned()),
            },
        }
    }
}

/// JSON error body, `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: Value,
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let resolution = self.resolve();
        let err: &(dyn Error + 'static) = &*self.0;
        let declared = status_code(Some(err));

        if is_server_fault(resolution.status.as_u16()) {
            tracing::error!(
                status = declared,
                reason = reason_phrase(declared).unwrap_or("unregistered"),
                error = %chain::render(err),
                "request failed"
            );
        } else {
            tracing::debug!(status = declared, error = %chain::render(err), "request rejected");
        }

        (resolution.status, Json(resolution.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::to_bytes, routing::get};
    use serde_json::json;
    use tower::ServiceExt;
    use verdict_core::{
        Decorate, bad_request, canceled, internal_server_error, not_found, unknown, with_message, with_status,
    };

    use super::*;

    fn resolve(failure: impl Into<Failure>) -> (u16, Value) {
        let resolution = failure.into().resolve();
        (resolution.status.as_u16(), resolution.body.error)
    }

    #[test]
    fn status_decoration_shows_cause_text() {
        assert_eq!(resolve(not_found("no such id")), (404, json!("no such id")));
    }

    #[test]
    fn server_fault_hides_attached_message() {
        let failure = with_message(internal_server_error("db down"), "try later");
        assert_eq!(resolve(failure), (500, json!(GENERIC_MESSAGE)));
    }

    #[test]
    fn message_beneath_status_is_shown() {
        let failure = bad_request(with_message("x", "bad id format"));
        assert_eq!(resolve(failure), (400, json!("bad id format")));
    }

    #[test]
    fn undecorated_error_is_generic_500() {
        let failure = std::io::Error::other("connection reset by peer");
        assert_eq!(resolve(failure), (500, json!(GENERIC_MESSAGE)));
    }

    #[test]
    fn undecorated_message_is_still_hidden() {
        let failure = std::io::Error::other("secret").with_message("visible?");
        assert_eq!(resolve(failure), (500, json!(GENERIC_MESSAGE)));
    }

    #[test]
    fn synthetic_statuses() {
        assert_eq!(resolve(canceled("client went away")), (499, json!("client went away")));
        assert_eq!(resolve(unknown("weird")), (520, json!(GENERIC_MESSAGE)));
    }

    #[test]
    fn structured_message_passes_through() {
        let failure = bad_request("x").with_message(json!({ "field": "id" }));
        assert_eq!(resolve(failure), (400, json!({ "field": "id" })));
    }

    #[test]
    fn unrepresentable_status_becomes_500() {
        assert_eq!(resolve(with_status("odd", 42)), (500, json!(GENERIC_MESSAGE)));
        assert_eq!(resolve(with_status("huge", 1000)), (500, json!(GENERIC_MESSAGE)));
    }

    #[test]
    fn failure_keeps_the_chain() {
        let failure = Failure::from(not_found("gone"));
        assert_eq!(failure.get_ref().to_string(), "gone");
        assert!(failure.get_ref().source().is_some());

        let boxed = Failure::new("plain").into_inner();
        assert_eq!(boxed.to_string(), "plain");
    }

    #[test]
    fn anyhow_wrapped_decorations_resolve() {
        let failure = Failure::new(anyhow::Error::new(not_found("no such id")));
        assert_eq!(resolve(failure), (404, json!("no such id")));

        let failure = bad_request(anyhow::Error::new(with_message("x", "bad id format")));
        assert_eq!(resolve(failure), (400, json!("bad id format")));

        let failure = Failure::new(anyhow::Error::new(not_found("missing")).context("loading entity"));
        assert_eq!(resolve(failure), (404, json!("loading entity")));
    }

    #[test]
    fn undecorated_anyhow_error_is_generic_500() {
        let failure = Failure::new(anyhow::anyhow!("pool exhausted"));
        assert_eq!(resolve(failure), (500, json!(GENERIC_MESSAGE)));
    }

    async fn call(router: Router) -> (StatusCode, String) {
        let request = http::Request::builder().uri("/").body(axum::body::Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn failure_is_written_as_json() {
        let router = Router::new().route(
            "/",
            get(|| async { Err::<(), Failure>(not_found("no such id").into()) }),
        );

        let (status, body) = call(router).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"no such id"}"#);
    }

    #[tokio::test]
    async fn server_failure_is_written_generically() {
        let router = Router::new().route(
            "/",
            get(|| async {
                Err::<(), Failure>(with_message(internal_server_error("db down"), "try later").into())
            }),
        );

        let (status, body) = call(router).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"something went wrong"}"#);
    }

    #[tokio::test]
    async fn success_is_left_alone() {
        let router = Router::new().route("/", get(|| async { Ok::<_, Failure>((StatusCode::ACCEPTED, "queued")) }));

        let (status, body) = call(router).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, "queued");
    }
}
