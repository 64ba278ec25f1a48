use axum::{Router, routing::get};

/// Liveness probe mounted at the configured path
pub fn router(path: &str) -> Router {
    Router::new().route(path, get(health))
}

async fn health() -> &'static str {
    "ok"
}
