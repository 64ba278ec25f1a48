use std::num::ParseIntError;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use thiserror::Error;
use verdict_core::{bad_request, not_found};

use crate::boundary::Failure;
use crate::store::{Entity, EntityRepository, RepositoryError};

/// Shared handle to the entity store
pub type Repository = Arc<dyn EntityRepository>;

/// The `id` query parameter was missing or not an integer
#[derive(Debug, Error)]
#[error("invalid id")]
pub struct InvalidId {
    #[source]
    source: ParseIntError,
}

#[derive(Debug, Deserialize)]
pub struct EntityQuery {
    id: Option<String>,
}

/// Routes for entity lookups
pub fn router(repository: Repository) -> Router {
    Router::new()
        .route("/entities", get(get_entity_by_id))
        .with_state(repository)
}

/// `GET /entities?id=<i64>`
async fn get_entity_by_id(
    State(repository): State<Repository>,
    Query(query): Query<EntityQuery>,
) -> Result<Json<Entity>, Failure> {
    let id = query
        .id
        .as_deref()
        .unwrap_or_default()
        .parse::<i64>()
        .map_err(|source| bad_request(InvalidId { source }))?;

    let entity = repository.get_by_id(id).await.map_err(|err| match err {
        RepositoryError::NotFound(_) => not_found(err),
    })?;

    tracing::debug!(id, "entity served");

    Ok(Json(entity))
}
