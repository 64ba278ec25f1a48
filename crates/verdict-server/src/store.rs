use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use verdict_config::EntityConfig;

/// Stored record served by the entities endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,
    pub data: String,
}

impl From<EntityConfig> for Entity {
    fn from(config: EntityConfig) -> Self {
        Self {
            id: config.id,
            data: config.data,
        }
    }
}

/// Entity lookup failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No entity stored under the requested id
    #[error("entity not found")]
    NotFound(i64),
}

/// Read access to stored entities
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Fetch one entity by id
    async fn get_by_id(&self, id: i64) -> Result<Entity, RepositoryError>;
}

/// In-memory entity store
///
/// Lookups share a read lock; inserts take the write lock.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    entities: RwLock<HashMap<i64, Entity>>,
}

impl MemoryRepository {
    /// Build a store seeded with `entities`; later duplicates replace earlier ones
    pub fn new(entities: impl IntoIterator<Item = Entity>) -> Self {
        let entities = entities.into_iter().map(|entity| (entity.id, entity)).collect();

        Self {
            entities: RwLock::new(entities),
        }
    }

    /// Store an entity, returning the one it replaced
    pub async fn insert(&self, entity: Entity) -> Option<Entity> {
        self.entities.write().await.insert(entity.id, entity)
    }
}

#[async_trait]
impl EntityRepository for MemoryRepository {
    async fn get_by_id(&self, id: i64) -> Result<Entity, RepositoryError> {
        let entities = self.entities.read().await;

        entities.get(&id).cloned().ok_or(RepositoryError::NotFound(id))
    }
}
