use serde::Deserialize;

/// One row seeded into the entity store at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    pub id: i64,
    pub data: String,
}
