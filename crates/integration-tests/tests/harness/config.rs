//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use verdict_config::{Config, EntityConfig, HealthConfig, ServerConfig, TelemetryConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with health enabled and an empty store
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                telemetry: TelemetryConfig::default(),
                entities: Vec::new(),
            },
        }
    }

    /// Seed one entity
    pub fn with_entity(mut self, id: i64, data: &str) -> Self {
        self.config.entities.push(EntityConfig {
            id,
            data: data.to_owned(),
        });
        self
    }

    /// Move the health endpoint
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
