#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod boundary;
mod entities;
mod health;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use verdict_config::Config;

pub use boundary::{ErrorBody, Failure, GENERIC_MESSAGE, Resolution};
pub use entities::{InvalidId, Repository};
pub use store::{Entity, EntityRepository, MemoryRepository, RepositoryError};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration, seeding an in-memory store
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let repository = MemoryRepository::new(config.entities.into_iter().map(Entity::from));

        Ok(Self::with_repository(
            config.server.listen_address,
            &config.server.health,
            Arc::new(repository),
        ))
    }

    /// Build the server around any entity store
    pub fn with_repository(
        listen_address: Option<SocketAddr>,
        health: &verdict_config::HealthConfig,
        repository: Repository,
    ) -> Self {
        let listen_address = listen_address.unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        let mut app = Router::new();

        if health.enabled {
            app = app.merge(health::router(&health.path));
        }

        app = app.merge(entities::router(repository));

        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
