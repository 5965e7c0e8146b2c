//! Link store implementations.
//!
//! Concrete implementations of [`LinkRepository`], selected at startup by
//! [`StoreBackend`]:
//!
//! - [`PgLinkRepository`] - PostgreSQL table via SQLx
//! - [`RedisLinkRepository`] - Redis string keys
//! - [`MemoryLinkRepository`] - process-local map, not persisted

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod redis_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
pub use redis_link_repository::RedisLinkRepository;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::{StoreBackend, StoreConfig};
use crate::domain::repositories::LinkRepository;

/// Opens the configured link store.
///
/// # Errors
///
/// Returns an error if the backend cannot be reached or initialized.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn LinkRepository>> {
    let repository: Arc<dyn LinkRepository> = match config.backend {
        StoreBackend::Postgres => Arc::new(
            PgLinkRepository::connect(config)
                .await
                .context("Failed to open PostgreSQL link store")?,
        ),
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set for the redis backend")?;
            Arc::new(
                RedisLinkRepository::connect(url, &config.table_name)
                    .await
                    .context("Failed to open Redis link store")?,
            )
        }
        StoreBackend::Memory => {
            warn!("Using in-memory link store; links are lost on restart");
            Arc::new(MemoryLinkRepository::new())
        }
    };

    Ok(repository)
}
