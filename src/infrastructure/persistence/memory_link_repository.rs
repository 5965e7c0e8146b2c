//! In-process link store for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StoreError};

/// Link store backed by a map behind an async read-write lock.
///
/// Contents live only as long as the process.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    /// Returns `true` if nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, link: &ShortLink) -> Result<(), StoreError> {
        let mut links = self.links.write().await;

        match links.entry(link.code.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict {
                code: link.code.clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(link.clone());
                Ok(())
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
