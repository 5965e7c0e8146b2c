//! Repository trait for the short link key-value store.

use crate::domain::entities::ShortLink;
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`LinkRepository`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key is already occupied by another record.
    #[error("code '{code}' is already taken")]
    Conflict { code: String },

    /// The backend could not complete the call (connection, protocol, decoding).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        Self::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Backend(format!("malformed record: {e}"))
    }
}

/// Key-value store holding short links, keyed by code.
///
/// Every call is a single attempt: no retries, no timeouts beyond what the
/// backend's transport applies.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL table
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis keys
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a link if its code is not already present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the code is taken, leaving the
    /// existing record untouched.
    ///
    /// Returns [`StoreError::Backend`] on transport errors.
    async fn create(&self, link: &ShortLink) -> Result<(), StoreError>;

    /// Looks up a link by its code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on transport errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError>;

    /// Checks that the backend is reachable.
    async fn health_check(&self) -> bool;
}
