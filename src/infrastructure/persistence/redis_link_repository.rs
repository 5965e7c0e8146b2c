//! Redis implementation of the link store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::info;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StoreError};

/// Redis link store.
///
/// Each link is one string key, `"{namespace}:{code}"`, holding the JSON
/// record. Writes use `SET ... NX` so an existing code is never overwritten.
/// Uses `ConnectionManager` for automatic reconnects; the manager is cheap to
/// clone per call.
pub struct RedisLinkRepository {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisLinkRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `namespace` - key prefix taken from `TABLE_NAME`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, namespace: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)?;
        let mut conn = ConnectionManager::new(client).await?;

        conn.ping::<()>().await?;
        info!("Connected to Redis");

        Ok(Self {
            conn,
            key_prefix: format!("{namespace}:"),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn create(&self, link: &ShortLink) -> Result<(), StoreError> {
        let key = self.build_key(&link.code);
        let payload = serde_json::to_string(link)?;
        let mut conn = self.conn.clone();

        // SET NX answers OK when written and nil when the key already exists.
        let written: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(payload)
            .arg("NX")
            .query_async(&mut conn)
            .await?;

        match written {
            Some(_) => Ok(()),
            None => Err(StoreError::Conflict {
                code: link.code.clone(),
            }),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();

        let raw: Option<String> = conn.get(&key).await?;

        raw.map(|json| serde_json::from_str(&json).map_err(StoreError::from))
            .transpose()
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
