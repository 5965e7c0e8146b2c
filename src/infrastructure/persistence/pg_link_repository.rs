//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::StoreConfig;
use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StoreError};

/// PostgreSQL link store.
///
/// Links live in a single table named after `TABLE_NAME`, keyed by `code`.
/// The table name is validated at config load and always used quoted, while
/// values are bound as parameters.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
    table: String,
}

impl PgLinkRepository {
    /// Creates a new repository over an existing pool.
    pub fn new(pool: Arc<PgPool>, table_name: &str) -> Self {
        Self {
            pool,
            table: format!("\"{}\"", table_name),
        }
    }

    /// Opens a pool from the store settings and makes sure the table exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the connection or the DDL fails.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let url = config
            .database_url
            .as_deref()
            .ok_or_else(|| StoreError::Backend("DATABASE_URL is not set".to_string()))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .connect(url)
            .await?;
        info!("Connected to database");

        let repository = Self::new(Arc::new(pool), &config.table_name);
        repository.ensure_table().await?;

        Ok(repository)
    }

    /// Creates the links table if it does not exist yet.
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                code TEXT PRIMARY KEY,
                long_url TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
            self.table
        );

        sqlx::query(&ddl).execute(self.pool.as_ref()).await?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for ShortLink {
    fn from(row: LinkRow) -> Self {
        Self {
            code: row.code,
            long_url: row.long_url,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, link: &ShortLink) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO {} (code, long_url, created_at) VALUES ($1, $2, $3) \
             ON CONFLICT (code) DO NOTHING",
            self.table
        );

        let result = sqlx::query(&sql)
            .bind(&link.code)
            .bind(&link.long_url)
            .bind(link.created_at)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict {
                code: link.code.clone(),
            });
        }

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        let sql = format!(
            "SELECT code, long_url, created_at FROM {} WHERE code = $1",
            self.table
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
