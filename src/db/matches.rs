use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use tracing::{debug, info};

use crate::db::MatchCache;
use crate::error::{RelayError, RelayResult};
use crate::models::MatchRecord;

/// SQLite store for cached match documents
pub struct MatchStore {
    pool: Pool<Sqlite>,
}

impl MatchStore {
    /// Create a new match store and initialize the database
    pub async fn new(database_url: &str) -> Result<Self> {
        // Create data directory if needed
        if let Some(path) = database_file_path(database_url) {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create database directory")?;
                }
            }
        }

        // Parse connection options and enable create_if_missing
        let options = SqliteConnectOptions::from_str(database_url)
            .context("Invalid database URL")?
            .create_if_missing(true);

        // An in-memory database lives only as long as its connection
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("Failed to connect to database")?;

        let store = Self { pool };
        store.init_schema().await?;

        info!("Match store initialized");
        Ok(store)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS match_cache (
                match_id TEXT PRIMARY KEY NOT NULL,
                data TEXT NOT NULL,
                fetched_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create match_cache table")?;

        Ok(())
    }

    /// Get the count of cached matches
    pub async fn count(&self) -> RelayResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM match_cache")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }
}

/// File path of an SQLite URL, `None` for in-memory databases
fn database_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path.starts_with(":memory:") {
        None
    } else {
        Some(path)
    }
}

#[async_trait]
impl MatchCache for MatchStore {
    async fn get(&self, match_id: &str) -> RelayResult<Option<MatchRecord>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT data FROM match_cache WHERE match_id = ?")
                .bind(match_id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((data,)) => {
                let record = serde_json::from_str(&data).map_err(|e| {
                    RelayError::MalformedInput(format!("cached match {} is corrupt: {}", match_id, e))
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, match_id: &str, record: &MatchRecord) -> RelayResult<()> {
        let data = serde_json::to_string(record)?;

        sqlx::query(
            r#"
            INSERT INTO match_cache (match_id, data, fetched_at)
            VALUES (?, ?, ?)
            ON CONFLICT (match_id) DO UPDATE SET
                data = excluded.data,
                fetched_at = excluded.fetched_at
            "#,
        )
        .bind(match_id)
        .bind(&data)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!("Cached match {}", match_id);
        Ok(())
    }
}
