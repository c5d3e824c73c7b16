//! Persistent storage for the bot.
//!
//! [`Database`] owns the SQLite pool. It is opened once at startup and handed
//! by reference to the model methods in [`dao`].

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Executor, SqlitePool,
};
use tracing::info;

use crate::immut_data::consts::SCHEMA;

pub mod dao;
mod server_statistic;
mod waitee;

/// Handle to the bot's database. Cloning is cheap; clones share the pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the SQLite file at `path` and applies the schema.
    pub async fn connect(path: &str) -> crate::Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        info!(path, "Database connected");
        Self::with_pool(pool).await
    }

    /// Opens a private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the pool
    /// is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> crate::Result<Self> {
        let options: SqliteConnectOptions = "sqlite::memory:".parse()?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> crate::Result<Self> {
        pool.execute(SCHEMA).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
