use super::error::StorageError;
use super::storage::BlobStorage;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

/// Blob storage in a SQLite `kv_store` table.
///
/// The score store is synchronous, so this backend owns its own tokio runtime
/// and blocks on every query.
pub struct SqliteStorage {
    runtime: Runtime,
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Opens or creates the database file.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        // Make sure the parent directory exists
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let absolute_path = if db_path.is_absolute() {
            db_path.to_path_buf()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(db_path)
        };

        let options = SqliteConnectOptions::new()
            .filename(&absolute_path)
            .create_if_missing(true);

        let runtime = Runtime::new()?;
        let pool = runtime.block_on(SqlitePool::connect_with(options))?;
        let storage = Self { runtime, pool };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Creates the table if it does not exist yet.
    fn init_schema(&self) -> Result<(), StorageError> {
        self.runtime.block_on(
            sqlx::query(
                "CREATE TABLE IF NOT EXISTS kv_store (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                )",
            )
            .execute(&self.pool),
        )?;
        Ok(())
    }
}

impl BlobStorage for SqliteStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.runtime.block_on(
            sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool),
        )?;
        Ok(value)
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.runtime.block_on(
            sqlx::query(
                "INSERT INTO kv_store (key, value) VALUES (?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            )
            .bind(key)
            .bind(blob)
            .execute(&self.pool),
        )?;
        Ok(())
    }
}

impl Drop for SqliteStorage {
    fn drop(&mut self) {
        self.runtime.block_on(self.pool.close());
    }
}
