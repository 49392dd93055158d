use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Failures of a [`BlobStorage`](super::storage::BlobStorage) backend.
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),
    /// The stored blob could not be encoded or decoded.
    Serialization(serde_json::Error),
    /// The SQLite backend rejected a query or could not connect.
    Database(sqlx::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {}", e),
            StorageError::Serialization(e) => write!(f, "store serialization error: {}", e),
            StorageError::Database(e) => write!(f, "storage database error: {}", e),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Serialization(e) => Some(e),
            StorageError::Database(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e)
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e)
    }
}
