//! Key-value blob storage backing the score store.
//!
//! The store never diffs: every save replaces the whole blob under its key.

use super::connection::SqliteStorage;
use super::error::StorageError;
use crate::models::settings::{StorageBackend, StorageSettings};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage port for whole-state blobs.
pub trait BlobStorage {
    /// Returns the blob saved under `key`, or `None` if nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the blob saved under `key`.
    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// Process-local storage. Lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses `dir` as the storage directory, creating it if needed.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Path of the file holding `key`.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        let target = self.blob_path(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        // Rename keeps a crash mid-write from leaving a truncated store.
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}

/// Builds the configured backend, falling back to memory if it cannot be opened.
pub fn open_backend(settings: &StorageSettings) -> Box<dyn BlobStorage + Send> {
    let opened: Result<Box<dyn BlobStorage + Send>, StorageError> = match settings.backend {
        StorageBackend::Memory => Ok(Box::new(MemoryStorage::new())),
        StorageBackend::File => {
            FileStorage::open(&settings.path).map(|s| Box::new(s) as Box<dyn BlobStorage + Send>)
        }
        StorageBackend::Sqlite => {
            SqliteStorage::open(&settings.path).map(|s| Box::new(s) as Box<dyn BlobStorage + Send>)
        }
    };

    match opened {
        Ok(storage) => {
            log::info!(
                "STORE: Using {:?} storage at {:?}",
                settings.backend,
                settings.path
            );
            storage
        }
        Err(e) => {
            log::error!(
                "STORE: Failed to open {:?} storage at {:?}: {}. Scores will not survive a restart.",
                settings.backend,
                settings.path,
                e
            );
            Box::new(MemoryStorage::new())
        }
    }
}
