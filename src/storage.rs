//! Asynchronous key-value storage for the collection store.
//!
//! The store persists each collection as one JSON blob under a fixed key.
//! [`StorageProvider`] is the seam between the collection store and the
//! actual persistence medium: the shipped [`FileStorage`] keeps one file
//! per key in the user's local data directory, and tests swap in an
//! in-memory provider. A missing key is a valid empty state (`Ok(None)`),
//! not an error.

use std::{io::ErrorKind, path::PathBuf};

#[derive(Debug)]
pub enum StorageError {
    IoError(std::io::Error),
    Unavailable(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::IoError(err)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(err) => write!(f, "storage i/o error: {}", err),
            StorageError::Unavailable(reason) => write!(f, "storage unavailable: {}", reason),
        }
    }
}

impl std::error::Error for StorageError {}

#[allow(async_fn_in_trait)]
pub trait StorageProvider {
    /// Fetches the blob stored under `key`. Absent keys resolve to
    /// `Ok(None)`; only a failing medium produces an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous blob.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage provider keeping one JSON file per key under
/// `<data_local_dir>/cineshelf/store/`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new() -> Self {
        let mut root = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("cineshelf/store");
        Self { root }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageProvider for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match async_fs::read_to_string(self.blob_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::IoError(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.blob_path(key);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StorageError::IoError)?;
        }

        async_fs::write(path, value)
            .await
            .map_err(StorageError::IoError)
    }
}
