//! Filesystem-backed object store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{ObjectStore, StorageError};

/// FileStore is an [`ObjectStore`] mapping keys to files under a base directory.
///
/// Key "product.csv" resolves to `{base_dir}/product.csv`. Keys that are empty,
/// absolute, or contain `..` components are rejected so a key can never escape
/// the base directory.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a FileStore rooted at `base_dir`. The directory must exist.
    pub fn open(base_dir: &Path) -> Result<Self, StorageError> {
        if !base_dir.is_dir() {
            return Err(StorageError::Io(format!(
                "catalog directory does not exist: {}",
                base_dir.display()
            )));
        }
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// Resolve a key to a filesystem path. Rejects keys that escape base_dir.
    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key.starts_with('/')
            || key.starts_with('\\')
            || key.split(['/', '\\']).any(|part| part == "..")
        {
            return Err(StorageError::Io(format!("invalid object key: {:?}", key)));
        }

        Ok(self.base_dir.join(key))
    }
}

#[async_trait]
impl ObjectStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.resolve(key)?;

        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
