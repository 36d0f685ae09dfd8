//! Object-storage handles for the catalog file.
//!
//! The production backend is S3; `FileStore` serves the same keys from a local
//! directory for tests and development.

mod file;
mod s3;

pub use file::FileStore;
pub use s3::S3Store;

use async_trait::async_trait;
use thiserror::Error;

/// Object-storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("request error: {0}")]
    Request(String),

    #[error("read error: {0}")]
    Read(String),

    #[error("io error: {0}")]
    Io(String),
}

/// ObjectStore provides read access to stored objects.
///
/// Keys are path-like strings relative to the store's root (an S3 bucket or a
/// local directory). A missing object is `None`, not an error; callers decide
/// whether absence is fatal.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Retrieve an object's full contents. Returns None if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
}
