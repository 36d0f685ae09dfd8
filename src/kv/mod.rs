//! Key-value store handles for purchase markers.
//!
//! Keys follow a namespaced convention: `sold:<serial_number>`. The production
//! backend is Redis; `MemoryStore` backs the test suite.

mod memory;
mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

use async_trait::async_trait;
use thiserror::Error;

/// Key-value store errors.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("command error: {0}")]
    Command(String),
}

/// KvStore provides the key-value operations the purchase flow needs.
///
/// `set` overwrites unconditionally; recording the same serial twice leaves a
/// single key behind.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Set a key-value pair, overwriting any prior value.
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Get the value for a key. Returns None if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;
}
