//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use super::{KvError, KvStore};

/// RedisStore is a [`KvStore`] backed by a Redis server.
///
/// The connection manager multiplexes one connection and reconnects on its own,
/// so the handle stays valid across transient network failures.
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Connect to the Redis server at `host:port`.
    pub async fn connect(host: &str, port: u16) -> Result<Self, KvError> {
        let url = format!("redis://{}:{}/", host, port);
        let client =
            redis::Client::open(url).map_err(|e| KvError::Connection(e.to_string()))?;

        let manager = client
            .get_connection_manager()
            .await
            .map_err(|e| KvError::Connection(e.to_string()))?;

        tracing::info!("Connected to Redis at {}:{}", host, port);

        Ok(Self { manager })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| KvError::Command(e.to_string()))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let mut conn = self.manager.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| KvError::Command(e.to_string()))
    }
}
