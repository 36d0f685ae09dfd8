//! Configuration module for the Smile Vinyl backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.
//! The Redis variable names (`REDIS_ENDPOINT`, `REDIS_PORT`) match the ones the
//! deployment already provides.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis host for the purchase-marker store
    pub redis_endpoint: String,
    /// Redis port for the purchase-marker store
    pub redis_port: u16,
    /// Object-storage bucket holding the catalog file
    pub catalog_bucket: String,
    /// Object key of the catalog CSV within the bucket
    pub catalog_key: String,
    /// When set, serve the catalog from this local directory instead of S3
    pub catalog_dir: Option<PathBuf>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let redis_endpoint =
            env::var("REDIS_ENDPOINT").unwrap_or_else(|_| "127.0.0.1".to_string());

        let redis_port = env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse()
            .expect("Invalid REDIS_PORT format");

        let catalog_bucket =
            env::var("VINYL_CATALOG_BUCKET").unwrap_or_else(|_| "get-smile-vinyl".to_string());

        let catalog_key =
            env::var("VINYL_CATALOG_KEY").unwrap_or_else(|_| "product.csv".to_string());

        let catalog_dir = env::var("VINYL_CATALOG_DIR").ok().map(PathBuf::from);

        let bind_addr = env::var("VINYL_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid VINYL_BIND_ADDR format");

        let log_level = env::var("VINYL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            redis_endpoint,
            redis_port,
            catalog_bucket,
            catalog_key,
            catalog_dir,
            bind_addr,
            log_level,
        }
    }
}
