//! Redis-backed cache store.
//!
//! Values are stored as plain strings with `SET key value EX ttl`.
//! Redis handles expiry.

use std::time::Duration;

use hotelier_core::cache::CacheStore;
use hotelier_core::error::HotelierResult;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::info;

use crate::config::CacheConfig;
use crate::error::CacheError;

/// Redis cache store sharing one multiplexed connection.
#[derive(Clone)]
pub struct RedisCacheStore {
    conn_manager: ConnectionManager,
}

impl RedisCacheStore {
    /// Connect to Redis.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the server is unreachable.
    pub async fn connect(config: &CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| CacheError::Connection(format!("invalid Redis URL: {e}")))?;

        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::Connection(format!("failed to create connection manager: {e}"))
        })?;

        info!(url = %config.url, "Connected to Redis");

        Ok(Self { conn_manager })
    }
}

impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> HotelierResult<Option<String>> {
        let mut conn = self.conn_manager.clone();
        let value: Option<String> = conn.get(key).await.map_err(CacheError::from)?;
        Ok(value)
    }

    async fn set_with_ttl(&self, key: &str, value: String, ttl: Duration) -> HotelierResult<()> {
        let mut conn = self.conn_manager.clone();
        // EX 0 is rejected by Redis.
        let ttl_seconds = ttl.as_secs().max(1);
        let _: () = conn
            .set_ex(key, value, ttl_seconds)
            .await
            .map_err(CacheError::from)?;
        Ok(())
    }
}
