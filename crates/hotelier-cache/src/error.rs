//! Cache-specific error types and conversions.

use hotelier_core::error::HotelierError;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Cache connection failed: {0}")]
    Connection(String),
}

impl From<CacheError> for HotelierError {
    fn from(err: CacheError) -> Self {
        HotelierError::Cache(err.to_string())
    }
}
