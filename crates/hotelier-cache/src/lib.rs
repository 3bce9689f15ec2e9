//! Cache store implementations for booking projections.
//!
//! [`RedisCacheStore`] is the production store. [`InMemoryCacheStore`]
//! keeps entries in process and backs tests and single-node setups.

mod config;
mod error;
mod memory;
mod redis_store;

pub use config::CacheConfig;
pub use error::CacheError;
pub use memory::InMemoryCacheStore;
pub use redis_store::RedisCacheStore;
