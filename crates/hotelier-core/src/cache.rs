//! Cache store abstraction.
//!
//! A plain string key/value store with per-entry expiry. Callers decide
//! what a failure means; the booking cache treats every failure as a miss.

use std::time::Duration;

use crate::error::HotelierResult;

pub trait CacheStore: Send + Sync {
    /// Returns `None` on a miss or an expired entry.
    fn get(&self, key: &str) -> impl Future<Output = HotelierResult<Option<String>>> + Send;
    fn set_with_ttl(
        &self,
        key: &str,
        value: String,
        ttl: Duration,
    ) -> impl Future<Output = HotelierResult<()>> + Send;
}
