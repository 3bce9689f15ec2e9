//! Cache-aside storage of booking projections.
//!
//! Entries are keyed by booking id and the caller's scope so that a
//! projection cached for one hotel is never served to another. The cache
//! is an optimization only: every failure is logged and treated as a miss.

use std::time::Duration;

use hotelier_core::access::AccessScope;
use hotelier_core::cache::CacheStore;
use hotelier_core::models::booking::BookingView;
use tracing::{debug, warn};
use uuid::Uuid;

pub fn cache_key(booking_id: Uuid, scope: &AccessScope) -> String {
    format!("booking:{booking_id}:{}", scope.cache_tag())
}

pub struct BookingCache<C: CacheStore> {
    store: C,
    ttl: Duration,
}

impl<C: CacheStore> BookingCache<C> {
    pub fn new(store: C, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub async fn get(&self, booking_id: Uuid, scope: &AccessScope) -> Option<BookingView> {
        let key = cache_key(booking_id, scope);

        let raw = match self.store.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %key, "Booking cache miss");
                return None;
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Booking cache read failed");
                return None;
            }
        };

        match serde_json::from_str::<BookingView>(&raw) {
            Ok(view) => {
                debug!(key = %key, "Booking cache hit");
                Some(view)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding undecodable booking cache entry");
                None
            }
        }
    }

    pub async fn put(&self, view: &BookingView, scope: &AccessScope) {
        let key = cache_key(view.id, scope);

        let payload = match serde_json::to_string(view) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to encode booking for cache");
                return;
            }
        };

        if let Err(e) = self.store.set_with_ttl(&key, payload, self.ttl).await {
            warn!(key = %key, error = %e, "Booking cache write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_separate_scopes() {
        let booking_id = Uuid::new_v4();
        let hotel_id = Uuid::new_v4();

        assert_eq!(
            cache_key(booking_id, &AccessScope::system()),
            format!("booking:{booking_id}:all")
        );
        assert_eq!(
            cache_key(
                booking_id,
                &AccessScope::ScopedToHotel {
                    username: "alice".into(),
                    hotel_id,
                }
            ),
            format!("booking:{booking_id}:hotel:{hotel_id}")
        );
    }
}
