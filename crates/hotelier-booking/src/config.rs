//! Booking core configuration.

use std::time::Duration;

use hotelier_core::access::SUPER_ADMIN_ROLE;

/// Configuration for access scoping and booking orchestration.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// When `false`, every caller is treated as the unrestricted `system`
    /// user and no identity checks run.
    pub security_enabled: bool,
    /// Role granting unrestricted access (default: `ROLE_SUPER_ADMIN`).
    pub super_admin_role: String,
    /// Lifetime of cached booking projections in seconds (default: 300).
    pub cache_ttl_secs: u64,
    /// Payment method recorded when a public booking supplies none.
    pub default_payment_method: String,
}

impl BookingConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            security_enabled: true,
            super_admin_role: SUPER_ADMIN_ROLE.into(),
            cache_ttl_secs: 300,
            default_payment_method: "CARD".into(),
        }
    }
}
