//! Process configuration assembled from `HOTELIER_*` environment variables.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use hotelier_booking::BookingConfig;
use hotelier_cache::CacheConfig;
use hotelier_db::DbConfig;

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub db: DbConfig,
    pub cache: CacheConfig,
    pub booking: BookingConfig,
}

impl ServerConfig {
    /// Read overrides from the environment. Unset variables keep their
    /// defaults; malformed values are errors.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        override_string("HOTELIER_DB_URL", &mut config.db.url);
        override_string("HOTELIER_DB_NAMESPACE", &mut config.db.namespace);
        override_string("HOTELIER_DB_DATABASE", &mut config.db.database);
        override_string("HOTELIER_DB_USER", &mut config.db.username);
        override_string("HOTELIER_DB_PASSWORD", &mut config.db.password);
        override_string("HOTELIER_REDIS_URL", &mut config.cache.url);
        override_string(
            "HOTELIER_SUPER_ADMIN_ROLE",
            &mut config.booking.super_admin_role,
        );
        override_parsed(
            "HOTELIER_SECURITY_ENABLED",
            &mut config.booking.security_enabled,
        )?;
        override_parsed(
            "HOTELIER_CACHE_TTL_SECS",
            &mut config.booking.cache_ttl_secs,
        )?;

        Ok(config)
    }
}

fn override_string(name: &str, target: &mut String) {
    if let Ok(value) = env::var(name) {
        *target = value;
    }
}

fn override_parsed<T>(name: &str, target: &mut T) -> Result<()>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if let Ok(value) = env::var(name) {
        *target = value
            .trim()
            .parse()
            .with_context(|| format!("Failed to parse {name}"))?;
    }
    Ok(())
}
