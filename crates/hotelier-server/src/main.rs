//! Hotelier server: wires SurrealDB, Redis and the booking core.

mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use hotelier_booking::{
    BookingService, GuestService, HotelService, PublicContentService, RoomService, ScopeResolver,
    ScopedEntityGateway,
};
use hotelier_cache::RedisCacheStore;
use hotelier_db::DbManager;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hotelier=info")),
        )
        .json()
        .init();

    tracing::info!("Starting Hotelier server...");

    let config = ServerConfig::from_env()?;

    let db = DbManager::connect(&config.db)
        .await
        .context("Failed to prepare SurrealDB")?;

    let cache = RedisCacheStore::connect(&config.cache)
        .await
        .context("Failed to connect to Redis")?;

    let repos = db.repositories();
    let resolver = Arc::new(ScopeResolver::from_config(
        &config.booking,
        repos.user_scopes.clone(),
    ));
    let gateway = Arc::new(ScopedEntityGateway::new(
        repos.hotels,
        repos.rooms,
        repos.guests,
        repos.bookings,
    ));

    let _bookings = BookingService::new(
        resolver.clone(),
        gateway.clone(),
        repos.recommendations,
        cache,
        config.booking.clone(),
    );
    let _hotels = HotelService::new(resolver.clone(), gateway.clone(), repos.user_scopes);
    let _rooms = RoomService::new(resolver.clone(), gateway.clone());
    let _guests = GuestService::new(resolver, gateway.clone());
    let _public = PublicContentService::new(gateway);

    if config.booking.security_enabled {
        tracing::info!(
            super_admin_role = %config.booking.super_admin_role,
            "Hotel scoping enabled"
        );
    } else {
        tracing::warn!("Security disabled: all callers resolve to the system scope");
    }
    tracing::info!(
        cache_ttl_secs = config.booking.cache_ttl_secs,
        "Booking services ready"
    );

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!("Hotelier server stopped.");
    Ok(())
}
