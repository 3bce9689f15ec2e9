//! SurrealDB connection management and repository wiring.

use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use surrealdb::{Connection, Surreal};
use tracing::info;

use crate::error::DbError;
use crate::repository::{
    SurrealBookingRepository, SurrealGuestRepository, SurrealHotelRepository,
    SurrealHotelUserScopeRepository, SurrealRecommendationRepository, SurrealRoomRepository,
};
use crate::schema::run_migrations;

#[derive(Debug, Clone)]
pub struct DbConfig {
    /// `host:port`, optionally prefixed with `ws://` or `wss://`.
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "hotelier".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    /// Address handed to the WebSocket engine, without any scheme.
    pub fn endpoint(&self) -> &str {
        let url = self.url.trim();
        url.strip_prefix("ws://")
            .or_else(|| url.strip_prefix("wss://"))
            .unwrap_or(url)
            .trim_end_matches('/')
    }
}

/// Every repository the booking core needs, sharing one client.
#[derive(Clone)]
pub struct Repositories<C: Connection> {
    pub hotels: SurrealHotelRepository<C>,
    pub rooms: SurrealRoomRepository<C>,
    pub guests: SurrealGuestRepository<C>,
    pub bookings: SurrealBookingRepository<C>,
    pub user_scopes: SurrealHotelUserScopeRepository<C>,
    pub recommendations: SurrealRecommendationRepository<C>,
}

impl<C: Connection> Repositories<C> {
    pub fn new(db: &Surreal<C>) -> Self {
        Self {
            hotels: SurrealHotelRepository::new(db.clone()),
            rooms: SurrealRoomRepository::new(db.clone()),
            guests: SurrealGuestRepository::new(db.clone()),
            bookings: SurrealBookingRepository::new(db.clone()),
            user_scopes: SurrealHotelUserScopeRepository::new(db.clone()),
            recommendations: SurrealRecommendationRepository::new(db.clone()),
        }
    }
}

#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Connect as root, select the namespace and database, and bring the
    /// schema up to date.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        let endpoint = config.endpoint();
        info!(
            endpoint,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to SurrealDB"
        );

        let db = Surreal::new::<Ws>(endpoint).await?;
        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;
        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        run_migrations(&db).await?;
        info!(endpoint, "SurrealDB ready");

        Ok(Self { db })
    }

    pub fn repositories(&self) -> Repositories<Client> {
        Repositories::new(&self.db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DbConfig {
        DbConfig {
            url: url.into(),
            ..DbConfig::default()
        }
    }

    #[test]
    fn endpoint_drops_scheme_and_trailing_slash() {
        assert_eq!(with_url("127.0.0.1:8000").endpoint(), "127.0.0.1:8000");
        assert_eq!(with_url("ws://db:8000/").endpoint(), "db:8000");
        assert_eq!(with_url(" wss://db.internal:443 ").endpoint(), "db.internal:443");
    }
}
