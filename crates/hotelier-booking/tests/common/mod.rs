//! Shared fixtures: in-memory SurrealDB, in-process cache and fully
//! wired services.

#![allow(dead_code)]

use std::sync::Arc;

use hotelier_booking::{
    BookingConfig, BookingService, GuestInput, GuestService, HotelInput, HotelService,
    PublicContentService, RoomInput, RoomService, ScopeResolver, ScopedEntityGateway,
};
use hotelier_cache::InMemoryCacheStore;
use hotelier_core::access::{CallerIdentity, SUPER_ADMIN_ROLE};
use hotelier_core::models::guest::Guest;
use hotelier_core::models::hotel::Hotel;
use hotelier_core::models::room::Room;
use hotelier_core::models::user_scope::{AssignHotelUserScope, HotelAccessLevel};
use hotelier_core::repository::{HotelUserScopeRepository, RecommendationRepository};
use hotelier_db::Repositories;
use hotelier_db::repository::{
    SurrealBookingRepository, SurrealGuestRepository, SurrealHotelRepository,
    SurrealHotelUserScopeRepository, SurrealRecommendationRepository, SurrealRoomRepository,
};
use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

pub type Gateway = ScopedEntityGateway<
    SurrealHotelRepository<Db>,
    SurrealRoomRepository<Db>,
    SurrealGuestRepository<Db>,
    SurrealBookingRepository<Db>,
>;
pub type Resolver = ScopeResolver<SurrealHotelUserScopeRepository<Db>>;
pub type Bookings<C = InMemoryCacheStore> = BookingService<
    Resolver,
    SurrealHotelRepository<Db>,
    SurrealRoomRepository<Db>,
    SurrealGuestRepository<Db>,
    SurrealBookingRepository<Db>,
    SurrealRecommendationRepository<Db>,
    C,
>;
pub type Hotels = HotelService<
    Resolver,
    SurrealHotelRepository<Db>,
    SurrealRoomRepository<Db>,
    SurrealGuestRepository<Db>,
    SurrealBookingRepository<Db>,
    SurrealHotelUserScopeRepository<Db>,
>;
pub type Rooms = RoomService<
    Resolver,
    SurrealHotelRepository<Db>,
    SurrealRoomRepository<Db>,
    SurrealGuestRepository<Db>,
    SurrealBookingRepository<Db>,
>;
pub type Guests = GuestService<
    Resolver,
    SurrealHotelRepository<Db>,
    SurrealRoomRepository<Db>,
    SurrealGuestRepository<Db>,
    SurrealBookingRepository<Db>,
>;
pub type Public = PublicContentService<
    SurrealHotelRepository<Db>,
    SurrealRoomRepository<Db>,
    SurrealGuestRepository<Db>,
    SurrealBookingRepository<Db>,
>;

pub struct Harness {
    pub db: Surreal<Db>,
    pub config: BookingConfig,
    pub cache: InMemoryCacheStore,
    pub resolver: Arc<Resolver>,
    pub gateway: Arc<Gateway>,
    pub scope_repo: SurrealHotelUserScopeRepository<Db>,
    pub bookings: Bookings,
    pub hotels: Hotels,
    pub rooms: Rooms,
    pub guests: Guests,
    pub public: Public,
}

pub async fn setup() -> Harness {
    setup_with(BookingConfig::default()).await
}

pub async fn setup_with(config: BookingConfig) -> Harness {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    hotelier_db::run_migrations(&db).await.unwrap();

    let repos = Repositories::new(&db);
    let scope_repo = repos.user_scopes;
    let resolver = Arc::new(ScopeResolver::from_config(&config, scope_repo.clone()));
    let gateway = Arc::new(ScopedEntityGateway::new(
        repos.hotels,
        repos.rooms,
        repos.guests,
        repos.bookings,
    ));
    let cache = InMemoryCacheStore::new();

    Harness {
        bookings: BookingService::new(
            resolver.clone(),
            gateway.clone(),
            repos.recommendations,
            cache.clone(),
            config.clone(),
        ),
        hotels: HotelService::new(resolver.clone(), gateway.clone(), scope_repo.clone()),
        rooms: RoomService::new(resolver.clone(), gateway.clone()),
        guests: GuestService::new(resolver.clone(), gateway.clone()),
        public: PublicContentService::new(gateway.clone()),
        db,
        config,
        cache,
        resolver,
        gateway,
        scope_repo,
    }
}

/// Booking service over the same stores but a different cache.
pub fn bookings_with_cache<C: hotelier_core::cache::CacheStore>(h: &Harness, cache: C) -> Bookings<C> {
    BookingService::new(
        h.resolver.clone(),
        h.gateway.clone(),
        SurrealRecommendationRepository::new(h.db.clone()),
        cache,
        h.config.clone(),
    )
}

/// Booking service over the same stores but a different recommendation
/// store.
pub fn bookings_with_recommendations<Rec: RecommendationRepository>(
    h: &Harness,
    recommendations: Rec,
) -> BookingService<
    Resolver,
    SurrealHotelRepository<Db>,
    SurrealRoomRepository<Db>,
    SurrealGuestRepository<Db>,
    SurrealBookingRepository<Db>,
    Rec,
    InMemoryCacheStore,
> {
    BookingService::new(
        h.resolver.clone(),
        h.gateway.clone(),
        recommendations,
        h.cache.clone(),
        h.config.clone(),
    )
}

pub fn admin() -> CallerIdentity {
    CallerIdentity::authenticated("root@example.com").with_role(SUPER_ADMIN_ROLE)
}

/// An authenticated staff identity mapped to `hotel_id`.
pub async fn staff(h: &Harness, username: &str, hotel_id: Uuid) -> CallerIdentity {
    h.scope_repo
        .assign(AssignHotelUserScope {
            username: username.into(),
            hotel_id,
            access_level: HotelAccessLevel::Staff,
        })
        .await
        .unwrap();
    CallerIdentity::authenticated(username).with_role("ROLE_STAFF")
}

pub async fn seed_hotel(h: &Harness, code: &str, name: &str) -> Hotel {
    h.hotels
        .create(
            &admin(),
            HotelInput {
                code: code.into(),
                name: name.into(),
                city: "Lisbon".into(),
                country: "PT".into(),
                address_line: "Rua Augusta 1".into(),
                image_url: None,
            },
        )
        .await
        .unwrap()
}

/// Room priced at `rate_cents / 100` per night.
pub async fn seed_room(h: &Harness, hotel_id: Uuid, number: &str, rate_cents: i64) -> Room {
    h.rooms
        .create(
            &admin(),
            RoomInput {
                hotel_id: Some(hotel_id),
                room_number: number.into(),
                room_type: "Deluxe".into(),
                nightly_rate: Decimal::new(rate_cents, 2),
                image_url: None,
                short_description: None,
            },
        )
        .await
        .unwrap()
}

pub async fn seed_guest(h: &Harness, hotel_id: Uuid, full_name: &str, email: &str) -> Guest {
    h.guests
        .create(
            &admin(),
            GuestInput {
                hotel_id: Some(hotel_id),
                full_name: full_name.into(),
                email: email.into(),
            },
        )
        .await
        .unwrap()
}
