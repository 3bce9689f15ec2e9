//! Booking service: creation, lookup, listing and status changes.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use hotelier_core::access::{AccessScope, CallerIdentity};
use hotelier_core::cache::CacheStore;
use hotelier_core::error::HotelierResult;
use hotelier_core::models::booking::{
    Booking, BookingStatus, BookingView, CreateBooking, PaymentStatus,
};
use hotelier_core::models::guest::{CreateGuest, Guest};
use hotelier_core::models::recommendation::BookingRecommendation;
use hotelier_core::repository::{
    BookingRepository, GuestRepository, HotelRepository, RecommendationRepository,
    RoomRepository,
};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::cache::BookingCache;
use crate::config::BookingConfig;
use crate::error::BookingError;
use crate::gateway::ScopedEntityGateway;
use crate::payment::{normalize_payment_method, resolve_payment_reference};
use crate::pricing::{normalize_money, stay_total, validate_stay};
use crate::recommendation::RecommendationTrigger;
use crate::resolver::AccessScopeResolver;

/// Input for a staff-created booking.
#[derive(Debug, Clone)]
pub struct CreateBookingInput {
    pub guest_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

/// Input for an anonymous, fully prepaid booking.
#[derive(Debug, Clone)]
pub struct PublicBookingInput {
    pub room_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub prepayment_amount: Decimal,
    pub payment_method: Option<String>,
    pub payment_reference: Option<String>,
}

/// Booking orchestration.
///
/// Generic over the scope resolver, the repositories and the cache store
/// so that it has no dependency on the database or cache crates.
pub struct BookingService<A, H, R, G, B, Rec, C>
where
    A: AccessScopeResolver,
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
    Rec: RecommendationRepository,
    C: CacheStore,
{
    resolver: Arc<A>,
    gateway: Arc<ScopedEntityGateway<H, R, G, B>>,
    recommendations: RecommendationTrigger<Rec>,
    cache: BookingCache<C>,
    config: BookingConfig,
}

impl<A, H, R, G, B, Rec, C> BookingService<A, H, R, G, B, Rec, C>
where
    A: AccessScopeResolver,
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
    Rec: RecommendationRepository,
    C: CacheStore,
{
    pub fn new(
        resolver: Arc<A>,
        gateway: Arc<ScopedEntityGateway<H, R, G, B>>,
        recommendation_repo: Rec,
        cache_store: C,
        config: BookingConfig,
    ) -> Self {
        Self {
            resolver,
            gateway,
            recommendations: RecommendationTrigger::new(recommendation_repo),
            cache: BookingCache::new(cache_store, config.cache_ttl()),
            config,
        }
    }

    /// Create a booking on behalf of a staff caller.
    ///
    /// Guest and room must both be visible in the caller's scope and
    /// belong to the same hotel.
    pub async fn create(
        &self,
        identity: &CallerIdentity,
        input: CreateBookingInput,
    ) -> HotelierResult<BookingView> {
        validate_stay(input.check_in_date, input.check_out_date)?;
        let scope = self.resolver.resolve(identity).await?;

        let (guest, room) = tokio::try_join!(
            self.gateway.guest(input.guest_id, &scope),
            self.gateway.room(input.room_id, &scope),
        )?;

        if guest.hotel_id != room.hotel_id {
            return Err(BookingError::HotelMismatch.into());
        }

        let total = stay_total(room.nightly_rate, input.check_in_date, input.check_out_date)?;

        let booking = self
            .gateway
            .booking_repo()
            .create(CreateBooking {
                hotel_id: room.hotel_id,
                guest_id: guest.id,
                room_id: room.id,
                check_in_date: input.check_in_date,
                check_out_date: input.check_out_date,
                status: BookingStatus::Created,
                total_amount: total,
                prepayment_amount: normalize_money(Decimal::ZERO),
                payment_status: PaymentStatus::Unpaid,
                payment_method: None,
                payment_reference: None,
                prepaid: false,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            hotel_id = %booking.hotel_id,
            username = %scope.username(),
            "Booking created"
        );

        self.recommendations.generate(&booking).await?;

        let view = BookingView::new(booking, &guest, &room);
        self.cache.put(&view, &scope).await;
        Ok(view)
    }

    /// Create a confirmed, paid booking from the public booking flow.
    ///
    /// The guest is looked up by email within the room's hotel and created
    /// when missing. The prepayment must cover the full stay.
    pub async fn create_public_prepaid(
        &self,
        input: PublicBookingInput,
    ) -> HotelierResult<BookingView> {
        validate_stay(input.check_in_date, input.check_out_date)?;

        let full_name = input.full_name.trim();
        if full_name.is_empty() {
            return Err(BookingError::Blank { field: "fullName" }.into());
        }
        let email = normalize_email(&input.email);
        if email.is_empty() {
            return Err(BookingError::Blank { field: "email" }.into());
        }

        let scope = AccessScope::system();
        let room = self.gateway.room(input.room_id, &scope).await?;
        let guest = self
            .find_or_create_guest(room.hotel_id, full_name, &email)
            .await?;

        let total = stay_total(room.nightly_rate, input.check_in_date, input.check_out_date)?;
        let prepayment = normalize_money(input.prepayment_amount);
        if prepayment < total {
            return Err(BookingError::InsufficientPrepayment { total }.into());
        }

        let booking = self
            .gateway
            .booking_repo()
            .create(CreateBooking {
                hotel_id: room.hotel_id,
                guest_id: guest.id,
                room_id: room.id,
                check_in_date: input.check_in_date,
                check_out_date: input.check_out_date,
                status: BookingStatus::Confirmed,
                total_amount: total,
                prepayment_amount: prepayment,
                payment_status: PaymentStatus::Paid,
                payment_method: Some(normalize_payment_method(
                    input.payment_method.as_deref(),
                    &self.config.default_payment_method,
                )),
                payment_reference: Some(resolve_payment_reference(
                    input.payment_reference.as_deref(),
                )),
                prepaid: true,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            hotel_id = %booking.hotel_id,
            guest_id = %guest.id,
            "Public prepaid booking created"
        );

        self.recommendations.generate(&booking).await?;

        let view = BookingView::new(booking, &guest, &room);
        self.cache.put(&view, &scope).await;
        Ok(view)
    }

    /// Fetch one booking, serving from cache when possible.
    pub async fn get(&self, identity: &CallerIdentity, id: Uuid) -> HotelierResult<BookingView> {
        let scope = self.resolver.resolve(identity).await?;

        if let Some(view) = self.cache.get(id, &scope).await {
            return Ok(view);
        }

        let booking = self.gateway.booking(id, &scope).await?;
        let view = self.enrich(booking, &scope).await?;
        self.cache.put(&view, &scope).await;
        Ok(view)
    }

    /// Bookings visible to the caller, optionally filtered by status.
    pub async fn list(
        &self,
        identity: &CallerIdentity,
        status: Option<BookingStatus>,
    ) -> HotelierResult<Vec<BookingView>> {
        let scope = self.resolver.resolve(identity).await?;
        let bookings = self.gateway.bookings(&scope, status).await?;
        self.enrich_all(bookings, &scope).await
    }

    /// Bookings of every guest record that carries the caller's email,
    /// across all hotels.
    pub async fn list_mine(
        &self,
        identity: &CallerIdentity,
        status: Option<BookingStatus>,
    ) -> HotelierResult<Vec<BookingView>> {
        let email = caller_email(identity)?;

        let guests = self.gateway.guest_repo().list_by_email(&email).await?;
        if guests.is_empty() {
            return Ok(Vec::new());
        }

        let guest_ids: Vec<Uuid> = guests.iter().map(|g| g.id).collect();
        let bookings = self
            .gateway
            .booking_repo()
            .list_by_guest_ids(&guest_ids, status)
            .await?;

        self.enrich_all(bookings, &AccessScope::system()).await
    }

    /// Set a booking's status. Any status may follow any other.
    pub async fn update_status(
        &self,
        identity: &CallerIdentity,
        id: Uuid,
        status: BookingStatus,
    ) -> HotelierResult<BookingView> {
        let scope = self.resolver.resolve(identity).await?;
        let booking = self.gateway.booking(id, &scope).await?;

        let updated = self
            .gateway
            .booking_repo()
            .update_status(booking.id, status, Utc::now())
            .await?;

        info!(
            booking_id = %updated.id,
            status = ?updated.status,
            username = %scope.username(),
            "Booking status updated"
        );

        // Entries cached under other scopes expire on their TTL.
        let view = self.enrich(updated, &scope).await?;
        self.cache.put(&view, &scope).await;
        Ok(view)
    }

    /// Suggestions for a booking visible to the caller, newest first.
    pub async fn recommendations(
        &self,
        identity: &CallerIdentity,
        booking_id: Uuid,
    ) -> HotelierResult<Vec<BookingRecommendation>> {
        let scope = self.resolver.resolve(identity).await?;
        let booking = self.gateway.booking(booking_id, &scope).await?;
        self.recommendations
            .recommendations_for_booking(booking.id)
            .await
    }

    async fn find_or_create_guest(
        &self,
        hotel_id: Uuid,
        full_name: &str,
        email: &str,
    ) -> HotelierResult<Guest> {
        let guests = self.gateway.guest_repo();
        if let Some(guest) = guests.find_by_hotel_and_email(hotel_id, email).await? {
            return Ok(guest);
        }

        let guest = guests
            .create(CreateGuest {
                hotel_id,
                full_name: full_name.to_string(),
                email: email.to_string(),
            })
            .await?;
        info!(guest_id = %guest.id, hotel_id = %hotel_id, "Guest created from public booking");
        Ok(guest)
    }

    async fn enrich(&self, booking: Booking, scope: &AccessScope) -> HotelierResult<BookingView> {
        let (guest, room) = tokio::try_join!(
            self.gateway.guest(booking.guest_id, scope),
            self.gateway.room(booking.room_id, scope),
        )?;
        Ok(BookingView::new(booking, &guest, &room))
    }

    async fn enrich_all(
        &self,
        bookings: Vec<Booking>,
        scope: &AccessScope,
    ) -> HotelierResult<Vec<BookingView>> {
        let mut views = Vec::with_capacity(bookings.len());
        for booking in bookings {
            views.push(self.enrich(booking, scope).await?);
        }
        Ok(views)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Email identifying the caller: the email claim, else a username or
/// preferred username that looks like an address.
fn caller_email(identity: &CallerIdentity) -> Result<String, BookingError> {
    if !identity.authenticated {
        return Err(BookingError::AuthenticationRequired);
    }

    let non_blank = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    let address_like = |value: &Option<String>| non_blank(value).filter(|v| v.contains('@'));

    non_blank(&identity.email)
        .or_else(|| address_like(&identity.username))
        .or_else(|| address_like(&identity.preferred_username))
        .map(|email| normalize_email(&email))
        .ok_or(BookingError::EmailRequired)
}
