//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Methods taking a `hotel_id`
//! filter by owning hotel; the unfiltered variants exist for
//! unrestricted callers and are never called on behalf of a scoped one.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::HotelierResult;
use crate::models::{
    booking::{Booking, BookingStatus, CreateBooking},
    guest::{CreateGuest, Guest},
    hotel::{CreateHotel, Hotel, UpdateHotel},
    recommendation::{BookingRecommendation, CreateBookingRecommendation},
    room::{CreateRoom, Room, UpdateRoom},
    user_scope::{AssignHotelUserScope, HotelUserScope},
};

// ---------------------------------------------------------------------------
// Hotels (global)
// ---------------------------------------------------------------------------

pub trait HotelRepository: Send + Sync {
    fn create(&self, input: CreateHotel) -> impl Future<Output = HotelierResult<Hotel>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HotelierResult<Hotel>> + Send;
    fn exists(&self, id: Uuid) -> impl Future<Output = HotelierResult<bool>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateHotel,
    ) -> impl Future<Output = HotelierResult<Hotel>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = HotelierResult<()>> + Send;
    /// All hotels, ordered by name ascending.
    fn list_ordered_by_name(&self) -> impl Future<Output = HotelierResult<Vec<Hotel>>> + Send;
}

// ---------------------------------------------------------------------------
// Hotel-owned rows
// ---------------------------------------------------------------------------

pub trait RoomRepository: Send + Sync {
    fn create(&self, input: CreateRoom) -> impl Future<Output = HotelierResult<Room>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HotelierResult<Room>> + Send;
    fn get_by_id_and_hotel(
        &self,
        id: Uuid,
        hotel_id: Uuid,
    ) -> impl Future<Output = HotelierResult<Room>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateRoom,
    ) -> impl Future<Output = HotelierResult<Room>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = HotelierResult<()>> + Send;
    fn list(&self) -> impl Future<Output = HotelierResult<Vec<Room>>> + Send;
    fn list_by_hotel(
        &self,
        hotel_id: Uuid,
    ) -> impl Future<Output = HotelierResult<Vec<Room>>> + Send;
    fn count_by_hotel(&self, hotel_id: Uuid) -> impl Future<Output = HotelierResult<u64>> + Send;
}

pub trait GuestRepository: Send + Sync {
    fn create(&self, input: CreateGuest) -> impl Future<Output = HotelierResult<Guest>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HotelierResult<Guest>> + Send;
    fn get_by_id_and_hotel(
        &self,
        id: Uuid,
        hotel_id: Uuid,
    ) -> impl Future<Output = HotelierResult<Guest>> + Send;
    /// Natural-key lookup used by the public booking flow.
    fn find_by_hotel_and_email(
        &self,
        hotel_id: Uuid,
        email: &str,
    ) -> impl Future<Output = HotelierResult<Option<Guest>>> + Send;
    /// Every guest row carrying this email, across all hotels.
    fn list_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = HotelierResult<Vec<Guest>>> + Send;
    fn list(&self) -> impl Future<Output = HotelierResult<Vec<Guest>>> + Send;
    fn list_by_hotel(
        &self,
        hotel_id: Uuid,
    ) -> impl Future<Output = HotelierResult<Vec<Guest>>> + Send;
    fn count_by_hotel(&self, hotel_id: Uuid) -> impl Future<Output = HotelierResult<u64>> + Send;
}

pub trait BookingRepository: Send + Sync {
    fn create(&self, input: CreateBooking) -> impl Future<Output = HotelierResult<Booking>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HotelierResult<Booking>> + Send;
    fn get_by_id_and_hotel(
        &self,
        id: Uuid,
        hotel_id: Uuid,
    ) -> impl Future<Output = HotelierResult<Booking>> + Send;
    /// Sets the status and bumps `updated_at`.
    fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = HotelierResult<Booking>> + Send;
    fn list(
        &self,
        status: Option<BookingStatus>,
    ) -> impl Future<Output = HotelierResult<Vec<Booking>>> + Send;
    fn list_by_hotel(
        &self,
        hotel_id: Uuid,
        status: Option<BookingStatus>,
    ) -> impl Future<Output = HotelierResult<Vec<Booking>>> + Send;
    fn list_by_guest_ids(
        &self,
        guest_ids: &[Uuid],
        status: Option<BookingStatus>,
    ) -> impl Future<Output = HotelierResult<Vec<Booking>>> + Send;
    fn count_by_hotel(&self, hotel_id: Uuid) -> impl Future<Output = HotelierResult<u64>> + Send;
    fn exists_by_room(&self, room_id: Uuid) -> impl Future<Output = HotelierResult<bool>> + Send;
}

// ---------------------------------------------------------------------------
// Staff scope mapping (owned externally, read by the core)
// ---------------------------------------------------------------------------

pub trait HotelUserScopeRepository: Send + Sync {
    /// Create or replace the mapping for a username.
    fn assign(
        &self,
        input: AssignHotelUserScope,
    ) -> impl Future<Output = HotelierResult<HotelUserScope>> + Send;
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = HotelierResult<Option<HotelUserScope>>> + Send;
    fn exists_by_hotel_id(
        &self,
        hotel_id: Uuid,
    ) -> impl Future<Output = HotelierResult<bool>> + Send;
}

// ---------------------------------------------------------------------------
// Recommendations (document store, append-only)
// ---------------------------------------------------------------------------

pub trait RecommendationRepository: Send + Sync {
    /// Append a new document. No update or delete operations exist.
    fn append(
        &self,
        input: CreateBookingRecommendation,
    ) -> impl Future<Output = HotelierResult<BookingRecommendation>> + Send;
    /// All documents for a booking, newest first.
    fn list_by_booking(
        &self,
        booking_id: Uuid,
    ) -> impl Future<Output = HotelierResult<Vec<BookingRecommendation>>> + Send;
}
