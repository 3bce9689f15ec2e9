//! Scope-aware access to hotel-owned rows.
//!
//! Every read of a hotel-owned entity goes through here so that a scoped
//! caller can never observe another hotel's data. Rows that exist but
//! belong to another hotel are reported exactly like missing rows.

use hotelier_core::access::AccessScope;
use hotelier_core::error::HotelierResult;
use hotelier_core::models::booking::{Booking, BookingStatus};
use hotelier_core::models::guest::Guest;
use hotelier_core::models::room::Room;
use hotelier_core::repository::{
    BookingRepository, GuestRepository, HotelRepository, RoomRepository,
};
use hotelier_core::HotelierError;
use uuid::Uuid;

use crate::error::BookingError;

pub struct ScopedEntityGateway<H, R, G, B>
where
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
{
    hotels: H,
    rooms: R,
    guests: G,
    bookings: B,
}

impl<H, R, G, B> ScopedEntityGateway<H, R, G, B>
where
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
{
    pub fn new(hotels: H, rooms: R, guests: G, bookings: B) -> Self {
        Self {
            hotels,
            rooms,
            guests,
            bookings,
        }
    }

    pub fn hotel_repo(&self) -> &H {
        &self.hotels
    }

    pub fn room_repo(&self) -> &R {
        &self.rooms
    }

    pub fn guest_repo(&self) -> &G {
        &self.guests
    }

    pub fn booking_repo(&self) -> &B {
        &self.bookings
    }

    pub async fn guest(&self, id: Uuid, scope: &AccessScope) -> HotelierResult<Guest> {
        match scope {
            AccessScope::Unrestricted { .. } => self.guests.get_by_id(id).await,
            AccessScope::ScopedToHotel { hotel_id, .. } => {
                self.guests.get_by_id_and_hotel(id, *hotel_id).await
            }
        }
    }

    pub async fn room(&self, id: Uuid, scope: &AccessScope) -> HotelierResult<Room> {
        match scope {
            AccessScope::Unrestricted { .. } => self.rooms.get_by_id(id).await,
            AccessScope::ScopedToHotel { hotel_id, .. } => {
                self.rooms.get_by_id_and_hotel(id, *hotel_id).await
            }
        }
    }

    pub async fn booking(&self, id: Uuid, scope: &AccessScope) -> HotelierResult<Booking> {
        match scope {
            AccessScope::Unrestricted { .. } => self.bookings.get_by_id(id).await,
            AccessScope::ScopedToHotel { hotel_id, .. } => {
                self.bookings.get_by_id_and_hotel(id, *hotel_id).await
            }
        }
    }

    pub async fn guests(&self, scope: &AccessScope) -> HotelierResult<Vec<Guest>> {
        match scope {
            AccessScope::Unrestricted { .. } => self.guests.list().await,
            AccessScope::ScopedToHotel { hotel_id, .. } => {
                self.guests.list_by_hotel(*hotel_id).await
            }
        }
    }

    pub async fn rooms(&self, scope: &AccessScope) -> HotelierResult<Vec<Room>> {
        match scope {
            AccessScope::Unrestricted { .. } => self.rooms.list().await,
            AccessScope::ScopedToHotel { hotel_id, .. } => self.rooms.list_by_hotel(*hotel_id).await,
        }
    }

    pub async fn bookings(
        &self,
        scope: &AccessScope,
        status: Option<BookingStatus>,
    ) -> HotelierResult<Vec<Booking>> {
        match scope {
            AccessScope::Unrestricted { .. } => self.bookings.list(status).await,
            AccessScope::ScopedToHotel { hotel_id, .. } => {
                self.bookings.list_by_hotel(*hotel_id, status).await
            }
        }
    }

    /// Hotel a new row should belong to.
    ///
    /// Scoped callers always write into their own hotel and `requested`
    /// is ignored. Unrestricted callers get `requested` if it exists, or
    /// the first hotel by name when nothing was requested.
    pub async fn resolve_hotel_for_write(
        &self,
        scope: &AccessScope,
        requested: Option<Uuid>,
    ) -> HotelierResult<Uuid> {
        if let AccessScope::ScopedToHotel { hotel_id, .. } = scope {
            return Ok(*hotel_id);
        }

        if let Some(hotel_id) = requested {
            return self.ensure_hotel_exists(hotel_id).await;
        }

        self.hotels
            .list_ordered_by_name()
            .await?
            .first()
            .map(|hotel| hotel.id)
            .ok_or_else(|| BookingError::NoHotelsConfigured.into())
    }

    pub fn assert_can_access_hotel(&self, scope: &AccessScope, hotel_id: Uuid) -> HotelierResult<()> {
        if scope.permits(hotel_id) {
            Ok(())
        } else {
            Err(BookingError::HotelAccessDenied { hotel_id }.into())
        }
    }

    pub async fn ensure_hotel_exists(&self, hotel_id: Uuid) -> HotelierResult<Uuid> {
        if self.hotels.exists(hotel_id).await? {
            Ok(hotel_id)
        } else {
            Err(HotelierError::not_found("Hotel", hotel_id))
        }
    }
}
