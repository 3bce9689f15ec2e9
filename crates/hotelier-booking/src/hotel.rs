//! Hotel management. Only unrestricted callers may create, update or
//! delete hotels.

use std::sync::Arc;

use hotelier_core::access::{AccessScope, CallerIdentity};
use hotelier_core::error::HotelierResult;
use hotelier_core::models::hotel::{CreateHotel, Hotel, UpdateHotel};
use hotelier_core::repository::{
    BookingRepository, GuestRepository, HotelRepository, HotelUserScopeRepository,
    RoomRepository,
};
use tracing::info;
use uuid::Uuid;

use crate::error::BookingError;
use crate::gateway::ScopedEntityGateway;
use crate::resolver::AccessScopeResolver;

/// Editable hotel fields as supplied by a caller.
#[derive(Debug, Clone)]
pub struct HotelInput {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub address_line: String,
    pub image_url: Option<String>,
}

impl HotelInput {
    fn normalized(self) -> Result<UpdateHotel, BookingError> {
        let code = self.code.trim().to_string();
        let name = self.name.trim().to_string();
        if code.is_empty() {
            return Err(BookingError::Blank { field: "code" });
        }
        if name.is_empty() {
            return Err(BookingError::Blank { field: "name" });
        }

        Ok(UpdateHotel {
            code,
            name,
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
            address_line: self.address_line.trim().to_string(),
            image_url: self
                .image_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        })
    }
}

pub struct HotelService<A, H, R, G, B, S>
where
    A: AccessScopeResolver,
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
    S: HotelUserScopeRepository,
{
    resolver: Arc<A>,
    gateway: Arc<ScopedEntityGateway<H, R, G, B>>,
    scopes: S,
}

impl<A, H, R, G, B, S> HotelService<A, H, R, G, B, S>
where
    A: AccessScopeResolver,
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
    S: HotelUserScopeRepository,
{
    pub fn new(resolver: Arc<A>, gateway: Arc<ScopedEntityGateway<H, R, G, B>>, scopes: S) -> Self {
        Self {
            resolver,
            gateway,
            scopes,
        }
    }

    /// Hotels visible to the caller, ordered by name.
    pub async fn list(&self, identity: &CallerIdentity) -> HotelierResult<Vec<Hotel>> {
        let scope = self.resolver.resolve(identity).await?;
        let hotels = self.gateway.hotel_repo().list_ordered_by_name().await?;
        Ok(hotels
            .into_iter()
            .filter(|hotel| scope.permits(hotel.id))
            .collect())
    }

    pub async fn create(
        &self,
        identity: &CallerIdentity,
        input: HotelInput,
    ) -> HotelierResult<Hotel> {
        let scope = self.require_unrestricted(identity).await?;
        let fields = input.normalized()?;

        let hotel = self
            .gateway
            .hotel_repo()
            .create(CreateHotel {
                code: fields.code,
                name: fields.name,
                city: fields.city,
                country: fields.country,
                address_line: fields.address_line,
                image_url: fields.image_url,
            })
            .await?;

        info!(hotel_id = %hotel.id, code = %hotel.code, username = %scope.username(), "Hotel created");
        Ok(hotel)
    }

    pub async fn update(
        &self,
        identity: &CallerIdentity,
        id: Uuid,
        input: HotelInput,
    ) -> HotelierResult<Hotel> {
        self.require_unrestricted(identity).await?;
        let fields = input.normalized()?;

        let hotels = self.gateway.hotel_repo();
        hotels.get_by_id(id).await?;
        hotels.update(id, fields).await
    }

    /// Delete a hotel that nothing references any more.
    pub async fn delete(&self, identity: &CallerIdentity, id: Uuid) -> HotelierResult<()> {
        let scope = self.require_unrestricted(identity).await?;
        self.gateway.hotel_repo().get_by_id(id).await?;

        let (rooms, guests, bookings, has_scopes) = tokio::try_join!(
            self.gateway.room_repo().count_by_hotel(id),
            self.gateway.guest_repo().count_by_hotel(id),
            self.gateway.booking_repo().count_by_hotel(id),
            self.scopes.exists_by_hotel_id(id),
        )?;

        if rooms > 0 || guests > 0 || bookings > 0 || has_scopes {
            return Err(BookingError::HotelInUse {
                rooms,
                guests,
                bookings,
                user_scopes: u8::from(has_scopes),
            }
            .into());
        }

        self.gateway.hotel_repo().delete(id).await?;
        info!(hotel_id = %id, username = %scope.username(), "Hotel deleted");
        Ok(())
    }

    async fn require_unrestricted(&self, identity: &CallerIdentity) -> HotelierResult<AccessScope> {
        let scope = self.resolver.resolve(identity).await?;
        if !scope.is_unrestricted() {
            return Err(BookingError::SuperAdminOnly.into());
        }
        Ok(scope)
    }
}
