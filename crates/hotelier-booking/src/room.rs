//! Room management within the caller's hotel scope.

use std::sync::Arc;

use hotelier_core::access::CallerIdentity;
use hotelier_core::error::HotelierResult;
use hotelier_core::models::room::{CreateRoom, Room, UpdateRoom};
use hotelier_core::repository::{
    BookingRepository, GuestRepository, HotelRepository, RoomRepository,
};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::error::BookingError;
use crate::gateway::ScopedEntityGateway;
use crate::presentation::RoomPresentation;
use crate::resolver::AccessScopeResolver;

#[derive(Debug, Clone)]
pub struct RoomInput {
    /// Ignored for scoped callers; optional for unrestricted ones.
    pub hotel_id: Option<Uuid>,
    pub room_number: String,
    pub room_type: String,
    pub nightly_rate: Decimal,
    pub image_url: Option<String>,
    pub short_description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RoomUpdateInput {
    pub room_number: String,
    pub room_type: String,
    pub nightly_rate: Decimal,
    pub short_description: Option<String>,
}

fn required(value: &str, field: &'static str) -> Result<String, BookingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::Blank { field });
    }
    Ok(trimmed.to_string())
}

fn check_rate(rate: Decimal) -> Result<Decimal, BookingError> {
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(BookingError::NegativeRate);
    }
    Ok(rate)
}

pub struct RoomService<A, H, R, G, B>
where
    A: AccessScopeResolver,
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
{
    resolver: Arc<A>,
    gateway: Arc<ScopedEntityGateway<H, R, G, B>>,
}

impl<A, H, R, G, B> RoomService<A, H, R, G, B>
where
    A: AccessScopeResolver,
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
{
    pub fn new(resolver: Arc<A>, gateway: Arc<ScopedEntityGateway<H, R, G, B>>) -> Self {
        Self { resolver, gateway }
    }

    pub async fn create(&self, identity: &CallerIdentity, input: RoomInput) -> HotelierResult<Room> {
        let room_number = required(&input.room_number, "roomNumber")?;
        let room_type = required(&input.room_type, "roomType")?;
        let nightly_rate = check_rate(input.nightly_rate)?;

        let scope = self.resolver.resolve(identity).await?;
        let hotel_id = self
            .gateway
            .resolve_hotel_for_write(&scope, input.hotel_id)
            .await?;

        let room = self
            .gateway
            .room_repo()
            .create(CreateRoom {
                hotel_id,
                image_url: RoomPresentation::resolve_image_url(
                    input.image_url.as_deref(),
                    &room_type,
                ),
                short_description: RoomPresentation::resolve_short_description(
                    input.short_description.as_deref(),
                    &room_type,
                ),
                room_number,
                room_type,
                nightly_rate,
            })
            .await?;

        info!(room_id = %room.id, hotel_id = %hotel_id, "Room created");
        Ok(room)
    }

    pub async fn get(&self, identity: &CallerIdentity, id: Uuid) -> HotelierResult<Room> {
        let scope = self.resolver.resolve(identity).await?;
        self.gateway.room(id, &scope).await
    }

    pub async fn list(&self, identity: &CallerIdentity) -> HotelierResult<Vec<Room>> {
        let scope = self.resolver.resolve(identity).await?;
        self.gateway.rooms(&scope).await
    }

    /// Replace number, type, rate and description. The image is kept.
    pub async fn update(
        &self,
        identity: &CallerIdentity,
        id: Uuid,
        input: RoomUpdateInput,
    ) -> HotelierResult<Room> {
        let room_number = required(&input.room_number, "roomNumber")?;
        let room_type = required(&input.room_type, "roomType")?;
        let nightly_rate = check_rate(input.nightly_rate)?;

        let scope = self.resolver.resolve(identity).await?;
        let room = self.gateway.room(id, &scope).await?;

        self.gateway
            .room_repo()
            .update(
                room.id,
                UpdateRoom {
                    short_description: RoomPresentation::resolve_short_description(
                        input.short_description.as_deref(),
                        &room_type,
                    ),
                    room_number,
                    room_type,
                    nightly_rate,
                },
            )
            .await
    }

    /// Delete a room that no booking references.
    pub async fn delete(&self, identity: &CallerIdentity, id: Uuid) -> HotelierResult<()> {
        let scope = self.resolver.resolve(identity).await?;
        let room = self.gateway.room(id, &scope).await?;

        if self.gateway.booking_repo().exists_by_room(room.id).await? {
            return Err(BookingError::RoomHasBookings.into());
        }

        self.gateway.room_repo().delete(room.id).await?;
        info!(room_id = %room.id, hotel_id = %room.hotel_id, "Room deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_must_not_be_negative() {
        assert!(check_rate(Decimal::ZERO).is_ok());
        assert!(check_rate(Decimal::new(9950, 2)).is_ok());
        assert!(matches!(
            check_rate(Decimal::new(-1, 2)),
            Err(BookingError::NegativeRate)
        ));
    }

    #[test]
    fn required_fields_are_trimmed() {
        assert_eq!(required(" 101 ", "roomNumber").unwrap(), "101");
        assert!(matches!(
            required("   ", "roomType"),
            Err(BookingError::Blank { field: "roomType" })
        ));
    }
}
