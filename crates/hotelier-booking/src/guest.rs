//! Guest registration within the caller's hotel scope.

use std::sync::Arc;

use hotelier_core::access::CallerIdentity;
use hotelier_core::error::HotelierResult;
use hotelier_core::models::guest::{CreateGuest, Guest};
use hotelier_core::repository::{
    BookingRepository, GuestRepository, HotelRepository, RoomRepository,
};
use tracing::info;
use uuid::Uuid;

use crate::error::BookingError;
use crate::gateway::ScopedEntityGateway;
use crate::resolver::AccessScopeResolver;

#[derive(Debug, Clone)]
pub struct GuestInput {
    /// Ignored for scoped callers; optional for unrestricted ones.
    pub hotel_id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
}

pub struct GuestService<A, H, R, G, B>
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

impl<A, H, R, G, B> GuestService<A, H, R, G, B>
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

    /// Register a guest. The email is stored trimmed and lower-cased so
    /// that the public flow and "my bookings" can match it.
    pub async fn create(
        &self,
        identity: &CallerIdentity,
        input: GuestInput,
    ) -> HotelierResult<Guest> {
        let full_name = input.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(BookingError::Blank { field: "fullName" }.into());
        }
        let email = input.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(BookingError::Blank { field: "email" }.into());
        }

        let scope = self.resolver.resolve(identity).await?;
        let hotel_id = self
            .gateway
            .resolve_hotel_for_write(&scope, input.hotel_id)
            .await?;

        let guest = self
            .gateway
            .guest_repo()
            .create(CreateGuest {
                hotel_id,
                full_name,
                email,
            })
            .await?;

        info!(guest_id = %guest.id, hotel_id = %hotel_id, "Guest created");
        Ok(guest)
    }

    pub async fn get(&self, identity: &CallerIdentity, id: Uuid) -> HotelierResult<Guest> {
        let scope = self.resolver.resolve(identity).await?;
        self.gateway.guest(id, &scope).await
    }

    pub async fn list(&self, identity: &CallerIdentity) -> HotelierResult<Vec<Guest>> {
        let scope = self.resolver.resolve(identity).await?;
        self.gateway.guests(&scope).await
    }
}
