//! World-readable content: room highlights and the hotel directory.
//!
//! No caller identity is involved; every hotel is visible.

use std::sync::Arc;

use hotelier_core::error::HotelierResult;
use hotelier_core::models::hotel::Hotel;
use hotelier_core::models::room::Room;
use hotelier_core::repository::{
    BookingRepository, GuestRepository, HotelRepository, RoomRepository,
};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::gateway::ScopedEntityGateway;
use crate::presentation::RoomPresentation;

/// Upper bound on highlights returned by one call.
pub const MAX_ROOM_HIGHLIGHTS: usize = 24;

/// Public projection of a room with presentation fallbacks applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomHighlight {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_number: String,
    pub room_type: String,
    pub nightly_rate: Decimal,
    pub image_url: String,
    pub short_description: String,
}

impl From<Room> for RoomHighlight {
    fn from(room: Room) -> Self {
        let image_url = RoomPresentation::resolve_image_url(Some(&room.image_url), &room.room_type);
        let short_description =
            RoomPresentation::resolve_short_description(Some(&room.short_description), &room.room_type);
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            room_number: room.room_number,
            room_type: room.room_type,
            nightly_rate: room.nightly_rate,
            image_url,
            short_description,
        }
    }
}

/// Clamp a requested highlight count into `1..=MAX_ROOM_HIGHLIGHTS`.
pub fn clamp_highlight_limit(requested: i64) -> usize {
    usize::try_from(requested.max(1))
        .unwrap_or(MAX_ROOM_HIGHLIGHTS)
        .min(MAX_ROOM_HIGHLIGHTS)
}

pub struct PublicContentService<H, R, G, B>
where
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
{
    gateway: Arc<ScopedEntityGateway<H, R, G, B>>,
}

impl<H, R, G, B> PublicContentService<H, R, G, B>
where
    H: HotelRepository,
    R: RoomRepository,
    G: GuestRepository,
    B: BookingRepository,
{
    pub fn new(gateway: Arc<ScopedEntityGateway<H, R, G, B>>) -> Self {
        Self { gateway }
    }

    /// Newest rooms first, optionally limited to one hotel.
    pub async fn room_highlights(
        &self,
        limit: i64,
        hotel_id: Option<Uuid>,
    ) -> HotelierResult<Vec<RoomHighlight>> {
        let limit = clamp_highlight_limit(limit);
        let rooms = self.gateway.room_repo();
        let mut source = match hotel_id {
            Some(hotel_id) => rooms.list_by_hotel(hotel_id).await?,
            None => rooms.list().await?,
        };

        source.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        source.truncate(limit);

        debug!(count = source.len(), limit, hotel_id = ?hotel_id, "Room highlights served");
        Ok(source.into_iter().map(RoomHighlight::from).collect())
    }

    /// Every hotel, ordered by name.
    pub async fn hotels(&self) -> HotelierResult<Vec<Hotel>> {
        self.gateway.hotel_repo().list_ordered_by_name().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped_into_range() {
        assert_eq!(clamp_highlight_limit(-5), 1);
        assert_eq!(clamp_highlight_limit(0), 1);
        assert_eq!(clamp_highlight_limit(6), 6);
        assert_eq!(clamp_highlight_limit(24), 24);
        assert_eq!(clamp_highlight_limit(25), MAX_ROOM_HIGHLIGHTS);
        assert_eq!(clamp_highlight_limit(i64::MAX), MAX_ROOM_HIGHLIGHTS);
    }

    #[test]
    fn highlight_applies_presentation_fallbacks() {
        let room = Room {
            id: Uuid::new_v4(),
            hotel_id: Uuid::new_v4(),
            room_number: "501".into(),
            room_type: "Junior Suite".into(),
            nightly_rate: Decimal::new(32000, 2),
            image_url: "ftp://bad/host.jpg".into(),
            short_description: "  ".into(),
            created_at: chrono::Utc::now(),
        };

        let highlight = RoomHighlight::from(room);
        assert_eq!(
            highlight.image_url,
            RoomPresentation::Suite.default_image_url()
        );
        assert_eq!(
            highlight.short_description,
            RoomPresentation::Suite.default_description()
        );
    }
}
