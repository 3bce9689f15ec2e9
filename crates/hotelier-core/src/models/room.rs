//! Room domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_number: String,
    pub room_type: String,
    /// Price per night. Never negative.
    pub nightly_rate: Decimal,
    pub image_url: String,
    pub short_description: String,
    pub created_at: DateTime<Utc>,
}

/// Row-level input for creating a room. Presentation fields are already
/// resolved by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    pub hotel_id: Uuid,
    pub room_number: String,
    pub room_type: String,
    pub nightly_rate: Decimal,
    pub image_url: String,
    pub short_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoom {
    pub room_number: String,
    pub room_type: String,
    pub nightly_rate: Decimal,
    pub short_description: String,
}
