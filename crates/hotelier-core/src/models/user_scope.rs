//! Staff-to-hotel scope mapping.
//!
//! Maps a normalized username to the single hotel that user may act on.
//! Super admins have no mapping; their scope comes from their role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HotelAccessLevel {
    Manager,
    Staff,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelUserScope {
    /// Trimmed, lower-cased username. Primary key.
    pub username: String,
    pub hotel_id: Uuid,
    pub access_level: HotelAccessLevel,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignHotelUserScope {
    pub username: String,
    pub hotel_id: Uuid,
    pub access_level: HotelAccessLevel,
}
