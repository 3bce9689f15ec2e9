//! Hotel domain model.
//!
//! A hotel is the unit of tenant isolation: rooms, guests, bookings and
//! staff scope mappings all belong to exactly one hotel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hotel {
    pub id: Uuid,
    /// Short business code (e.g. `LIS-01`).
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub address_line: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a new hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHotel {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub address_line: String,
    pub image_url: Option<String>,
}

/// Full replacement of a hotel's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHotel {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub address_line: String,
    pub image_url: Option<String>,
}
