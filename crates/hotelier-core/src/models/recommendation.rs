//! Booking recommendation documents.
//!
//! Append-only: the core never updates or deletes a recommendation.
//! Several may exist for the same booking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecommendation {
    /// Document id assigned by the document store.
    pub id: String,
    pub booking_id: Uuid,
    pub suggestion: String,
    /// Tag of the generator that produced the suggestion.
    pub model: String,
    /// In `0.0..=1.0`.
    pub confidence: f64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRecommendation {
    pub booking_id: Uuid,
    pub suggestion: String,
    pub model: String,
    pub confidence: f64,
    pub generated_at: DateTime<Utc>,
}
