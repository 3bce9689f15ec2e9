//! SurrealDB repository implementations.

mod booking;
mod guest;
mod hotel;
mod recommendation;
mod room;
mod user_scope;

pub use booking::SurrealBookingRepository;
pub use guest::SurrealGuestRepository;
pub use hotel::SurrealHotelRepository;
pub use recommendation::SurrealRecommendationRepository;
pub use room::SurrealRoomRepository;
pub use user_scope::SurrealHotelUserScopeRepository;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

fn parse_uuid(value: &str, field: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(value).map_err(|e| DbError::InvalidRow(format!("invalid {field} UUID: {e}")))
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, DbError> {
    value
        .parse::<NaiveDate>()
        .map_err(|e| DbError::InvalidRow(format!("invalid {field} date: {e}")))
}

fn parse_decimal(value: &str, field: &str) -> Result<Decimal, DbError> {
    value
        .parse::<Decimal>()
        .map_err(|e| DbError::InvalidRow(format!("invalid {field} amount: {e}")))
}
