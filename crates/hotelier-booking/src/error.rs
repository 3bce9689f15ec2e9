//! Booking domain error types.

use hotelier_core::error::HotelierError;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Authenticated username is empty")]
    EmptyUsername,

    #[error("Authenticated user email is required")]
    EmailRequired,

    #[error("User is not assigned to any hotel: {username}")]
    NotAssigned { username: String },

    #[error("Access denied for hotel: {hotel_id}")]
    HotelAccessDenied { hotel_id: Uuid },

    #[error("Only super admin can manage hotels")]
    SuperAdminOnly,

    #[error("checkOutDate must be after checkInDate")]
    InvalidStay,

    #[error("Guest and room must belong to the same hotel")]
    HotelMismatch,

    #[error("Prepayment must cover full booking amount: {total}")]
    InsufficientPrepayment { total: Decimal },

    #[error("hotelId is required because no hotels are configured")]
    NoHotelsConfigured,

    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("nightlyRate must not be negative")]
    NegativeRate,

    #[error("Booking amount is too large")]
    AmountOverflow,

    #[error(
        "Cannot delete hotel with related data. rooms={rooms}, guests={guests}, \
         bookings={bookings}, userScopes={user_scopes}"
    )]
    HotelInUse {
        rooms: u64,
        guests: u64,
        bookings: u64,
        user_scopes: u8,
    },

    #[error("Cannot delete room that has bookings")]
    RoomHasBookings,
}

impl From<BookingError> for HotelierError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::AuthenticationRequired
            | BookingError::EmptyUsername
            | BookingError::EmailRequired => HotelierError::Unauthenticated {
                reason: err.to_string(),
            },
            BookingError::NotAssigned { .. }
            | BookingError::HotelAccessDenied { .. }
            | BookingError::SuperAdminOnly => HotelierError::Forbidden {
                reason: err.to_string(),
            },
            BookingError::HotelInUse { .. } | BookingError::RoomHasBookings => {
                HotelierError::Conflict {
                    message: err.to_string(),
                }
            }
            BookingError::InvalidStay
            | BookingError::HotelMismatch
            | BookingError::InsufficientPrepayment { .. }
            | BookingError::NoHotelsConfigured
            | BookingError::Blank { .. }
            | BookingError::NegativeRate
            | BookingError::AmountOverflow => HotelierError::BadRequest {
                message: err.to_string(),
            },
        }
    }
}
