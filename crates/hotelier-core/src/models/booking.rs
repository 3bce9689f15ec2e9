//! Booking domain model and its caller-facing projection.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::guest::Guest;
use super::room::Room;

/// Booking lifecycle label. No transition order is enforced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Created,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub guest_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    /// Exclusive; always after `check_in_date`.
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub total_amount: Decimal,
    pub prepayment_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub payment_reference: Option<String>,
    pub prepaid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields persisted when a booking is created. Timestamps are assigned
/// by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    pub hotel_id: Uuid,
    pub guest_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub total_amount: Decimal,
    pub prepayment_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub payment_reference: Option<String>,
    pub prepaid: bool,
}

/// Flat booking projection returned to callers and stored in the cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub guest_id: Uuid,
    pub guest_full_name: String,
    pub room_id: Uuid,
    pub room_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub total_amount: Decimal,
    pub prepayment_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub payment_reference: Option<String>,
    pub prepaid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingView {
    pub fn new(booking: Booking, guest: &Guest, room: &Room) -> Self {
        Self {
            id: booking.id,
            hotel_id: booking.hotel_id,
            guest_id: booking.guest_id,
            guest_full_name: guest.full_name.clone(),
            room_id: booking.room_id,
            room_number: room.room_number.clone(),
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            status: booking.status,
            total_amount: booking.total_amount,
            prepayment_amount: booking.prepayment_amount,
            payment_status: booking.payment_status,
            payment_method: booking.payment_method,
            payment_reference: booking.payment_reference,
            prepaid: booking.prepaid,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
