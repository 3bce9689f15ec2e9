//! SurrealDB implementation of [`BookingRepository`].
//!
//! Dates are stored as ISO `YYYY-MM-DD` strings and amounts as decimal
//! strings. Listing queries share one builder that appends an optional
//! status predicate.

use chrono::{DateTime, Utc};
use hotelier_core::error::HotelierResult;
use hotelier_core::models::booking::{Booking, BookingStatus, CreateBooking, PaymentStatus};
use hotelier_core::repository::BookingRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{CountRow, parse_date, parse_decimal, parse_uuid};
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct BookingRow {
    hotel_id: String,
    guest_id: String,
    room_id: String,
    check_in_date: String,
    check_out_date: String,
    status: String,
    total_amount: String,
    prepayment_amount: String,
    payment_status: String,
    payment_method: Option<String>,
    payment_reference: Option<String>,
    prepaid: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct BookingRowWithId {
    record_id: String,
    hotel_id: String,
    guest_id: String,
    room_id: String,
    check_in_date: String,
    check_out_date: String,
    status: String,
    total_amount: String,
    prepayment_amount: String,
    payment_status: String,
    payment_method: Option<String>,
    payment_reference: Option<String>,
    prepaid: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_status(s: &str) -> Result<BookingStatus, DbError> {
    match s {
        "CREATED" => Ok(BookingStatus::Created),
        "CONFIRMED" => Ok(BookingStatus::Confirmed),
        "CHECKED_IN" => Ok(BookingStatus::CheckedIn),
        "CHECKED_OUT" => Ok(BookingStatus::CheckedOut),
        "CANCELLED" => Ok(BookingStatus::Cancelled),
        other => Err(DbError::InvalidRow(format!("unknown booking status: {other}"))),
    }
}

fn status_to_string(s: BookingStatus) -> &'static str {
    match s {
        BookingStatus::Created => "CREATED",
        BookingStatus::Confirmed => "CONFIRMED",
        BookingStatus::CheckedIn => "CHECKED_IN",
        BookingStatus::CheckedOut => "CHECKED_OUT",
        BookingStatus::Cancelled => "CANCELLED",
    }
}

fn parse_payment_status(s: &str) -> Result<PaymentStatus, DbError> {
    match s {
        "UNPAID" => Ok(PaymentStatus::Unpaid),
        "PAID" => Ok(PaymentStatus::Paid),
        "REFUNDED" => Ok(PaymentStatus::Refunded),
        other => Err(DbError::InvalidRow(format!("unknown payment status: {other}"))),
    }
}

fn payment_status_to_string(s: PaymentStatus) -> &'static str {
    match s {
        PaymentStatus::Unpaid => "UNPAID",
        PaymentStatus::Paid => "PAID",
        PaymentStatus::Refunded => "REFUNDED",
    }
}

impl BookingRow {
    fn into_booking(self, id: Uuid) -> Result<Booking, DbError> {
        Ok(Booking {
            id,
            hotel_id: parse_uuid(&self.hotel_id, "hotel")?,
            guest_id: parse_uuid(&self.guest_id, "guest")?,
            room_id: parse_uuid(&self.room_id, "room")?,
            check_in_date: parse_date(&self.check_in_date, "check_in_date")?,
            check_out_date: parse_date(&self.check_out_date, "check_out_date")?,
            status: parse_status(&self.status)?,
            total_amount: parse_decimal(&self.total_amount, "total_amount")?,
            prepayment_amount: parse_decimal(&self.prepayment_amount, "prepayment_amount")?,
            payment_status: parse_payment_status(&self.payment_status)?,
            payment_method: self.payment_method,
            payment_reference: self.payment_reference,
            prepaid: self.prepaid,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl BookingRowWithId {
    fn try_into_booking(self) -> Result<Booking, DbError> {
        let id = parse_uuid(&self.record_id, "booking")?;
        BookingRow {
            hotel_id: self.hotel_id,
            guest_id: self.guest_id,
            room_id: self.room_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            status: self.status,
            total_amount: self.total_amount,
            prepayment_amount: self.prepayment_amount,
            payment_status: self.payment_status,
            payment_method: self.payment_method,
            payment_reference: self.payment_reference,
            prepaid: self.prepaid,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_booking(id)
    }
}

/// SurrealDB implementation of the Booking repository.
#[derive(Clone)]
pub struct SurrealBookingRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealBookingRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Run a listing query. `filters` are ANDed together with an
    /// optional status predicate.
    async fn select_many(
        &self,
        filters: &[&str],
        binds: Vec<(&'static str, String)>,
        guest_ids: Option<Vec<String>>,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, DbError> {
        let mut predicates: Vec<&str> = filters.to_vec();
        if status.is_some() {
            predicates.push("status = $status");
        }

        let where_clause = if predicates.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", predicates.join(" AND "))
        };
        let query = format!(
            "SELECT meta::id(id) AS record_id, * FROM booking \
             {where_clause}ORDER BY created_at ASC"
        );

        let mut builder = self.db.query(&query);
        for bind in binds {
            builder = builder.bind(bind);
        }
        if let Some(guest_ids) = guest_ids {
            builder = builder.bind(("guest_ids", guest_ids));
        }
        if let Some(status) = status {
            builder = builder.bind(("status", status_to_string(status).to_string()));
        }

        let mut result = builder.await?;
        let rows: Vec<BookingRowWithId> = result.take(0)?;

        rows.into_iter()
            .map(|row| row.try_into_booking())
            .collect::<Result<Vec<_>, DbError>>()
    }
}

impl<C: Connection> BookingRepository for SurrealBookingRepository<C> {
    async fn create(&self, input: CreateBooking) -> HotelierResult<Booking> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('booking', $id) SET \
                 hotel_id = $hotel_id, guest_id = $guest_id, \
                 room_id = $room_id, \
                 check_in_date = $check_in_date, \
                 check_out_date = $check_out_date, \
                 status = $status, \
                 total_amount = $total_amount, \
                 prepayment_amount = $prepayment_amount, \
                 payment_status = $payment_status, \
                 payment_method = $payment_method, \
                 payment_reference = $payment_reference, \
                 prepaid = $prepaid",
            )
            .bind(("id", id_str.clone()))
            .bind(("hotel_id", input.hotel_id.to_string()))
            .bind(("guest_id", input.guest_id.to_string()))
            .bind(("room_id", input.room_id.to_string()))
            .bind(("check_in_date", input.check_in_date.to_string()))
            .bind(("check_out_date", input.check_out_date.to_string()))
            .bind(("status", status_to_string(input.status).to_string()))
            .bind(("total_amount", input.total_amount.to_string()))
            .bind(("prepayment_amount", input.prepayment_amount.to_string()))
            .bind((
                "payment_status",
                payment_status_to_string(input.payment_status).to_string(),
            ))
            .bind(("payment_method", input.payment_method))
            .bind(("payment_reference", input.payment_reference))
            .bind(("prepaid", input.prepaid))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<BookingRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Booking".into(),
            id: id_str,
        })?;

        Ok(row.into_booking(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> HotelierResult<Booking> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('booking', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<BookingRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Booking".into(),
            id: id_str,
        })?;

        Ok(row.into_booking(id)?)
    }

    async fn get_by_id_and_hotel(&self, id: Uuid, hotel_id: Uuid) -> HotelierResult<Booking> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('booking', $id) \
                 WHERE hotel_id = $hotel_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("hotel_id", hotel_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<BookingRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Booking".into(),
            id: id_str,
        })?;

        Ok(row.into_booking(id)?)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> HotelierResult<Booking> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('booking', $id) SET \
                 status = $status, updated_at = $updated_at",
            )
            .bind(("id", id_str.clone()))
            .bind(("status", status_to_string(status).to_string()))
            .bind(("updated_at", updated_at))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<BookingRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Booking".into(),
            id: id_str,
        })?;

        Ok(row.into_booking(id)?)
    }

    async fn list(&self, status: Option<BookingStatus>) -> HotelierResult<Vec<Booking>> {
        Ok(self.select_many(&[], Vec::new(), None, status).await?)
    }

    async fn list_by_hotel(
        &self,
        hotel_id: Uuid,
        status: Option<BookingStatus>,
    ) -> HotelierResult<Vec<Booking>> {
        Ok(self
            .select_many(
                &["hotel_id = $hotel_id"],
                vec![("hotel_id", hotel_id.to_string())],
                None,
                status,
            )
            .await?)
    }

    async fn list_by_guest_ids(
        &self,
        guest_ids: &[Uuid],
        status: Option<BookingStatus>,
    ) -> HotelierResult<Vec<Booking>> {
        if guest_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = guest_ids.iter().map(Uuid::to_string).collect();
        Ok(self
            .select_many(&["guest_id IN $guest_ids"], Vec::new(), Some(ids), status)
            .await?)
    }

    async fn count_by_hotel(&self, hotel_id: Uuid) -> HotelierResult<u64> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM booking \
                 WHERE hotel_id = $hotel_id GROUP ALL",
            )
            .bind(("hotel_id", hotel_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }

    async fn exists_by_room(&self, room_id: Uuid) -> HotelierResult<bool> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM booking \
                 WHERE room_id = $room_id GROUP ALL",
            )
            .bind(("room_id", room_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0) > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_match_schema_assertions() {
        for status in [
            BookingStatus::Created,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(parse_status(status_to_string(status)).unwrap(), status);
            assert!(crate::schema_v1().contains(&format!("'{}'", status_to_string(status))));
        }
        assert!(parse_status("ARCHIVED").is_err());
    }
}
