//! SurrealDB implementation of [`RecommendationRepository`].
//!
//! `booking_recommendation` is a schemaless table used as an append-only
//! document collection. Documents get a fresh UUID string as record id.

use chrono::{DateTime, Utc};
use hotelier_core::error::HotelierResult;
use hotelier_core::models::recommendation::{BookingRecommendation, CreateBookingRecommendation};
use hotelier_core::repository::RecommendationRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::parse_uuid;
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct RecommendationRow {
    booking_id: String,
    suggestion: String,
    model: String,
    confidence: f64,
    generated_at: DateTime<Utc>,
}

impl RecommendationRow {
    fn try_into_recommendation(self, id: String) -> Result<BookingRecommendation, DbError> {
        Ok(BookingRecommendation {
            id,
            booking_id: parse_uuid(&self.booking_id, "booking")?,
            suggestion: self.suggestion,
            model: self.model,
            confidence: self.confidence,
            generated_at: self.generated_at,
        })
    }
}

#[derive(Debug, SurrealValue)]
struct RecommendationRowWithId {
    record_id: String,
    booking_id: String,
    suggestion: String,
    model: String,
    confidence: f64,
    generated_at: DateTime<Utc>,
}

impl RecommendationRowWithId {
    fn try_into_recommendation(self) -> Result<BookingRecommendation, DbError> {
        Ok(BookingRecommendation {
            id: self.record_id,
            booking_id: parse_uuid(&self.booking_id, "booking")?,
            suggestion: self.suggestion,
            model: self.model,
            confidence: self.confidence,
            generated_at: self.generated_at,
        })
    }
}

/// SurrealDB-backed recommendation document store.
#[derive(Clone)]
pub struct SurrealRecommendationRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealRecommendationRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> RecommendationRepository for SurrealRecommendationRepository<C> {
    async fn append(
        &self,
        input: CreateBookingRecommendation,
    ) -> HotelierResult<BookingRecommendation> {
        let id_str = Uuid::new_v4().to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('booking_recommendation', $id) SET \
                 booking_id = $booking_id, suggestion = $suggestion, \
                 model = $model, confidence = $confidence, \
                 generated_at = $generated_at",
            )
            .bind(("id", id_str.clone()))
            .bind(("booking_id", input.booking_id.to_string()))
            .bind(("suggestion", input.suggestion))
            .bind(("model", input.model))
            .bind(("confidence", input.confidence))
            .bind(("generated_at", input.generated_at))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<RecommendationRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "BookingRecommendation".into(),
            id: id_str.clone(),
        })?;

        Ok(row.try_into_recommendation(id_str)?)
    }

    async fn list_by_booking(&self, booking_id: Uuid) -> HotelierResult<Vec<BookingRecommendation>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM booking_recommendation \
                 WHERE booking_id = $booking_id \
                 ORDER BY generated_at DESC",
            )
            .bind(("booking_id", booking_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RecommendationRowWithId> = result.take(0).map_err(DbError::from)?;

        let recommendations = rows
            .into_iter()
            .map(|row| row.try_into_recommendation())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(recommendations)
    }
}
