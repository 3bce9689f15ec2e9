//! Rule-based upsell suggestions attached to newly created bookings.

use chrono::{NaiveDate, Utc};
use hotelier_core::error::HotelierResult;
use hotelier_core::models::booking::Booking;
use hotelier_core::models::recommendation::{BookingRecommendation, CreateBookingRecommendation};
use hotelier_core::repository::RecommendationRepository;
use tracing::info;
use uuid::Uuid;

pub const RECOMMENDATION_MODEL: &str = "rule-based-ai-assistant";
pub const RECOMMENDATION_CONFIDENCE: f64 = 0.88;

pub fn suggestion_for_stay(check_in: NaiveDate, check_out: NaiveDate) -> String {
    format!(
        "Offer breakfast bundle and airport pickup for stay from {check_in} to {check_out}"
    )
}

pub struct RecommendationTrigger<Rec: RecommendationRepository> {
    store: Rec,
}

impl<Rec: RecommendationRepository> RecommendationTrigger<Rec> {
    pub fn new(store: Rec) -> Self {
        Self { store }
    }

    /// Generate and append a suggestion for `booking`. Each call appends a
    /// new document.
    pub async fn generate(&self, booking: &Booking) -> HotelierResult<BookingRecommendation> {
        let recommendation = self
            .store
            .append(CreateBookingRecommendation {
                booking_id: booking.id,
                suggestion: suggestion_for_stay(booking.check_in_date, booking.check_out_date),
                model: RECOMMENDATION_MODEL.to_string(),
                confidence: RECOMMENDATION_CONFIDENCE,
                generated_at: Utc::now(),
            })
            .await?;

        info!(
            booking_id = %booking.id,
            recommendation_id = %recommendation.id,
            "Recommendation generated"
        );
        Ok(recommendation)
    }

    /// All suggestions for a booking, newest first.
    pub async fn recommendations_for_booking(
        &self,
        booking_id: Uuid,
    ) -> HotelierResult<Vec<BookingRecommendation>> {
        self.store.list_by_booking(booking_id).await
    }
}
