//! Stay validation and price computation.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::BookingError;

/// Reject stays whose check-out is not strictly after check-in.
pub fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), BookingError> {
    if check_out <= check_in {
        return Err(BookingError::InvalidStay);
    }
    Ok(())
}

/// Number of nights charged for a stay. Never less than one.
pub fn billable_nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(1)
}

/// Round to two decimal places, halves away from zero. The result
/// always carries scale 2.
pub fn normalize_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// `nightly_rate × nights`, normalized to two decimal places.
pub fn stay_total(
    nightly_rate: Decimal,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Decimal, BookingError> {
    nightly_rate
        .checked_mul(Decimal::from(billable_nights(check_in, check_out)))
        .map(normalize_money)
        .ok_or(BookingError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn total_multiplies_rate_by_nights() {
        let total =
            stay_total(Decimal::new(12000, 2), date(2026, 3, 1), date(2026, 3, 3)).unwrap();
        assert_eq!(total, Decimal::new(24000, 2));
        assert_eq!(total.to_string(), "240.00");
    }

    #[test]
    fn total_rounds_half_away_from_zero() {
        // 33.335 * 1 night
        let total =
            stay_total(Decimal::new(33335, 3), date(2026, 3, 1), date(2026, 3, 2)).unwrap();
        assert_eq!(total, Decimal::new(3334, 2));
        assert_eq!(normalize_money(Decimal::new(-1005, 3)), Decimal::new(-101, 2));
    }

    #[test]
    fn oversized_rate_is_rejected_instead_of_overflowing() {
        assert!(matches!(
            stay_total(Decimal::MAX, date(2026, 3, 1), date(2026, 3, 3)),
            Err(BookingError::AmountOverflow)
        ));
        // A single night never multiplies past the rate itself.
        assert_eq!(
            stay_total(Decimal::MAX, date(2026, 3, 1), date(2026, 3, 2)).unwrap(),
            normalize_money(Decimal::MAX)
        );
    }

    #[test]
    fn whole_rates_gain_two_decimal_places() {
        assert_eq!(normalize_money(Decimal::from(100)).to_string(), "100.00");
    }

    #[test]
    fn stay_must_end_after_it_starts() {
        assert!(validate_stay(date(2026, 3, 1), date(2026, 3, 2)).is_ok());
        assert!(matches!(
            validate_stay(date(2026, 3, 2), date(2026, 3, 2)),
            Err(BookingError::InvalidStay)
        ));
        assert!(validate_stay(date(2026, 3, 3), date(2026, 3, 2)).is_err());
    }

    #[test]
    fn month_boundaries_count_correctly() {
        assert_eq!(billable_nights(date(2026, 2, 27), date(2026, 3, 2)), 3);
    }
}
