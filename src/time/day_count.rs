//! Module `time::day_count`.
//!
//! Converts calendar expiration dates into the annualized year fractions the
//! closed forms consume, under the Act/365 fixed convention.
//!
//! References: Hull (11th ed.) Ch. 4 for day-count conventions; Act/365 fixed
//! divides the actual day count by a flat 365, so a leap-year span is
//! deliberately `366/365`, not `1.0`.
//!
//! Key types and purpose: [`TimeToExpiry`] pairs the year fraction with the
//! whole-day count so callers can echo both without re-deriving either.
//!
//! Numerical considerations: day counts are exact integers, so the year
//! fraction is a single rounding away from exact and `days == round(years *
//! 365)` recovers the count losslessly.

use chrono::NaiveDate;

use crate::core::DomainError;

/// Denominator of the Act/365 fixed convention.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Annualized time to expiry with its underlying day count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeToExpiry {
    /// Year fraction under Act/365 fixed.
    pub years: f64,
    /// Whole days between evaluation and expiration.
    pub days: i64,
}

/// Whole days from `start` to `end`, negative when `end` precedes `start`.
#[inline]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Computes the Act/365 fixed year fraction between two dates.
///
/// Edge cases:
/// - If `start == end`, returns `0.0`.
/// - If `start > end`, the result is negative and antisymmetric.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use greeks_engine::time::year_fraction;
///
/// let s = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let e = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(year_fraction(s, e), 1.0);
/// assert_eq!(year_fraction(e, s), -1.0);
/// ```
pub fn year_fraction(start: NaiveDate, end: NaiveDate) -> f64 {
    if start == end {
        return 0.0;
    }
    days_between(start, end) as f64 / DAYS_PER_YEAR
}

/// Converts an expiration date into pricing time, measured from an
/// evaluation date.
///
/// Same-day expiration is not an error here: it yields a zero year fraction,
/// which the pricing engine then rejects as
/// [`DomainError::NonPositiveTimeToExpiry`].
///
/// # Errors
/// Returns [`DomainError::ExpiredOption`] when `expiration` falls strictly
/// before `evaluation`; the converter never produces a negative duration.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use greeks_engine::time::time_to_expiry;
///
/// let evaluation = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let expiration = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let t = time_to_expiry(evaluation, expiration).unwrap();
/// assert_eq!(t.days, 181);
/// assert!((t.years - 181.0 / 365.0).abs() < 1e-15);
/// ```
pub fn time_to_expiry(
    evaluation: NaiveDate,
    expiration: NaiveDate,
) -> Result<TimeToExpiry, DomainError> {
    if expiration < evaluation {
        return Err(DomainError::ExpiredOption);
    }
    let days = days_between(evaluation, expiration);
    Ok(TimeToExpiry {
        years: days as f64 / DAYS_PER_YEAR,
        days,
    })
}
