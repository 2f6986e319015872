//! Calendar-time primitives: Act/365 fixed day counts and expiration-date
//! conversion.

pub mod day_count;

pub use day_count::{DAYS_PER_YEAR, TimeToExpiry, days_between, time_to_expiry, year_fraction};
