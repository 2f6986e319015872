//! Core domain types and the library-wide result/error structures.

use serde::{Deserialize, Serialize};

pub mod types;

pub use types::*;

/// Fair value and risk sensitivities for a single contract.
///
/// All Greeks are raw analytic values: theta is per year, vega per unit of
/// volatility, rho per unit of rate. Per-day or per-percentage-point figures
/// are divisions the presentation layer applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Present value.
    pub price: f64,
    /// First derivative to spot.
    pub delta: f64,
    /// Second derivative to spot.
    pub gamma: f64,
    /// First derivative to time, per year.
    pub theta: f64,
    /// First derivative to volatility, per unit.
    pub vega: f64,
    /// First derivative to rate, per unit.
    pub rho: f64,
    /// Whole days between evaluation and expiration under Act/365 fixed.
    pub days_to_expiry: i64,
}

/// Domain validation errors surfaced by the API.
///
/// `price_and_greeks` emits exactly the four `NonPositive*` variants; the
/// remaining variants come from contract construction and date conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Underlying price was zero or negative.
    NonPositivePrice,
    /// Strike was zero or negative.
    NonPositiveStrike,
    /// Time to expiry was zero or negative at pricing time.
    NonPositiveTimeToExpiry,
    /// Volatility was zero or negative.
    NonPositiveVolatility,
    /// Volatility reached the sanity ceiling at contract construction.
    VolatilityOutOfRange,
    /// Expiration date fell before the evaluation date.
    ExpiredOption,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositivePrice => write!(f, "underlying price must be > 0"),
            Self::NonPositiveStrike => write!(f, "strike must be > 0"),
            Self::NonPositiveTimeToExpiry => write!(f, "time to expiry must be > 0"),
            Self::NonPositiveVolatility => write!(f, "volatility must be > 0"),
            Self::VolatilityOutOfRange => {
                write!(f, "volatility must be < {}", types::MAX_VOLATILITY)
            }
            Self::ExpiredOption => write!(f, "expiration date must be in the future"),
        }
    }
}

impl std::error::Error for DomainError {}
