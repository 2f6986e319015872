//! Black-Scholes-Merton fair values and Greeks for European vanilla options.
//!
//! The crate is a pure calculation engine: given a fully-specified contract
//! (spot, strike, time to expiry, volatility, risk-free rate, call/put) it
//! returns the fair value and the five first- and second-order Greeks in one
//! pass, or a typed [`core::DomainError`] naming the violated precondition.
//! There is no I/O, no shared state, and no randomness; identical inputs
//! produce bit-identical outputs.
//!
//! References used across modules:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 15 for
//!   the pricing formula, Ch. 19 for the Greeks, Ch. 4 for day counts.
//! - West (2005), "Better approximations to cumulative normal functions",
//!   for the double-precision normal CDF.
//!
//! Numerical considerations:
//! - `d1`, `d2`, and the shared distribution values are computed once per
//!   call, so price and Greeks are mutually consistent to the last rounding.
//! - Expired or zero-volatility contracts are terminal input errors, never
//!   intrinsic-value fallbacks.
//! - Greeks come back raw (theta per year, vega and rho per unit); scaling
//!   to trading conventions is the caller's presentation concern.
//!
//! # Quick Start
//! Price a call and read its Greeks:
//! ```rust
//! use greeks_engine::core::{OptionContract, OptionKind};
//! use greeks_engine::engines::BlackScholesEngine;
//!
//! let contract = OptionContract::builder(OptionKind::Call)
//!     .underlying_price(100.0)
//!     .strike(100.0)
//!     .time_to_expiry(1.0)
//!     .volatility(0.2)
//!     .risk_free_rate(0.05)
//!     .build()
//!     .unwrap();
//! let result = BlackScholesEngine::new().price_and_greeks(&contract).unwrap();
//! assert!(result.price > 10.0 && result.price < 11.0);
//! assert!(result.delta > 0.0 && result.gamma > 0.0 && result.vega > 0.0);
//! ```
//!
//! Work from calendar dates:
//! ```rust
//! use chrono::NaiveDate;
//! use greeks_engine::core::{OptionContract, OptionKind};
//! use greeks_engine::engines::price_and_greeks;
//! use greeks_engine::time::time_to_expiry;
//!
//! let evaluation = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let expiration = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
//! let t = time_to_expiry(evaluation, expiration).unwrap();
//!
//! let contract = OptionContract::builder(OptionKind::Put)
//!     .underlying_price(105.0)
//!     .strike(100.0)
//!     .time_to_expiry(t.years)
//!     .volatility(0.25)
//!     .build()
//!     .unwrap();
//! let result = price_and_greeks(&contract).unwrap();
//! assert_eq!(result.days_to_expiry, t.days);
//! ```

pub mod core;
pub mod engines;
pub mod math;
pub mod time;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::engines::*;
    pub use crate::math::*;
    pub use crate::time::*;
}
