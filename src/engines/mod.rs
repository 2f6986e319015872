//! Pricing engine implementations.

pub mod black_scholes;

pub use black_scholes::{BlackScholesEngine, price_and_greeks};
