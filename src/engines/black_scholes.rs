//! Module `engines::black_scholes`.
//!
//! Implements the Black-Scholes-Merton closed forms for European vanilla
//! options: fair value plus delta, gamma, theta, vega, and rho in one pass.
//!
//! References: Hull (11th ed.) Ch. 15 for the pricing formula and Ch. 19 for
//! the Greeks; zero dividend yield throughout.
//!
//! Key types and purpose: [`BlackScholesEngine`] is the stateless entry
//! point; [`price_and_greeks`] is the free-function equivalent.
//!
//! Numerical considerations: `d1`, `d2`, `Phi(d1)`, `Phi(d2)`, and `phi(d1)`
//! are computed once and every output is derived from those shared values,
//! so price and Greeks stay mutually consistent to the last rounding. Puts
//! reuse the call-side CDF values through `Phi(-x) = 1 - Phi(x)`. Deep
//! in/out-of-the-money inputs ride the saturating CDF tails and stay finite.

use crate::core::{DomainError, OptionContract, OptionKind, PricingResult};
use crate::math::{normal_cdf, normal_pdf};
use crate::time::DAYS_PER_YEAR;

/// Analytic Black-Scholes-Merton engine for European vanilla options.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates a Black-Scholes engine instance.
    pub fn new() -> Self {
        Self
    }

    /// Prices a contract and computes its five Greeks.
    ///
    /// See [`price_and_greeks`].
    pub fn price_and_greeks(
        &self,
        contract: &OptionContract,
    ) -> Result<PricingResult, DomainError> {
        price_and_greeks(contract)
    }
}

#[inline]
fn d1_d2(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Prices a European vanilla option and computes its five Greeks in one
/// pass.
///
/// Greeks come back raw: theta per year, vega per unit of volatility, rho
/// per unit of rate. The result also carries the whole-day count recovered
/// from the year fraction under Act/365 fixed.
///
/// # Errors
/// Exactly four failure modes exist, surfaced in validation order:
/// [`DomainError::NonPositivePrice`], [`DomainError::NonPositiveStrike`],
/// [`DomainError::NonPositiveTimeToExpiry`], and
/// [`DomainError::NonPositiveVolatility`].
///
/// # Examples
/// ```rust
/// use greeks_engine::core::{OptionContract, OptionKind};
/// use greeks_engine::engines::price_and_greeks;
///
/// let contract = OptionContract::builder(OptionKind::Call)
///     .underlying_price(100.0)
///     .strike(100.0)
///     .time_to_expiry(1.0)
///     .volatility(0.2)
///     .risk_free_rate(0.05)
///     .build()
///     .unwrap();
/// let result = price_and_greeks(&contract).unwrap();
/// assert!((result.price - 10.4506).abs() < 1e-3);
/// assert!((result.delta - 0.6368).abs() < 1e-3);
/// ```
pub fn price_and_greeks(contract: &OptionContract) -> Result<PricingResult, DomainError> {
    contract.validate()?;

    let spot = contract.underlying_price;
    let strike = contract.strike;
    let expiry = contract.time_to_expiry;
    let vol = contract.volatility;
    let rate = contract.risk_free_rate;

    let sqrt_t = expiry.sqrt();
    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let nd1 = normal_cdf(d1);
    let nd2 = normal_cdf(d2);
    let pdf_d1 = normal_pdf(d1);
    let df = (-rate * expiry).exp();

    // Side-independent sensitivities.
    let gamma = pdf_d1 / (spot * vol * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t;
    let decay = -spot * pdf_d1 * vol / (2.0 * sqrt_t);

    let (price, delta, theta, rho) = match contract.kind {
        OptionKind::Call => (
            spot * nd1 - strike * df * nd2,
            nd1,
            decay - rate * strike * df * nd2,
            strike * expiry * df * nd2,
        ),
        OptionKind::Put => {
            let n_neg_d1 = 1.0 - nd1;
            let n_neg_d2 = 1.0 - nd2;
            (
                strike * df * n_neg_d2 - spot * n_neg_d1,
                nd1 - 1.0,
                decay + rate * strike * df * n_neg_d2,
                -strike * expiry * df * n_neg_d2,
            )
        }
    };

    Ok(PricingResult {
        price,
        delta,
        gamma,
        theta,
        vega,
        rho,
        days_to_expiry: (expiry * DAYS_PER_YEAR).round() as i64,
    })
}
