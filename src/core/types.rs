use serde::{Deserialize, Serialize};

use crate::core::DomainError;

/// Default continuously compounded risk-free rate applied when a contract
/// builder is not given one.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// Upper sanity bound on annualized volatility (1000%). Contract builders
/// reject anything at or above it as garbage input.
pub const MAX_VOLATILITY: f64 = 10.0;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionKind {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }

    /// Exercise payoff at the given spot level.
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        (self.sign() * (spot - strike)).max(0.0)
    }
}

/// European vanilla option contract, fully specified for pricing.
///
/// This is the canonical input for the Black-Scholes-Merton closed forms:
/// spot `S`, strike `K`, time to expiry `T` in year fractions, annualized
/// volatility, continuously compounded risk-free rate, and the option side.
///
/// # Examples
/// ```
/// use greeks_engine::core::{OptionContract, OptionKind};
///
/// let contract = OptionContract {
///     underlying_price: 100.0,
///     strike: 100.0,
///     time_to_expiry: 1.0,
///     volatility: 0.2,
///     risk_free_rate: 0.05,
///     kind: OptionKind::Call,
/// };
/// assert!(contract.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Spot price of the underlying.
    pub underlying_price: f64,
    /// Strike level.
    pub strike: f64,
    /// Time to expiry in years.
    pub time_to_expiry: f64,
    /// Annualized volatility as a decimal.
    pub volatility: f64,
    /// Continuously compounded risk-free rate as a decimal.
    pub risk_free_rate: f64,
    /// Call or put.
    pub kind: OptionKind,
}

impl OptionContract {
    /// Starts a contract builder for the given side.
    #[inline]
    pub fn builder(kind: OptionKind) -> ContractBuilder {
        ContractBuilder::new(kind)
    }

    /// Validates contract fields in a fixed order.
    ///
    /// # Errors
    /// Returns the first violated precondition:
    /// - [`DomainError::NonPositivePrice`] when `underlying_price <= 0`
    /// - [`DomainError::NonPositiveStrike`] when `strike <= 0`
    /// - [`DomainError::NonPositiveTimeToExpiry`] when `time_to_expiry <= 0`
    /// - [`DomainError::NonPositiveVolatility`] when `volatility <= 0`
    ///
    /// An expired-or-expiring-today contract always fails here: zero time
    /// to expiry is a terminal input error, never priced at intrinsic.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.underlying_price <= 0.0 {
            return Err(DomainError::NonPositivePrice);
        }
        if self.strike <= 0.0 {
            return Err(DomainError::NonPositiveStrike);
        }
        if self.time_to_expiry <= 0.0 {
            return Err(DomainError::NonPositiveTimeToExpiry);
        }
        if self.volatility <= 0.0 {
            return Err(DomainError::NonPositiveVolatility);
        }
        Ok(())
    }
}

/// Builder for [`OptionContract`].
///
/// Unset numeric fields default to zero and fail the corresponding
/// positivity check in [`ContractBuilder::build`]; the risk-free rate alone
/// defaults to [`DEFAULT_RISK_FREE_RATE`].
#[derive(Debug, Clone, Copy)]
pub struct ContractBuilder {
    kind: OptionKind,
    underlying_price: Option<f64>,
    strike: Option<f64>,
    time_to_expiry: Option<f64>,
    volatility: Option<f64>,
    risk_free_rate: Option<f64>,
}

impl ContractBuilder {
    /// Creates a builder for the given option side.
    pub fn new(kind: OptionKind) -> Self {
        Self {
            kind,
            underlying_price: None,
            strike: None,
            time_to_expiry: None,
            volatility: None,
            risk_free_rate: None,
        }
    }

    /// Sets the underlying spot price.
    #[inline]
    pub fn underlying_price(mut self, underlying_price: f64) -> Self {
        self.underlying_price = Some(underlying_price);
        self
    }

    /// Sets the strike level.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the time to expiry in years.
    #[inline]
    pub fn time_to_expiry(mut self, time_to_expiry: f64) -> Self {
        self.time_to_expiry = Some(time_to_expiry);
        self
    }

    /// Sets the annualized volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the continuously compounded risk-free rate.
    #[inline]
    pub fn risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = Some(risk_free_rate);
        self
    }

    /// Validates and builds an [`OptionContract`].
    ///
    /// # Errors
    /// Propagates the positivity checks from [`OptionContract::validate`] and
    /// additionally rejects volatility at or above [`MAX_VOLATILITY`] with
    /// [`DomainError::VolatilityOutOfRange`].
    ///
    /// # Examples
    /// ```
    /// use greeks_engine::core::{OptionContract, OptionKind};
    ///
    /// let contract = OptionContract::builder(OptionKind::Put)
    ///     .underlying_price(100.0)
    ///     .strike(95.0)
    ///     .time_to_expiry(0.5)
    ///     .volatility(0.25)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(contract.risk_free_rate, 0.05);
    /// ```
    pub fn build(self) -> Result<OptionContract, DomainError> {
        let contract = OptionContract {
            underlying_price: self.underlying_price.unwrap_or(0.0),
            strike: self.strike.unwrap_or(0.0),
            time_to_expiry: self.time_to_expiry.unwrap_or(0.0),
            volatility: self.volatility.unwrap_or(0.0),
            risk_free_rate: self.risk_free_rate.unwrap_or(DEFAULT_RISK_FREE_RATE),
            kind: self.kind,
        };
        contract.validate()?;
        if contract.volatility >= MAX_VOLATILITY {
            return Err(DomainError::VolatilityOutOfRange);
        }
        Ok(contract)
    }
}
