//! Instrument sum type and payoff evaluation.

use std::fmt;

use num_traits::Float;

use optstrat_core::traits::TerminalPayoff;
use optstrat_core::types::OptionType;

use super::error::InstrumentError;

/// A single payoff unit: stock position, call, or put.
///
/// Each variant is immutable once constructed. Strikes and reference prices
/// must be non-negative; constructors enforce this.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
///
/// ```
/// use optstrat_core::traits::TerminalPayoff;
/// use optstrat_models::instruments::Instrument;
///
/// let put = Instrument::put(100.0_f64).unwrap();
/// assert_eq!(put.payoff(90.0), 10.0);
/// assert_eq!(put.payoff(110.0), 0.0);
/// assert_eq!(put.strike().unwrap(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instrument<T: Float> {
    /// Underlying held against a reference price: payoff `st - reference_price`.
    Stock {
        /// Price the stock leg is carried at.
        reference_price: T,
    },
    /// Call option: payoff `max(0, st - strike)`.
    Call {
        /// Exercise price.
        strike: T,
    },
    /// Put option: payoff `max(0, strike - st)`.
    Put {
        /// Exercise price.
        strike: T,
    },
}

impl<T: Float> Instrument<T> {
    /// Creates a stock leg carried at the given reference price.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidReferencePrice` if the price is
    /// negative. Zero is legal.
    pub fn stock(reference_price: T) -> Result<Self, InstrumentError> {
        if reference_price < T::zero() {
            return Err(InstrumentError::InvalidReferencePrice {
                price: reference_price.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Instrument::Stock { reference_price })
    }

    /// Creates a call option with the given strike.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidStrike` if the strike is negative.
    /// Zero is legal.
    pub fn call(strike: T) -> Result<Self, InstrumentError> {
        Self::validate_strike(strike)?;
        Ok(Instrument::Call { strike })
    }

    /// Creates a put option with the given strike.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidStrike` if the strike is negative.
    /// Zero is legal.
    pub fn put(strike: T) -> Result<Self, InstrumentError> {
        Self::validate_strike(strike)?;
        Ok(Instrument::Put { strike })
    }

    fn validate_strike(strike: T) -> Result<(), InstrumentError> {
        if strike < T::zero() {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Returns the strike price.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::NoStrike` on the `Stock` variant.
    pub fn strike(&self) -> Result<T, InstrumentError> {
        match self {
            Instrument::Call { strike } | Instrument::Put { strike } => Ok(*strike),
            Instrument::Stock { .. } => Err(InstrumentError::NoStrike),
        }
    }

    /// Returns the option type for moneyness queries, `None` for stock legs.
    #[inline]
    pub fn option_type(&self) -> Option<OptionType> {
        match self {
            Instrument::Call { .. } => Some(OptionType::Call),
            Instrument::Put { .. } => Some(OptionType::Put),
            Instrument::Stock { .. } => None,
        }
    }
}

impl<T: Float> TerminalPayoff<T> for Instrument<T> {
    #[inline]
    fn payoff(&self, st: T) -> T {
        let zero = T::zero();
        match self {
            Instrument::Stock { reference_price } => st - *reference_price,
            Instrument::Call { strike } => (st - *strike).max(zero),
            Instrument::Put { strike } => (*strike - st).max(zero),
        }
    }
}

impl<T: Float> fmt::Display for Instrument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tag, level) = match self {
            Instrument::Stock { reference_price } => ("Stock", *reference_price),
            Instrument::Call { strike } => ("Call", *strike),
            Instrument::Put { strike } => ("Put", *strike),
        };
        write!(f, "{} @ {:.2}", tag, level.to_f64().unwrap_or(f64::NAN))
    }
}
