//! Signed positions and the legs they hold.

use std::fmt;

use num_traits::Float;

use optstrat_core::traits::TerminalPayoff;
use optstrat_core::types::OptionType;

use crate::instruments::{Instrument, InstrumentError};

use super::error::StrategyError;
use super::strategy::Strategy;

/// What a position holds: a single instrument or a whole nested strategy.
///
/// The variants are closed so dispatch stays static. Nesting a strategy
/// boxes it; the composed payoff is still the plain sum of leg payoffs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Leg<T: Float> {
    /// A single instrument.
    Instrument(Instrument<T>),
    /// A nested strategy acting as one leg.
    Strategy(Box<Strategy<T>>),
}

impl<T: Float> Leg<T> {
    /// Returns the strike of the held instrument.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::NoStrike` for stock legs and nested
    /// strategies (a composite has no single strike).
    pub fn strike(&self) -> Result<T, InstrumentError> {
        match self {
            Leg::Instrument(instrument) => instrument.strike(),
            Leg::Strategy(_) => Err(InstrumentError::NoStrike),
        }
    }

    /// Returns the option type of the held instrument, if it has one.
    pub fn option_type(&self) -> Option<OptionType> {
        match self {
            Leg::Instrument(instrument) => instrument.option_type(),
            Leg::Strategy(_) => None,
        }
    }
}

impl<T: Float> TerminalPayoff<T> for Leg<T> {
    #[inline]
    fn payoff(&self, st: T) -> T {
        match self {
            Leg::Instrument(instrument) => instrument.payoff(st),
            Leg::Strategy(strategy) => strategy.payoff(st),
        }
    }
}

impl<T: Float> fmt::Display for Leg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::Instrument(instrument) => write!(f, "{}", instrument),
            Leg::Strategy(strategy) => write!(f, "{}", strategy.name()),
        }
    }
}

/// A signed holding of one leg within a strategy.
///
/// The quantity sign encodes direction (long positive, short negative) and
/// the magnitude the contract count. Quantities are integral by type; zero
/// is rejected at construction since a zero-quantity leg carries no
/// economic meaning.
///
/// # Examples
///
/// ```
/// use optstrat_core::traits::TerminalPayoff;
/// use optstrat_models::instruments::Instrument;
/// use optstrat_models::portfolio::Position;
///
/// let short_call = Position::new(-1, Instrument::call(100.0).unwrap()).unwrap();
/// assert_eq!(short_call.payoff(110.0), -10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position<T: Float> {
    quantity: i32,
    leg: Leg<T>,
}

impl<T: Float> Position<T> {
    /// Creates a position holding a single instrument.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::ZeroQuantity` if `quantity == 0`.
    pub fn new(quantity: i32, instrument: Instrument<T>) -> Result<Self, StrategyError> {
        Self::with_leg(quantity, Leg::Instrument(instrument))
    }

    /// Creates a position holding a nested strategy.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::ZeroQuantity` if `quantity == 0`.
    pub fn nested(quantity: i32, strategy: Strategy<T>) -> Result<Self, StrategyError> {
        Self::with_leg(quantity, Leg::Strategy(Box::new(strategy)))
    }

    fn with_leg(quantity: i32, leg: Leg<T>) -> Result<Self, StrategyError> {
        if quantity == 0 {
            return Err(StrategyError::ZeroQuantity);
        }
        Ok(Self { quantity, leg })
    }

    /// Returns the signed quantity.
    #[inline]
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Returns the held leg.
    #[inline]
    pub fn leg(&self) -> &Leg<T> {
        &self.leg
    }

    /// Returns the strike of the held instrument.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::NoStrike` if the leg has no strike.
    pub fn strike(&self) -> Result<T, InstrumentError> {
        self.leg.strike()
    }

    /// Returns the option type of the held instrument, if it has one.
    pub fn option_type(&self) -> Option<OptionType> {
        self.leg.option_type()
    }
}

impl<T: Float> TerminalPayoff<T> for Position<T> {
    #[inline]
    fn payoff(&self, st: T) -> T {
        // i32 -> Float conversion cannot fail for f32/f64.
        let quantity = T::from(self.quantity).unwrap_or_else(T::zero);
        quantity * self.leg.payoff(st)
    }
}

impl<T: Float> fmt::Display for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.quantity > 0 { "Long" } else { "Short" };
        write!(f, "{} {} {}", direction, self.quantity.abs(), self.leg)
    }
}
