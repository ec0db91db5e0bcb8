//! Instrument error types.

use optstrat_core::types::PricingError;
use thiserror::Error;

/// Instrument construction and query errors.
///
/// # Variants
/// - `InvalidStrike`: strike price is negative
/// - `InvalidReferencePrice`: stock reference price is negative
/// - `NoStrike`: strike queried on a variant without one
///
/// # Examples
/// ```
/// use optstrat_models::instruments::{Instrument, InstrumentError};
///
/// let err = Instrument::<f64>::call(-5.0).unwrap_err();
/// assert_eq!(err, InstrumentError::InvalidStrike { strike: -5.0 });
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Strike price is negative.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value.
        strike: f64,
    },

    /// Stock reference price is negative.
    #[error("Invalid reference price: S = {price}")]
    InvalidReferencePrice {
        /// The invalid reference price.
        price: f64,
    },

    /// The instrument variant carries no strike price.
    #[error("The selected instrument has no strike price")]
    NoStrike,
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::InvalidStrike { .. } | InstrumentError::InvalidReferencePrice { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            InstrumentError::NoStrike => PricingError::UnsupportedQuery(err.to_string()),
        }
    }
}
