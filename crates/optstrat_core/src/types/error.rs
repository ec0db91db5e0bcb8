//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: umbrella categories raised across the pricing stack
//! - `OptionTypeError`: option-type parse failures at the string boundary
//!
//! Layer-specific errors (instrument construction, strategy state,
//! simulation parameters) live next to the code that raises them and
//! convert into `PricingError` so callers can propagate one type with `?`.

use thiserror::Error;

/// Categorised pricing errors.
///
/// The umbrella type for everything the stack can raise: construction-time
/// validation, unsupported queries, pricing-state violations, and simulation
/// parameter failures. Errors are raised synchronously at the point of
/// violation and are never retried or swallowed; a pricing call either
/// returns one scalar or fails with one of these.
///
/// # Variants
/// - `InvalidInput`: invalid construction or market parameters
/// - `UnsupportedQuery`: a query the instrument variant cannot answer
/// - `Unpriced`: reading a cached price before any pricing call
/// - `Simulation`: invalid simulation inputs
///
/// # Examples
/// ```
/// use optstrat_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative strike".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: negative strike");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The queried attribute does not exist on this instrument variant.
    #[error("Unsupported query: {0}")]
    UnsupportedQuery(String),

    /// A cached price was read before it was ever computed.
    #[error("Unpriced: {0}")]
    Unpriced(String),

    /// Invalid simulation inputs.
    #[error("Simulation failure: {0}")]
    Simulation(String),
}

/// Option-type parse errors.
///
/// The [`OptionType`](super::OptionType) enum is closed, so unsupported
/// tags are a compile-time concern everywhere except the true string
/// boundary (user input, serialised data). This error marks that boundary.
///
/// # Examples
/// ```
/// use optstrat_core::types::{OptionType, OptionTypeError};
///
/// let err = "Straddle".parse::<OptionType>().unwrap_err();
/// assert_eq!(err, OptionTypeError::Unknown("Straddle".to_string()));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionTypeError {
    /// The tag did not name a supported option type.
    #[error("Option type \"{0}\" not recognised")]
    Unknown(String),
}

impl From<OptionTypeError> for PricingError {
    fn from(err: OptionTypeError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
