//! Strategy error types.

use optstrat_core::types::PricingError;
use thiserror::Error;

/// Strategy construction and state errors.
///
/// # Variants
/// - `ZeroQuantity`: a leg was added with quantity zero
/// - `InvalidSpot`: a negative initial stock price was supplied
/// - `Unpriced`: the cached price was read before any pricing call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    /// A position must hold a non-zero number of contracts.
    #[error("Position quantity must be non-zero")]
    ZeroQuantity,

    /// Initial stock price cannot be negative.
    #[error("Invalid initial stock price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value.
        spot: f64,
    },

    /// The strategy has not been priced yet.
    #[error("Strategy '{name}' has no price yet; price it for a given set of parameters first")]
    Unpriced {
        /// Name of the unpriced strategy.
        name: String,
    },
}

impl From<StrategyError> for PricingError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::ZeroQuantity | StrategyError::InvalidSpot { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            StrategyError::Unpriced { .. } => PricingError::Unpriced(err.to_string()),
        }
    }
}
