//! Error types for the Monte Carlo pricing kernel.

use optstrat_core::types::PricingError;
use thiserror::Error;

/// Configuration errors raised when building a [`MonteCarloConfig`].
///
/// [`MonteCarloConfig`]: super::MonteCarloConfig
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample count outside the valid range.
    #[error("Invalid sample count {0}: must be in range [1, 100_000_000]")]
    InvalidSampleCount(usize),

    /// A required builder field was not supplied.
    #[error("Missing parameter '{0}': must be specified")]
    MissingParameter(&'static str),
}

/// Runtime errors raised by the simulator and pricer.
///
/// All variants are raised synchronously at the point of violation; a
/// pricing call never retries or returns a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Spot must be strictly positive.
    #[error("Invalid spot: S = {spot}, must be positive")]
    InvalidSpot {
        /// The invalid spot value.
        spot: f64,
    },

    /// Volatility must be non-negative.
    #[error("Invalid volatility: sigma = {volatility}, must be non-negative")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Horizon must be a non-negative, finite number of days.
    #[error("Invalid horizon: {days} days, must be non-negative and finite")]
    InvalidHorizon {
        /// The invalid horizon value.
        days: f64,
    },

    /// At least one sample is required.
    #[error("Invalid sample count: {0}, need at least 1")]
    InvalidSampleCount(usize),
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        PricingError::Simulation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSampleCount(0);
        assert!(err.to_string().contains("Invalid sample count 0"));

        let err = ConfigError::MissingParameter("n_samples");
        assert!(err.to_string().contains("n_samples"));
    }

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::InvalidSpot { spot: -5.0 };
        assert_eq!(format!("{}", err), "Invalid spot: S = -5, must be positive");

        let err = SimulationError::InvalidHorizon { days: -1.0 };
        assert!(format!("{}", err).contains("-1 days"));
    }

    #[test]
    fn test_conversion_to_pricing_error() {
        let err: PricingError = ConfigError::InvalidSampleCount(0).into();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let err: PricingError = SimulationError::InvalidSpot { spot: 0.0 }.into();
        assert!(matches!(err, PricingError::Simulation(_)));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SimulationError::InvalidSampleCount(0);
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SimulationError::InvalidVolatility { volatility: -0.2 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
