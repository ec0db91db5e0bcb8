//! Geometric Brownian Motion terminal-price sampling.
//!
//! The underlying follows the SDE
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//! and the sampler draws directly from the exact terminal distribution:
//! ```text
//! S_T = S_0 * exp((mu - 0.5*sigma^2) * t + sigma * sqrt(t) * Z)
//! ```
//! with `t = horizon_days / 365` and `Z` standard normal. European payoffs
//! only need the terminal value, so there is no intermediate stepping.
//!
//! When `sigma = 0` or the horizon is zero the diffusion term vanishes and
//! every draw degenerates deterministically to `S_0 * exp(mu * t)`.

use crate::mc::SimulationError;
use crate::rng::SimRng;

/// Day-count convention for converting a horizon in days to year fractions.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// GBM model parameters.
///
/// # Examples
///
/// ```
/// use optstrat_pricing::gbm::GbmParams;
///
/// let market = GbmParams::new(100.0, 0.05, 0.2).unwrap();
/// assert_eq!(market.spot, 100.0);
///
/// // Non-positive spot and negative volatility are rejected.
/// assert!(GbmParams::new(0.0, 0.05, 0.2).is_err());
/// assert!(GbmParams::new(100.0, 0.05, -0.1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Current spot price of the underlying.
    pub spot: f64,
    /// Annualised drift. Used directly as the simulation drift; pass the
    /// risk-free rate here for risk-neutral dynamics.
    pub drift: f64,
    /// Annualised volatility.
    pub volatility: f64,
}

impl GbmParams {
    /// Creates validated GBM parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidSpot` if `spot <= 0`, or
    /// `SimulationError::InvalidVolatility` if `volatility < 0`.
    pub fn new(spot: f64, drift: f64, volatility: f64) -> Result<Self, SimulationError> {
        let params = Self {
            spot,
            drift,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](Self::new). Re-checked by the pricer
    /// since the fields are public.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(SimulationError::InvalidSpot { spot: self.spot });
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(SimulationError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        Ok(())
    }

    /// Terminal price for one standard normal draw `z` at the given horizon.
    ///
    /// Exact log-space solution; no time stepping.
    #[inline]
    pub fn terminal(&self, horizon_days: f64, z: f64) -> f64 {
        let t = horizon_days / DAYS_PER_YEAR;
        let drift_term = (self.drift - 0.5 * self.volatility * self.volatility) * t;
        let diffusion = self.volatility * t.sqrt() * z;
        self.spot * (drift_term + diffusion).exp()
    }

    /// Fills `out` with independent terminal-price draws.
    ///
    /// The buffer length is the sample count; each slot receives one
    /// independent draw from the terminal distribution.
    ///
    /// # Errors
    ///
    /// - `SimulationError::InvalidSpot` / `InvalidVolatility` if the
    ///   parameters are out of domain (public fields may have been edited
    ///   after construction)
    /// - `SimulationError::InvalidHorizon` if `horizon_days` is negative
    ///   or non-finite
    /// - `SimulationError::InvalidSampleCount` if `out` is empty
    pub fn sample_terminal_into(
        &self,
        horizon_days: f64,
        rng: &mut SimRng,
        out: &mut [f64],
    ) -> Result<(), SimulationError> {
        self.validate()?;
        if !horizon_days.is_finite() || horizon_days < 0.0 {
            return Err(SimulationError::InvalidHorizon { days: horizon_days });
        }
        if out.is_empty() {
            return Err(SimulationError::InvalidSampleCount(0));
        }

        rng.fill_normal(out);
        for value in out.iter_mut() {
            *value = self.terminal(horizon_days, *value);
        }
        Ok(())
    }
}
