//! Monte Carlo pricing engine.
//!
//! The pricer owns the sampling-and-reduction pipeline: draw terminal
//! prices from the GBM sampler, evaluate the payoff source elementwise
//! over the draws, reduce by the signed arithmetic mean. The payoff
//! evaluation is chunked across a rayon pool; chunk partials are combined
//! in slice order, so the estimate for a fixed seed does not depend on
//! scheduling.

use rayon::prelude::*;
use tracing::debug;

use optstrat_core::traits::TerminalPayoff;
use optstrat_models::portfolio::Strategy;

use crate::gbm::GbmParams;
use crate::rng::SimRng;

use super::config::MonteCarloConfig;
use super::error::{ConfigError, SimulationError};

/// Samples per rayon work unit.
const CHUNK_SIZE: usize = 8_192;

/// Monte Carlo price estimate.
///
/// Carries the signed mean payoff and its standard error. No discounting
/// is applied to either.
///
/// # Examples
///
/// ```rust
/// use optstrat_pricing::mc::PriceEstimate;
///
/// let estimate = PriceEstimate {
///     price: 4.2,
///     std_error: 0.05,
/// };
/// println!("price: {} +/- {}", estimate.price, estimate.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEstimate {
    /// Signed mean payoff over the sampled terminal prices.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
}

impl PriceEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Stateless apart from its configuration: every pricing call constructs
/// its own random generator from the configured seed (or a fresh entropy
/// seed), so calls are independently reproducible and never perturb each
/// other.
///
/// # Examples
///
/// ```rust
/// use optstrat_models::instruments::Instrument;
/// use optstrat_pricing::gbm::GbmParams;
/// use optstrat_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_samples(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let market = GbmParams::new(100.0, 0.05, 0.2).unwrap();
/// let put = Instrument::put(95.0).unwrap();
/// let estimate = pricer.price(&put, &market, 180.0).unwrap();
/// assert!(estimate.price > 0.0);
/// ```
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Estimates the fair value of a payoff source by simulate-then-average.
    ///
    /// Draws `n_samples` terminal prices under `market`, evaluates
    /// `payoff_source` elementwise over the draws, and reduces by the
    /// signed arithmetic mean. The drift in `market` is used as supplied;
    /// no discounting is applied.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if the market parameters or horizon are
    /// out of domain. The call either returns one estimate or fails; there
    /// is no partial result.
    pub fn price<P>(
        &self,
        payoff_source: &P,
        market: &GbmParams,
        horizon_days: f64,
    ) -> Result<PriceEstimate, SimulationError>
    where
        P: TerminalPayoff<f64> + Sync + ?Sized,
    {
        let n_samples = self.config.n_samples();
        let mut rng = match self.config.seed() {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        };

        debug!(
            n_samples,
            seed = rng.seed(),
            spot = market.spot,
            horizon_days,
            "monte carlo pricing run"
        );

        let mut terminals = vec![0.0_f64; n_samples];
        market.sample_terminal_into(horizon_days, &mut rng, &mut terminals)?;

        // Chunk partials arrive in slice order from collect, so the final
        // fold is independent of how rayon schedules the chunks.
        let partials: Vec<(f64, f64)> = terminals
            .par_chunks(CHUNK_SIZE)
            .map(|chunk| {
                let payoffs = payoff_source.payoffs(chunk);
                let sum: f64 = payoffs.iter().sum();
                let sum_sq: f64 = payoffs.iter().map(|p| p * p).sum();
                (sum, sum_sq)
            })
            .collect();

        let (sum, sum_sq) = partials
            .iter()
            .fold((0.0, 0.0), |(s, sq), &(ps, psq)| (s + ps, sq + psq));

        let n = n_samples as f64;
        let mean = sum / n;
        let variance = (sum_sq / n - mean * mean).max(0.0);
        let std_error = (variance / n).sqrt();

        Ok(PriceEstimate {
            price: mean,
            std_error,
        })
    }

    /// Prices a strategy and caches the scalar on it.
    ///
    /// This is the strategy-facing entry point: it prices the strategy as
    /// a payoff source, records the pricing spot as the strategy's
    /// reference spot, caches the scalar (overwriting any previous value),
    /// and returns it.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` under the same conditions as
    /// [`price`](Self::price).
    pub fn price_strategy(
        &self,
        strategy: &mut Strategy<f64>,
        market: &GbmParams,
        horizon_days: f64,
    ) -> Result<f64, SimulationError> {
        let estimate = self.price(&*strategy, market, horizon_days)?;

        // market.spot was validated positive by price(); the setter only
        // rejects negatives, so this cannot fail here.
        strategy
            .set_initial_stock_price(market.spot)
            .map_err(|_| SimulationError::InvalidSpot { spot: market.spot })?;
        strategy.set_price(estimate.price);

        Ok(estimate.price)
    }
}
