//! Monte Carlo pricing kernel.
//!
//! Orchestration of the simulate-then-average pipeline:
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (sample count, optional seed)
//! ├── SimRng             (call-scoped random generator)
//! └── Orchestration
//!     ├── GbmParams::sample_terminal_into()
//!     ├── TerminalPayoff::payoffs() over chunks (rayon)
//!     └── signed mean + standard error
//! ```
//!
//! A pricing call either fully succeeds with one [`PriceEstimate`] or fully
//! fails with a [`SimulationError`]; there is no partial or streaming
//! result.
//!
//! # Examples
//!
//! ```rust
//! use optstrat_models::instruments::Instrument;
//! use optstrat_pricing::gbm::GbmParams;
//! use optstrat_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_samples(50_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let market = GbmParams::new(100.0, 0.05, 0.2).unwrap();
//! let call = Instrument::call(100.0).unwrap();
//!
//! let estimate = pricer.price(&call, &market, 365.0).unwrap();
//! assert!(estimate.price > 0.0);
//! assert!(estimate.std_error > 0.0);
//! ```

mod config;
mod error;
mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_SAMPLES};
pub use error::{ConfigError, SimulationError};
pub use pricer::{MonteCarloPricer, PriceEstimate};
