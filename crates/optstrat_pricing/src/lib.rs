//! # optstrat_pricing: Monte Carlo Strategy Pricing Engine
//!
//! ## Role
//!
//! The engine layer of the workspace. It turns a terminal-payoff source —
//! a single instrument or a whole strategy — into a price estimate by
//! simulate-then-average under a one-step lognormal model:
//!
//! 1. [`rng`]: seeded, reproducible random number generation
//! 2. [`gbm`]: geometric Brownian motion terminal-price sampling
//! 3. [`mc`]: the Monte Carlo pricer with validated configuration
//!
//! ## Pricing semantics
//!
//! The reduction is the **signed arithmetic mean** of the sampled payoffs:
//! a net-short strategy with negative expectation prices negative. No
//! discounting is applied; the caller-supplied drift is used directly, so
//! callers wanting risk-neutral prices pass the risk-free rate as drift
//! and discount the result themselves.
//!
//! ## Reproducibility
//!
//! Each pricing call scopes its random generator to the call: a seeded
//! configuration reproduces the same estimate bit-for-bit, and no call
//! perturbs the randomness of any other.
//!
//! ## Usage Example
//!
//! ```rust
//! use optstrat_models::instruments::Instrument;
//! use optstrat_models::portfolio::Strategy;
//! use optstrat_pricing::gbm::GbmParams;
//! use optstrat_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let mut spread = Strategy::new("Bull Put Spread");
//! spread
//!     .add_position(vec![
//!         (1, Instrument::put(270.0).unwrap()),
//!         (-1, Instrument::put(280.0).unwrap()),
//!     ])
//!     .unwrap();
//!
//! let config = MonteCarloConfig::builder()
//!     .n_samples(100_000)
//!     .seed(123)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let market = GbmParams::new(275.0, 0.05, 0.15).unwrap();
//! let price = pricer.price_strategy(&mut spread, &market, 30.0).unwrap();
//!
//! // The scalar is cached on the strategy for later reads.
//! assert_eq!(spread.price().unwrap(), price);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for configuration and estimates

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod gbm;
pub mod mc;
pub mod rng;
