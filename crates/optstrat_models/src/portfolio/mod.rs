//! Position and strategy aggregation.
//!
//! A [`Strategy`] is an insertion-ordered collection of signed
//! [`Position`]s whose terminal payoff is the quantity-weighted sum of its
//! legs. Ordering matters to callers: catalog code indexes legs by position
//! ("the second leg is the short call"), so positions are append-only and
//! never reordered.
//!
//! A strategy satisfies the same payoff contract as a single instrument and
//! can therefore sit as one leg of a larger strategy, via [`Leg::Strategy`].
//!
//! # Examples
//!
//! ```
//! use optstrat_core::traits::TerminalPayoff;
//! use optstrat_models::instruments::Instrument;
//! use optstrat_models::portfolio::Strategy;
//!
//! let mut butterfly = Strategy::new("Butterfly");
//! butterfly
//!     .add_position(vec![
//!         (1, Instrument::call(14.0).unwrap()),
//!         (1, Instrument::call(10.0).unwrap()),
//!         (-2, Instrument::call(12.0).unwrap()),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(butterfly.payoff(12.0), 2.0);
//! assert_eq!(butterfly.payoff(10.0), 0.0);
//! assert_eq!(butterfly.payoff(16.0), 0.0);
//! ```

mod error;
mod position;
mod strategy;

pub use error::StrategyError;
pub use position::{Leg, Position};
pub use strategy::Strategy;
