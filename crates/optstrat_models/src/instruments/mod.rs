//! Financial instrument definitions.
//!
//! This module provides the payoff units a strategy is built from, with
//! enum dispatch for the closed set of variants:
//!
//! - [`Instrument::Stock`]: linear payoff against a reference price
//! - [`Instrument::Call`]: `max(0, st - strike)`
//! - [`Instrument::Put`]: `max(0, strike - st)`
//!
//! Instruments are immutable once constructed; constructors validate that
//! strikes and reference prices are non-negative.
//!
//! # Examples
//!
//! ```
//! use optstrat_core::traits::TerminalPayoff;
//! use optstrat_models::instruments::Instrument;
//!
//! let call = Instrument::call(100.0_f64).unwrap();
//! assert_eq!(call.payoff(110.0), 10.0);
//! assert_eq!(call.payoff(90.0), 0.0);
//!
//! // A stock leg has no strike to query.
//! let stock = Instrument::stock(100.0_f64).unwrap();
//! assert!(stock.strike().is_err());
//! ```

mod error;
mod instrument;

pub use error::InstrumentError;
pub use instrument::Instrument;
