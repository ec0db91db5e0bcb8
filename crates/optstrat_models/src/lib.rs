//! # optstrat_models: Instruments and Strategy Aggregation
//!
//! ## Role
//!
//! The middle layer of the workspace. It defines what can be held —
//! the [`Instrument`](instruments::Instrument) sum type over Stock, Call,
//! and Put — and how holdings compose: signed [`Position`](portfolio::Position)s
//! aggregated by a [`Strategy`](portfolio::Strategy) whose payoff is the
//! quantity-weighted sum of its legs.
//!
//! A `Strategy` implements the same
//! [`TerminalPayoff`](optstrat_core::traits::TerminalPayoff) contract as a
//! single instrument, so strategies nest: a whole strategy can sit as one
//! leg of a larger structure and be priced by the same engine.
//!
//! ## Architecture
//!
//! Uses enum dispatch (not trait objects) for static dispatch:
//! - `Instrument<T>` enumerates the payoff variants
//! - `Leg<T>` enumerates what a position can hold (instrument or nested
//!   strategy)
//! - All types are generic over `T: Float`
//!
//! ## Usage Examples
//!
//! ```
//! use optstrat_core::traits::TerminalPayoff;
//! use optstrat_models::instruments::Instrument;
//! use optstrat_models::portfolio::Strategy;
//!
//! let mut spread = Strategy::new("Bull Put Spread");
//! spread
//!     .add_position(vec![
//!         (1, Instrument::put(270.0).unwrap()),
//!         (-1, Instrument::put(280.0).unwrap()),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(spread.payoff(280.0), 0.0);
//! assert_eq!(spread.payoff(270.0), -10.0);
//! assert_eq!(spread.payoff(275.0), -5.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for instruments and positions

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod portfolio;
