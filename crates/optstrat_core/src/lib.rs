//! # optstrat_core: Foundation Layer for Option-Strategy Pricing
//!
//! ## Role
//!
//! optstrat_core is the bottom layer of the three-crate workspace, providing:
//! - The terminal-payoff trait shared by instruments and composite
//!   strategies (`traits::payoff`)
//! - The closed option-type tag with boundary parsing (`types::option_type`)
//! - Moneyness classification predicates (`moneyness`)
//! - Error types: `PricingError`, `OptionTypeError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other optstrat_* crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derived error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use optstrat_core::moneyness::{is_atm, is_itm, is_otm};
//! use optstrat_core::types::OptionType;
//!
//! // A strike pinned exactly at spot is neither in nor out of the money.
//! assert!(!is_otm(OptionType::Call, 100.0, 100.0));
//! assert!(!is_itm(OptionType::Call, 100.0, 100.0));
//! assert!(is_atm(OptionType::Call, 100.0, 100.0, None));
//!
//! // Tolerance-banded ATM test, inclusive at both bounds.
//! assert!(is_atm(OptionType::Put, 100.0, 95.0, Some(5.0)));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod moneyness;
pub mod traits;
pub mod types;
