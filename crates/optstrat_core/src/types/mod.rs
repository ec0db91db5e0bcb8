//! Core types shared across the workspace.
//!
//! This module provides:
//! - [`OptionType`]: closed Call/Put tag with boundary parsing
//! - [`PricingError`]: umbrella error categories for the pricing stack
//! - [`OptionTypeError`]: parse failures at the string boundary

pub mod error;
pub mod option_type;

pub use error::{OptionTypeError, PricingError};
pub use option_type::OptionType;
