//! Option-type tag.
//!
//! A closed Call/Put enum used by the moneyness classifier and by strategy
//! constructors to validate leg placement. The set is closed on purpose:
//! unsupported tags cannot exist past the parse boundary, so classifier
//! code carries no "unknown type" error path.

use std::fmt;
use std::str::FromStr;

use super::error::OptionTypeError;

/// Exercise-right tag of a vanilla option.
///
/// Designed for static dispatch (enum-based); string tags only appear at
/// the parse boundary via [`FromStr`].
///
/// # Examples
///
/// ```
/// use optstrat_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.code(), "Call");
/// assert!(OptionType::Put.is_put());
///
/// // Parse from string (case-insensitive)
/// let parsed: OptionType = "put".parse().unwrap();
/// assert_eq!(parsed, OptionType::Put);
/// assert!("Collar".parse::<OptionType>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Returns the canonical tag string.
    pub fn code(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl FromStr for OptionType {
    type Err = OptionTypeError;

    /// Parses an option-type tag, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `OptionTypeError::Unknown` for anything other than
    /// "Call" or "Put".
    fn from_str(s: &str) -> Result<Self, OptionTypeError> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(OptionTypeError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
