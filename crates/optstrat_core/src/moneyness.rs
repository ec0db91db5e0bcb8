//! Moneyness classification predicates.
//!
//! Pure functions classifying a strike relative to spot for a given option
//! type. Strategy constructors use these to validate leg placement before
//! accepting a strategy as well-formed (a short call of a covered call must
//! be out of the money, the body of a butterfly at the money, and so on).
//!
//! The in/out tests use strict inequalities: a strike pinned exactly at
//! spot is neither in nor out of the money. The ATM test is exact equality
//! unless a tolerance band is supplied, in which case the band is symmetric
//! and inclusive at both bounds.

use num_traits::Float;

use crate::types::OptionType;

/// Returns whether the strike is out of the money relative to spot.
///
/// For a call: `strike > spot`. For a put: `strike < spot`. The boundary
/// `strike == spot` is out-of-the-money for neither type.
///
/// # Examples
///
/// ```
/// use optstrat_core::moneyness::is_otm;
/// use optstrat_core::types::OptionType;
///
/// assert!(is_otm(OptionType::Call, 100.0, 105.0));
/// assert!(is_otm(OptionType::Put, 100.0, 95.0));
/// assert!(!is_otm(OptionType::Call, 100.0, 100.0));
/// ```
#[inline]
pub fn is_otm<T: Float>(option_type: OptionType, spot: T, strike: T) -> bool {
    match option_type {
        OptionType::Call => strike > spot,
        OptionType::Put => strike < spot,
    }
}

/// Returns whether the strike is in the money relative to spot.
///
/// For a call: `strike < spot`. For a put: `strike > spot`. The boundary
/// `strike == spot` is in-the-money for neither type.
///
/// # Examples
///
/// ```
/// use optstrat_core::moneyness::is_itm;
/// use optstrat_core::types::OptionType;
///
/// assert!(is_itm(OptionType::Call, 100.0, 95.0));
/// assert!(is_itm(OptionType::Put, 100.0, 105.0));
/// assert!(!is_itm(OptionType::Put, 100.0, 100.0));
/// ```
#[inline]
pub fn is_itm<T: Float>(option_type: OptionType, spot: T, strike: T) -> bool {
    match option_type {
        OptionType::Call => strike < spot,
        OptionType::Put => strike > spot,
    }
}

/// Returns whether the strike is at the money relative to spot.
///
/// With `tolerance` unset this is exact equality. With a tolerance it is
/// the inclusive band `spot - tolerance <= strike <= spot + tolerance`.
/// The result does not depend on the option type; the parameter is kept so
/// the classifier triple reads uniformly at call sites.
///
/// # Examples
///
/// ```
/// use optstrat_core::moneyness::is_atm;
/// use optstrat_core::types::OptionType;
///
/// assert!(is_atm(OptionType::Call, 100.0, 100.0, None));
/// assert!(!is_atm(OptionType::Call, 100.0, 99.9, None));
///
/// // Inclusive band of +/- 5 around spot.
/// assert!(is_atm(OptionType::Put, 100.0, 95.0, Some(5.0)));
/// assert!(!is_atm(OptionType::Put, 100.0, 94.999, Some(5.0)));
/// ```
#[inline]
pub fn is_atm<T: Float>(
    _option_type: OptionType,
    spot: T,
    strike: T,
    tolerance: Option<T>,
) -> bool {
    match tolerance {
        None => strike == spot,
        Some(tol) => strike >= spot - tol && strike <= spot + tol,
    }
}
