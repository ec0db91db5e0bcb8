//! Terminal-payoff trait for priceable entities.
//!
//! Everything the Monte Carlo engine can price implements [`TerminalPayoff`]:
//! single instruments, signed positions, and composite strategies alike.
//! The trait is designed for static dispatch; prefer enum-based dispatch
//! over `Box<dyn TerminalPayoff>` when a closed set of variants exists.

use num_traits::Float;

/// Trait for entities with a European-style terminal payoff.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Contract
///
/// `payoff` must be pure: no side effects, no interior mutation, the same
/// result for the same terminal price. Batch evaluation via [`payoffs`]
/// is elementwise, so for any implementation the aggregate of a batch
/// equals the batch of aggregates — composition commutes with elementwise
/// evaluation.
///
/// [`payoffs`]: TerminalPayoff::payoffs
///
/// # Examples
///
/// ```
/// use num_traits::Float;
/// use optstrat_core::traits::TerminalPayoff;
///
/// struct Forward<T: Float> {
///     delivery_price: T,
/// }
///
/// impl<T: Float> TerminalPayoff<T> for Forward<T> {
///     fn payoff(&self, st: T) -> T {
///         st - self.delivery_price
///     }
/// }
///
/// let forward = Forward { delivery_price: 100.0_f64 };
/// assert_eq!(forward.payoff(110.0), 10.0);
/// assert_eq!(forward.payoffs(&[90.0, 100.0, 110.0]), vec![-10.0, 0.0, 10.0]);
/// ```
pub trait TerminalPayoff<T: Float> {
    /// Payoff at expiry for one terminal price of the underlying.
    fn payoff(&self, st: T) -> T;

    /// Elementwise payoff over a batch of terminal prices.
    ///
    /// The default implementation maps [`payoff`] over the slice; override
    /// only when a materially faster batched evaluation exists. Overrides
    /// must stay elementwise-consistent with the scalar method.
    ///
    /// [`payoff`]: TerminalPayoff::payoff
    fn payoffs(&self, st: &[T]) -> Vec<T> {
        st.iter().map(|&s| self.payoff(s)).collect()
    }
}

impl<T: Float, P: TerminalPayoff<T> + ?Sized> TerminalPayoff<T> for &P {
    #[inline]
    fn payoff(&self, st: T) -> T {
        (**self).payoff(st)
    }

    fn payoffs(&self, st: &[T]) -> Vec<T> {
        (**self).payoffs(st)
    }
}
