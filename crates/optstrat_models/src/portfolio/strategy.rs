//! Strategy aggregation and cached-price state.

use std::fmt;

use num_traits::Float;

use optstrat_core::traits::TerminalPayoff;

use crate::instruments::Instrument;

use super::error::StrategyError;
use super::position::Position;

/// A named, ordered collection of signed positions.
///
/// The terminal payoff of a strategy is the sum over its positions of
/// `quantity * leg.payoff(st)` — linear in quantities and additive across
/// legs, for scalar and batched evaluation alike.
///
/// Positions are append-only: callers that index legs by position
/// ("the second leg is the short call") can rely on insertion order being
/// preserved exactly. The only mutable, re-derivable state is the cached
/// price, written by the pricing engine on every pricing call, and the
/// reference spot recorded alongside it.
///
/// # Examples
///
/// ```
/// use optstrat_core::traits::TerminalPayoff;
/// use optstrat_models::instruments::Instrument;
/// use optstrat_models::portfolio::Strategy;
///
/// let mut spread = Strategy::new("Bull Put Spread");
/// spread
///     .add_position(vec![
///         (1, Instrument::put(270.0).unwrap()),
///         (-1, Instrument::put(280.0).unwrap()),
///     ])
///     .unwrap();
///
/// assert_eq!(spread.positions().len(), 2);
/// assert_eq!(spread.payoff(275.0), -5.0);
///
/// // The cached price is an error until a pricing call sets it.
/// assert!(spread.price().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strategy<T: Float> {
    name: String,
    positions: Vec<Position<T>>,
    initial_stock_price: Option<T>,
    price: Option<T>,
}

impl<T: Float> Strategy<T> {
    /// Creates an empty strategy with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positions: Vec::new(),
            initial_stock_price: None,
            price: None,
        }
    }

    /// Returns the strategy name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the positions in insertion order.
    #[inline]
    pub fn positions(&self) -> &[Position<T>] {
        &self.positions
    }

    /// Appends one position per `(quantity, instrument)` pair, preserving
    /// input order.
    ///
    /// Validation happens before anything is appended, so a failing pair
    /// leaves the strategy unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::ZeroQuantity` if any pair has quantity zero.
    pub fn add_position(
        &mut self,
        positions: impl IntoIterator<Item = (i32, Instrument<T>)>,
    ) -> Result<(), StrategyError> {
        let validated = positions
            .into_iter()
            .map(|(quantity, instrument)| Position::new(quantity, instrument))
            .collect::<Result<Vec<_>, _>>()?;
        self.positions.extend(validated);
        Ok(())
    }

    /// Appends a whole strategy as a single signed leg.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::ZeroQuantity` if `quantity == 0`.
    pub fn add_composite(
        &mut self,
        quantity: i32,
        strategy: Strategy<T>,
    ) -> Result<(), StrategyError> {
        self.positions.push(Position::nested(quantity, strategy)?);
        Ok(())
    }

    /// Returns the recorded reference spot, if any pricing call set one.
    #[inline]
    pub fn initial_stock_price(&self) -> Option<T> {
        self.initial_stock_price
    }

    /// Records the reference spot the strategy was priced against.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidSpot` if `value` is negative.
    pub fn set_initial_stock_price(&mut self, value: T) -> Result<(), StrategyError> {
        if value < T::zero() {
            return Err(StrategyError::InvalidSpot {
                spot: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.initial_stock_price = Some(value);
        Ok(())
    }

    /// Returns the cached price from the most recent pricing call.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::Unpriced` if no pricing call has happened.
    pub fn price(&self) -> Result<T, StrategyError> {
        self.price.ok_or_else(|| StrategyError::Unpriced {
            name: self.name.clone(),
        })
    }

    /// Caches a freshly computed price, overwriting any previous value.
    #[inline]
    pub fn set_price(&mut self, value: T) {
        self.price = Some(value);
    }
}

impl<T: Float> TerminalPayoff<T> for Strategy<T> {
    fn payoff(&self, st: T) -> T {
        self.positions
            .iter()
            .fold(T::zero(), |acc, position| acc + position.payoff(st))
    }
}

impl<T: Float> fmt::Display for Strategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy: {}", self.name)?;
        writeln!(f, "{}", "-".repeat(20))?;
        for position in &self.positions {
            writeln!(f, "{}", position)?;
        }
        write!(f, "{}", "-".repeat(20))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optstrat_core::types::OptionType;

    fn bull_put_spread() -> Strategy<f64> {
        let mut spread = Strategy::new("Bull Put Spread");
        spread
            .add_position(vec![
                (1, Instrument::put(270.0).unwrap()),
                (-1, Instrument::put(280.0).unwrap()),
            ])
            .unwrap();
        spread
    }

    #[test]
    fn test_payoff_is_signed_sum_of_legs() {
        let spread = bull_put_spread();
        assert_eq!(spread.payoff(280.0), 0.0);
        assert_eq!(spread.payoff(270.0), -10.0);
        assert_eq!(spread.payoff(275.0), -5.0);
    }

    #[test]
    fn test_empty_strategy_payoff_is_zero() {
        let empty: Strategy<f64> = Strategy::new("Empty");
        assert_eq!(empty.payoff(100.0), 0.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let spread = bull_put_spread();
        let positions = spread.positions();

        assert_eq!(positions[0].quantity(), 1);
        assert_eq!(positions[0].strike().unwrap(), 270.0);
        assert_eq!(positions[1].quantity(), -1);
        assert_eq!(positions[1].strike().unwrap(), 280.0);
        assert_eq!(positions[1].option_type(), Some(OptionType::Put));
    }

    #[test]
    fn test_add_position_is_atomic_on_failure() {
        let mut strategy: Strategy<f64> = Strategy::new("Broken");
        let result = strategy.add_position(vec![
            (1, Instrument::call(100.0).unwrap()),
            (0, Instrument::call(110.0).unwrap()),
        ]);

        assert_eq!(result.unwrap_err(), StrategyError::ZeroQuantity);
        assert!(strategy.positions().is_empty());
    }

    #[test]
    fn test_price_cache_lifecycle() {
        let mut spread = bull_put_spread();

        assert_eq!(
            spread.price().unwrap_err(),
            StrategyError::Unpriced {
                name: "Bull Put Spread".to_string()
            }
        );

        spread.set_price(-4.7);
        assert_eq!(spread.price().unwrap(), -4.7);

        // Each pricing call overwrites the previous cache.
        spread.set_price(-4.9);
        assert_eq!(spread.price().unwrap(), -4.9);
    }

    #[test]
    fn test_initial_stock_price_validation() {
        let mut spread = bull_put_spread();
        assert_eq!(spread.initial_stock_price(), None);

        spread.set_initial_stock_price(275.0).unwrap();
        assert_eq!(spread.initial_stock_price(), Some(275.0));

        let err = spread.set_initial_stock_price(-1.0).unwrap_err();
        assert_eq!(err, StrategyError::InvalidSpot { spot: -1.0 });
        // The previous value survives a failed update.
        assert_eq!(spread.initial_stock_price(), Some(275.0));
    }

    #[test]
    fn test_batch_payoff_matches_scalar() {
        let spread = bull_put_spread();
        let st = [260.0, 270.0, 275.0, 280.0, 300.0];
        let batch = spread.payoffs(&st);
        for (i, &s) in st.iter().enumerate() {
            assert_eq!(batch[i], spread.payoff(s));
        }
    }

    #[test]
    fn test_covered_put_with_stock_leg() {
        let mut covered_put = Strategy::new("Covered Put");
        covered_put
            .add_position(vec![
                (-1, Instrument::stock(15.0).unwrap()),
                (-1, Instrument::put(12.0).unwrap()),
            ])
            .unwrap();

        // Short stock gains as the underlying falls; the short put caps it.
        assert_eq!(covered_put.payoff(15.0), 0.0);
        assert_eq!(covered_put.payoff(12.0), 3.0);
        assert_eq!(covered_put.payoff(10.0), 3.0);
        assert_eq!(covered_put.payoff(18.0), -3.0);
    }

    #[test]
    fn test_nested_strategy_prices_like_flat_equivalent() {
        // A strangle built as two nested single-leg strategies.
        let mut call_leg = Strategy::new("Call Leg");
        call_leg
            .add_position(vec![(1, Instrument::call(105.0).unwrap())])
            .unwrap();

        let mut put_leg = Strategy::new("Put Leg");
        put_leg
            .add_position(vec![(1, Instrument::put(95.0).unwrap())])
            .unwrap();

        let mut nested = Strategy::new("Strangle (nested)");
        nested.add_composite(1, call_leg).unwrap();
        nested.add_composite(1, put_leg).unwrap();

        let mut flat = Strategy::new("Strangle (flat)");
        flat.add_position(vec![
            (1, Instrument::call(105.0).unwrap()),
            (1, Instrument::put(95.0).unwrap()),
        ])
        .unwrap();

        for st in [80.0, 95.0, 100.0, 105.0, 120.0] {
            assert_eq!(nested.payoff(st), flat.payoff(st));
        }
    }

    #[test]
    fn test_display_report_block() {
        let spread = bull_put_spread();
        let report = format!("{}", spread);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Strategy: Bull Put Spread");
        assert_eq!(lines[1], "-".repeat(20));
        assert_eq!(lines[2], "Long 1 Put @ 270.00");
        assert_eq!(lines[3], "Short 1 Put @ 280.00");
        assert_eq!(lines[4], "-".repeat(20));
    }

    mod property_tests {
        use proptest::prelude::*;

        use crate::instruments::Instrument;
        // Explicit import so our type wins over the prelude's `Strategy` trait.
        use crate::portfolio::Strategy;

        use optstrat_core::traits::TerminalPayoff;

        fn strike() -> impl proptest::strategy::Strategy<Value = f64> {
            1.0..500.0
        }

        fn quantity() -> impl proptest::strategy::Strategy<Value = i32> {
            prop_oneof![-10..=-1_i32, 1..=10_i32]
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_payoff_linearity(
                q1 in quantity(),
                q2 in quantity(),
                k1 in strike(),
                k2 in strike(),
                st in 0.0..1_000.0
            ) {
                let call = Instrument::call(k1).unwrap();
                let put = Instrument::put(k2).unwrap();

                let mut strategy = Strategy::new("Two Legs");
                strategy.add_position(vec![(q1, call), (q2, put)]).unwrap();

                let expected = f64::from(q1) * call.payoff(st) + f64::from(q2) * put.payoff(st);
                prop_assert!((strategy.payoff(st) - expected).abs() < 1e-9);
            }

            #[test]
            fn test_scaling_quantities_scales_payoff(
                q in quantity(),
                scale in 2..=5_i32,
                k in strike(),
                st in 0.0..1_000.0
            ) {
                let put = Instrument::put(k).unwrap();

                let mut base = Strategy::new("Base");
                base.add_position(vec![(q, put)]).unwrap();

                let mut scaled = Strategy::new("Scaled");
                scaled.add_position(vec![(q * scale, put)]).unwrap();

                let expected = f64::from(scale) * base.payoff(st);
                prop_assert!((scaled.payoff(st) - expected).abs() < 1e-9);
            }
        }
    }
}
