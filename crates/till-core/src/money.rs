//! # Money Module
//!
//! Exact decimal amounts and their conversion to integer minor units.
//!
//! ## Why Decimal Outside, Integers Inside?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: two representations, one boundary                        │
//! │    • Prices, tender, change due: rust_decimal (exact base 10)           │
//! │    • The change breakdown solve: integer minor units (cents)            │
//! │                                                                         │
//! │  Decimal keeps external totals exact to the last written digit;         │
//! │  integers make the breakdown a plain table walk with no rounding.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Conversion Is Truncating
//! `to_minor_units` multiplies by 100 and drops everything after the
//! decimal point (round toward zero). A value of `0.509` becomes 50 minor
//! units, not 51. Amounts that are whole multiples of the minor unit
//! convert exactly; anything finer silently loses its tail. Keep
//! denominations and prices on whole minor units unless that loss is
//! acceptable.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

// =============================================================================
// Minor Unit Conversion
// =============================================================================

/// Number of minor units in one major unit (cents per dollar, centavos
/// per peso). Fixed at 100 for every supported currency.
pub const MINOR_UNITS_PER_MAJOR: u32 = 100;

/// Converts a decimal amount to integer minor units, truncating toward
/// zero.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use till_core::money::to_minor_units;
///
/// assert_eq!(to_minor_units(dec!(28.50)), Some(2850));
/// assert_eq!(to_minor_units(dec!(0.509)), Some(50)); // tail truncated
/// ```
///
/// Returns `None` for negative amounts and for amounts past the
/// representable minor-unit range (the scaling is checked, so even
/// amounts near `Decimal::MAX` refuse rather than overflow).
#[inline]
pub fn to_minor_units(amount: Decimal) -> Option<u64> {
    amount
        .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
        .and_then(|scaled| scaled.trunc().to_u64())
}

/// Multiplies a unit value by a quantity, exactly.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use till_core::money::line_total;
///
/// assert_eq!(line_total(dec!(0.50), 3), dec!(1.50));
/// ```
///
/// Saturates at `Decimal::MAX` instead of overflowing when the product
/// leaves the decimal range.
#[inline]
pub fn line_total(unit_value: Decimal, quantity: u32) -> Decimal {
    unit_value.saturating_mul(Decimal::from(quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_whole_minor_units_convert_exactly() {
        assert_eq!(to_minor_units(dec!(28.50)), Some(2850));
        assert_eq!(to_minor_units(dec!(0.01)), Some(1));
        assert_eq!(to_minor_units(dec!(100)), Some(10000));
        assert_eq!(to_minor_units(dec!(0)), Some(0));
    }

    #[test]
    fn test_sub_minor_tails_truncate_toward_zero() {
        assert_eq!(to_minor_units(dec!(0.509)), Some(50));
        assert_eq!(to_minor_units(dec!(0.999)), Some(99));
        assert_eq!(to_minor_units(dec!(10.019)), Some(1001));
        assert_eq!(to_minor_units(dec!(0.001)), Some(0));
    }

    #[test]
    fn test_negative_amounts_do_not_convert() {
        assert_eq!(to_minor_units(dec!(-0.50)), None);
        assert_eq!(to_minor_units(dec!(-100)), None);
    }

    #[test]
    fn test_amounts_past_the_minor_unit_range_do_not_convert() {
        // Scaling by 100 would leave the decimal range entirely
        assert_eq!(to_minor_units(Decimal::MAX), None);
        // Scales fine but exceeds u64 minor units
        assert_eq!(to_minor_units(dec!(200000000000000000000)), None);
    }

    #[test]
    fn test_line_total_is_exact() {
        // The canonical float counterexample: 0.1 × 3 must be exactly 0.3
        assert_eq!(line_total(dec!(0.1), 3), dec!(0.3));
        assert_eq!(line_total(dec!(10.00), 1), dec!(10.00));
        assert_eq!(line_total(dec!(2.99), 0), dec!(0));
    }

    #[test]
    fn test_line_total_saturates_at_decimal_max() {
        assert_eq!(line_total(Decimal::MAX, 3), Decimal::MAX);
    }
}
