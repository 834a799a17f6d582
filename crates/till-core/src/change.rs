//! # Change Calculator
//!
//! Computes the change due for a purchase and the minimum number of bills
//! and coins that make it up.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ChangeCalculator::calculate                        │
//! │                                                                         │
//! │  ChangeRequest                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total purchased / total provided  (exact decimal sums)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  provided < purchased? ──────────────► InsufficientPayment             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  currency + denominations set? ──────► MissingConfiguration           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  change due = provided − purchased  (exact decimal)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  truncate to minor units ──► minimum piece count (table walk)           │
//! │       │                              │                                  │
//! │       │                              └──── no exact sum? ──► Unsatisfiable│
//! │       ▼                                                                 │
//! │  ChangeResult { change_due, piece_count }                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use std::collections::BTreeMap;
//! use rust_decimal_macros::dec;
//! use till_core::change::ChangeCalculator;
//! use till_core::types::{ChangeRequest, CurrencyConfig};
//!
//! let config = CurrencyConfig::with_active("USD", vec![dec!(0.25), dec!(1), dec!(5)]);
//! let calculator = ChangeCalculator::new(config);
//!
//! let request = ChangeRequest {
//!     purchase_lines: BTreeMap::from([(dec!(3.75), 1)]),
//!     payment_lines: BTreeMap::from([(dec!(5.00), 1)]),
//! };
//!
//! let result = calculator.calculate(&request).unwrap();
//! assert_eq!(result.change_due, dec!(1.25));
//! assert_eq!(result.piece_count, 2); // one $1 bill + one quarter
//! ```

use crate::error::{ChangeError, CoreResult, MissingSetting};
use crate::money;
use crate::types::{ChangeRequest, ChangeResult, CurrencyConfig};

// =============================================================================
// Change Calculator
// =============================================================================

/// Calculates change for purchases in the configured currency.
///
/// ## Design Decisions
/// - **Configuration injected at construction**: the config is an explicit
///   parameter, never reached through ambient or global state. Two
///   calculators with different configs coexist happily in one process.
/// - **No shared mutable state**: the only field is the read-only config.
///   Every `calculate` call builds its own working table and drops it
///   before returning, so `&self` calls are independent and need no locks.
pub struct ChangeCalculator {
    config: CurrencyConfig,
}

impl ChangeCalculator {
    /// Creates a calculator that uses the given currency configuration
    /// for every request.
    pub fn new(config: CurrencyConfig) -> Self {
        ChangeCalculator { config }
    }

    /// Calculates the change due and the minimum number of bills and
    /// coins to hand back.
    ///
    /// ## Steps
    /// 1. Sum purchase and payment lines exactly (no rounding)
    /// 2. Reject payment that does not cover the purchase
    /// 3. Resolve the active currency and its denomination table
    /// 4. Change due = provided − purchased, exact decimal
    /// 5. Truncate change due and denominations to integer minor units
    /// 6. Solve for the minimum piece count
    ///
    /// The payment check runs before the configuration check, so an
    /// underpaying request fails with `InsufficientPayment` even on a
    /// completely unconfigured calculator.
    ///
    /// ## Errors
    /// - [`ChangeError::InsufficientPayment`] - provided < purchased
    /// - [`ChangeError::MissingConfiguration`] - currency or denominations unset
    /// - [`ChangeError::UnsatisfiableChange`] - no denomination combination
    ///   sums exactly to the change due
    pub fn calculate(&self, request: &ChangeRequest) -> CoreResult<ChangeResult> {
        let purchased = request.total_purchased();
        let provided = request.total_provided();

        if provided < purchased {
            return Err(ChangeError::InsufficientPayment {
                purchased,
                provided,
            });
        }

        let currency = self
            .config
            .currency
            .as_deref()
            .ok_or(ChangeError::MissingConfiguration(MissingSetting::Currency))?;

        let faces = self
            .config
            .denominations
            .get(currency)
            .filter(|faces| !faces.is_empty())
            .ok_or_else(|| {
                ChangeError::MissingConfiguration(MissingSetting::Denominations {
                    currency: currency.to_string(),
                })
            })?;

        // Non-negative: the cover check above already rejected the rest.
        let change_due = provided - purchased;

        let unsatisfiable = || ChangeError::UnsatisfiableChange {
            change_due,
            currency: currency.to_string(),
        };

        // A change total past the representable minor-unit range has no
        // payout either.
        let target = money::to_minor_units(change_due).ok_or_else(unsatisfiable)?;

        // Denominations that cannot convert (negative faces) are skipped
        // rather than carried into the solve.
        let denominations: Vec<u64> = faces
            .iter()
            .filter_map(|&face| money::to_minor_units(face))
            .collect();

        let piece_count = min_piece_count(target, &denominations).ok_or_else(unsatisfiable)?;

        Ok(ChangeResult {
            change_due,
            piece_count,
        })
    }
}

// =============================================================================
// Minimum Piece Count
// =============================================================================

/// Solves the minimum-count change-making problem for `target` minor
/// units, bottom-up.
///
/// ## Table Construction
/// ```text
/// best[0] = 0                                   zero change, zero pieces
/// best[amount] = 1 + min(best[amount − d])      over denominations d ≤ amount
///                                               whose best[amount − d] is reachable
/// ```
///
/// Returns `None` when no combination of denominations sums exactly to
/// `target`. Zero-valued denominations never advance an amount, and faces
/// above the target never fit, so both are dropped before the walk.
///
/// O(target × denominations) time, O(target) space. The table lives and
/// dies inside this call; nothing is cached across requests.
fn min_piece_count(target: u64, denominations: &[u64]) -> Option<u32> {
    let target = usize::try_from(target).ok()?;
    let table_len = target.checked_add(1)?;

    let usable: Vec<usize> = denominations
        .iter()
        .filter_map(|&face| usize::try_from(face).ok())
        .filter(|&face| face > 0 && face <= target)
        .collect();

    let mut best: Vec<Option<u32>> = vec![None; table_len];
    best[0] = Some(0);

    for amount in 1..=target {
        best[amount] = usable
            .iter()
            .filter(|&&face| face <= amount)
            .filter_map(|&face| best[amount - face])
            .min()
            .map(|count| count + 1);
    }

    best[target]
}

// =============================================================================
// Unit Tests
// =============================================================================
