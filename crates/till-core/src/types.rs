//! # Domain Types
//!
//! Core data structures shared between the calculator and its hosts.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  CurrencyConfig ──────┐  loaded once, injected at construction          │
//! │                       ▼                                                 │
//! │  ChangeRequest ──► ChangeCalculator::calculate ──► ChangeResult         │
//! │   purchase_lines      (change module)               change_due          │
//! │   payment_lines                                     piece_count         │
//! │                                                                         │
//! │  Every amount is a Decimal; quantities and counts are integers          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

// =============================================================================
// Change Request
// =============================================================================

/// One change calculation: what was bought and what was handed over.
///
/// ## Keyed Line Collections
/// Both collections are maps keyed by a monetary value, so each distinct
/// price or denomination appears exactly once. Two items at the same unit
/// price share one purchase line; five ten-dollar bills are one payment
/// line with quantity 5. `Decimal` keys compare by numeric value, so
/// `10.0` and `10.00` are the same key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// Unit price → quantity purchased at that price.
    pub purchase_lines: BTreeMap<Decimal, u32>,

    /// Denomination face value → quantity tendered.
    pub payment_lines: BTreeMap<Decimal, u32>,
}

impl ChangeRequest {
    /// Total cost of the purchase: Σ price × quantity, exact decimal.
    /// Saturates at `Decimal::MAX` rather than overflowing.
    pub fn total_purchased(&self) -> Decimal {
        self.purchase_lines
            .iter()
            .map(|(&price, &quantity)| money::line_total(price, quantity))
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line))
    }

    /// Total money tendered: Σ denomination × quantity, exact decimal.
    /// Saturates at `Decimal::MAX` rather than overflowing.
    pub fn total_provided(&self) -> Decimal {
        self.payment_lines
            .iter()
            .map(|(&denomination, &quantity)| money::line_total(denomination, quantity))
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line))
    }
}

// =============================================================================
// Change Result
// =============================================================================

/// The outcome of a successful change calculation.
///
/// Built fresh for every request; nothing is cached or reused between
/// calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeResult {
    /// Exact change owed to the customer (total provided − total
    /// purchased). Never negative.
    pub change_due: Decimal,

    /// Minimum number of bills and coins that make up `change_due` using
    /// the configured denominations.
    pub piece_count: u32,
}

// =============================================================================
// Currency Config
// =============================================================================

/// Currency configuration supplied by the host application.
///
/// ## Lifecycle
/// ```text
/// settings file / environment
///      │  (host loads once at startup)
///      ▼
/// CurrencyConfig ──► ChangeCalculator::new ──► read-only for every call
/// ```
///
/// Absent settings are representable (`None` currency, missing map entry)
/// rather than invalid: the calculator reports them as typed
/// `MissingConfiguration` failures when a request actually needs them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Active currency code (e.g. "USD"). `None` when unset.
    pub currency: Option<String>,

    /// Currency code → denomination face values available in that
    /// currency. May hold tables for currencies that are not active.
    pub denominations: HashMap<String, Vec<Decimal>>,
}

impl CurrencyConfig {
    /// Builds a configuration with a single active currency and its
    /// denomination table.
    pub fn with_active(currency: &str, denominations: Vec<Decimal>) -> Self {
        let mut tables = HashMap::new();
        tables.insert(currency.to_string(), denominations);
        CurrencyConfig {
            currency: Some(currency.to_string()),
            denominations: tables,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
