//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  └── ChangeError      - The three calculation failure modes            │
//! │      ├── InsufficientPayment   - tender does not cover the purchase    │
//! │      ├── MissingConfiguration  - currency settings absent/empty        │
//! │      └── UnsatisfiableChange   - no denomination combination works     │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  ├── InputError       - malformed console lines (re-prompted)          │
//! │  └── anyhow::Error    - bootstrap failures (settings unreadable, ...)  │
//! │                                                                         │
//! │  Flow: ChangeError ──► reported once by the host, never retried        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, currency code)
//! 3. Errors are enum variants, never String
//! 4. Every variant is deterministic for a given request + configuration,
//!    so callers report and stop instead of retrying

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Change Error
// =============================================================================

/// Change calculation failures.
///
/// These are the only ways a calculation can fail. Callers branch on the
/// variant, never on the message text.
#[derive(Debug, Error)]
pub enum ChangeError {
    /// The money tendered does not cover the purchase total.
    ///
    /// ## When This Occurs
    /// - total provided < total purchased (both exact decimal sums)
    ///
    /// The request itself is invalid; the customer owes more money.
    #[error("Payment of {provided} does not cover the purchase total of {purchased}")]
    InsufficientPayment {
        purchased: Decimal,
        provided: Decimal,
    },

    /// A required currency setting has not been provided.
    ///
    /// ## When This Occurs
    /// - no active currency code is configured, or
    /// - the active currency has no denomination list (or an empty one)
    ///
    /// This is a deployment problem, not a per-request problem. The host
    /// must complete its configuration before any request can succeed.
    #[error("Required setting has not been provided: {0}")]
    MissingConfiguration(MissingSetting),

    /// No combination of configured denominations sums to the change due.
    ///
    /// ## When This Occurs
    /// - the smallest denominations cannot compose the amount, e.g. change
    ///   of 28.50 with only whole-unit denominations {1, 2, 3}
    #[error("No combination of {currency} denominations adds up to the change due ({change_due})")]
    UnsatisfiableChange {
        change_due: Decimal,
        currency: String,
    },
}

// =============================================================================
// Missing Setting
// =============================================================================

/// Which currency setting was absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingSetting {
    /// No active currency code is set.
    Currency,

    /// The active currency has no denomination list, or an empty one.
    Denominations { currency: String },
}

impl fmt::Display for MissingSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingSetting::Currency => write!(f, "Currency"),
            MissingSetting::Denominations { currency } => {
                write!(f, "Denominations for currency ({currency})")
            }
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ChangeError.
pub type CoreResult<T> = Result<T, ChangeError>;

// =============================================================================
// Unit Tests
// =============================================================================
