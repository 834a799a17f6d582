//! # till-core: Pure Change-Making Logic for Till
//!
//! This crate is the **heart** of Till. It contains the whole change
//! calculation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console App (apps/cli)                       │   │
//! │  │   settings loading ──► prompts ──► calculate ──► report         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ till-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  change   │  │   error   │  │   │
//! │  │   │  Request  │  │  Decimal  │  │Calculator │  │  3 modes  │  │   │
//! │  │   │  Result   │  │  ↔ minor  │  │ DP solve  │  │  typed    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • NO FLOATS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ChangeRequest, ChangeResult, CurrencyConfig)
//! - [`money`] - Exact decimal amounts and minor-unit conversion
//! - [`change`] - The change calculator (validation + breakdown solve)
//! - [`error`] - The three typed failure modes
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same request + same configuration = same answer
//! 2. **No I/O**: prompting, settings files, and logging live in the host
//! 3. **Decimal Outside, Integers Inside**: totals stay exact base-10;
//!    only the breakdown solve works on integer minor units
//! 4. **Explicit Errors**: all failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use rust_decimal_macros::dec;
//! use till_core::{ChangeCalculator, ChangeRequest, CurrencyConfig};
//!
//! // Configuration is handed to the calculator, never pulled from globals
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

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::ChangeCalculator` instead of
// `use till_core::change::ChangeCalculator`

pub use change::ChangeCalculator;
pub use error::{ChangeError, CoreResult, MissingSetting};
pub use money::{line_total, to_minor_units, MINOR_UNITS_PER_MAJOR};
pub use types::{ChangeRequest, ChangeResult, CurrencyConfig};
