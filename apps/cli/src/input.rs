//! # Console Input
//!
//! Prompts for and parses the purchase and payment lines of one
//! calculation.
//!
//! ## Input Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One line of whitespace-separated value,quantity pairs:                 │
//! │                                                                         │
//! │     10.00,1 0.50,3                                                      │
//! │     └──┬─┘ └─┬──┘                                                       │
//! │        │     └── three items at 0.50 each                               │
//! │        └──────── one item at 10.00                                      │
//! │                                                                         │
//! │  Purchase lines: value = unit price      (zero allowed, free items)     │
//! │  Payment lines:  value = denomination    (strictly positive)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed line never reaches the calculator: the prompt loop reports
//! what was wrong and asks for the whole line again.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Input Error
// =============================================================================

/// Problems with a single console line.
///
/// Every variant is recoverable by retyping the line, which is exactly
/// what the prompt loop does.
#[derive(Debug, Error)]
pub enum InputError {
    /// The line contained no entries at all.
    #[error("Expected at least one value,quantity pair")]
    Empty,

    /// An entry was not a `value,quantity` pair.
    #[error("'{entry}' is not a value,quantity pair")]
    MalformedPair { entry: String },

    /// The value half of a pair did not parse as a decimal amount.
    #[error("'{value}' is not a decimal amount")]
    InvalidAmount { value: String },

    /// The quantity half did not parse as a non-negative integer.
    #[error("'{quantity}' is not a valid quantity")]
    InvalidQuantity { quantity: String },

    /// The value half violated the collection's range rule.
    #[error("Value {value} must be {expected}")]
    OutOfRange {
        value: Decimal,
        expected: &'static str,
    },

    /// The same value appeared twice; each price or denomination gets
    /// exactly one line.
    #[error("Duplicate entry for value {value}")]
    DuplicateEntry { value: Decimal },
}

// =============================================================================
// Value Rule
// =============================================================================

/// Which range the value half of a pair must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Unit prices: zero is a legitimate price, negative is not.
    NonNegative,

    /// Denomination face values: handing over a zero or negative bill is
    /// meaningless.
    Positive,
}

impl ValueRule {
    fn allows(self, value: Decimal) -> bool {
        match self {
            ValueRule::NonNegative => value >= Decimal::ZERO,
            ValueRule::Positive => value > Decimal::ZERO,
        }
    }

    fn expected(self) -> &'static str {
        match self {
            ValueRule::NonNegative => "zero or positive",
            ValueRule::Positive => "positive",
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses one console line of whitespace-separated `value,quantity`
/// pairs into a map keyed by value.
///
/// ## Rules
/// - at least one pair
/// - value: a decimal amount in range per `rule`
/// - quantity: a non-negative integer
/// - no duplicate values; `10.0` and `10.00` are the same value and
///   collide
pub fn parse_entries(
    line: &str,
    rule: ValueRule,
) -> Result<BTreeMap<Decimal, u32>, InputError> {
    let mut entries = BTreeMap::new();

    for entry in line.split_whitespace() {
        let (value, quantity) = entry.split_once(',').ok_or_else(|| InputError::MalformedPair {
            entry: entry.to_string(),
        })?;

        let value: Decimal = value.parse().map_err(|_| InputError::InvalidAmount {
            value: value.to_string(),
        })?;

        let quantity: u32 = quantity.parse().map_err(|_| InputError::InvalidQuantity {
            quantity: quantity.to_string(),
        })?;

        if !rule.allows(value) {
            return Err(InputError::OutOfRange {
                value,
                expected: rule.expected(),
            });
        }

        if entries.insert(value, quantity).is_some() {
            return Err(InputError::DuplicateEntry { value });
        }
    }

    if entries.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(entries)
}

// =============================================================================
// Prompt Loop
// =============================================================================

/// Prints `instruction`, then reads lines until one parses cleanly.
///
/// A bad line costs one retype, not the whole session: the loop reports
/// the problem on `writer` and asks again.
///
/// ## Errors
/// Only I/O failures surface here. End of input before a valid line is
/// an `UnexpectedEof` error, so a closed stdin cannot spin the loop
/// forever.
pub fn prompt_entries(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    instruction: &str,
    rule: ValueRule,
) -> io::Result<BTreeMap<Decimal, u32>> {
    writeln!(writer, "{instruction}")?;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid line was entered",
            ));
        }

        match parse_entries(&line, rule) {
            Ok(entries) => return Ok(entries),
            Err(problem) => writeln!(writer, "Input was malformed ({problem}), try again:")?,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn test_parses_pairs_into_keyed_lines() {
        let entries = parse_entries("10.00,1 0.50,3", ValueRule::NonNegative).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get(&dec!(10.00)), Some(&1));
        assert_eq!(entries.get(&dec!(0.50)), Some(&3));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let entries = parse_entries("  20.00,1   10.00,2  ", ValueRule::Positive).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_rejects_empty_line() {
        assert!(matches!(
            parse_entries("   ", ValueRule::NonNegative),
            Err(InputError::Empty)
        ));
    }

    #[test]
    fn test_rejects_entry_without_comma() {
        assert!(matches!(
            parse_entries("10.00 1", ValueRule::NonNegative),
            Err(InputError::MalformedPair { .. })
        ));
    }

    #[test]
    fn test_rejects_unparseable_halves() {
        assert!(matches!(
            parse_entries("ten,1", ValueRule::NonNegative),
            Err(InputError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_entries("10.00,one", ValueRule::NonNegative),
            Err(InputError::InvalidQuantity { .. })
        ));
        // u32 quantity: negative never parses
        assert!(matches!(
            parse_entries("10.00,-1", ValueRule::NonNegative),
            Err(InputError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_duplicate_values_collide_across_spellings() {
        let err = parse_entries("10.0,1 10.00,2", ValueRule::NonNegative).unwrap_err();
        assert!(matches!(err, InputError::DuplicateEntry { value } if value == dec!(10)));
    }

    #[test]
    fn test_zero_price_allowed_but_zero_denomination_rejected() {
        assert!(parse_entries("0.00,1", ValueRule::NonNegative).is_ok());
        assert!(matches!(
            parse_entries("0.00,1", ValueRule::Positive),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_negative_values_rejected_under_both_rules() {
        assert!(matches!(
            parse_entries("-1.00,1", ValueRule::NonNegative),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_entries("-1.00,1", ValueRule::Positive),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::Empty.to_string(),
            "Expected at least one value,quantity pair"
        );
        assert_eq!(
            InputError::OutOfRange {
                value: dec!(-1.00),
                expected: "positive",
            }
            .to_string(),
            "Value -1.00 must be positive"
        );
        assert_eq!(
            InputError::DuplicateEntry { value: dec!(10) }.to_string(),
            "Duplicate entry for value 10"
        );
    }

    #[test]
    fn test_prompt_retries_until_a_line_parses() {
        let mut reader = Cursor::new(b"garbage\n10.0,1 0.5,3\n".to_vec());
        let mut written = Vec::new();

        let entries = prompt_entries(
            &mut reader,
            &mut written,
            "Enter the items purchased:",
            ValueRule::NonNegative,
        )
        .unwrap();

        assert_eq!(entries.get(&dec!(10.0)), Some(&1));
        let transcript = String::from_utf8(written).unwrap();
        assert!(transcript.starts_with("Enter the items purchased:"));
        assert!(transcript.contains("try again"));
    }

    #[test]
    fn test_prompt_fails_cleanly_at_end_of_input() {
        let mut reader = Cursor::new(b"not-a-pair\n".to_vec());
        let mut written = Vec::new();

        let err = prompt_entries(
            &mut reader,
            &mut written,
            "Enter the payment:",
            ValueRule::Positive,
        )
        .unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
