//! # Currency Settings
//!
//! Loads the currency configuration consumed by the change calculator.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Settings Resolution                                 │
//! │                                                                         │
//! │  1. Environment variables  TILL__CURRENCY=MXN        (highest)          │
//! │  2. TOML settings file     till.toml                                    │
//! │  3. Nothing                fields stay empty         (lowest)           │
//! │                                                                         │
//! │  A missing file or section is NOT a load error. The calculator          │
//! │  reports MissingConfiguration when a request actually needs the         │
//! │  absent setting.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Settings File Format
//! ```toml
//! # till.toml
//! currency = "USD"
//!
//! [denominations]
//! USD = ["0.01", "0.05", "0.10", "0.25", "1.00", "5.00", "10.00", "20.00"]
//! MXN = ["0.50", "1.00", "2.00", "5.00", "10.00", "20.00"]
//! ```
//!
//! Denomination values are written as strings so they parse as exact
//! decimals rather than binary floats.

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use till_core::CurrencyConfig;

// =============================================================================
// Settings
// =============================================================================

/// Currency settings for the till.
///
/// Mirrors [`CurrencyConfig`] but belongs to the loading layer: both
/// fields default to empty so that absent settings survive the load and
/// fail later as typed calculation errors, not here as I/O errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Active currency code.
    #[serde(default)]
    pub currency: Option<String>,

    /// Currency code → denomination face values.
    #[serde(default)]
    pub denominations: HashMap<String, Vec<Decimal>>,
}

impl Settings {
    /// Loads settings from the TOML file (optional) layered under
    /// `TILL__*` environment variables (which win).
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("TILL").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(settings.normalized())
    }

    /// Uppercases every currency code.
    ///
    /// The config loader lowercases file table keys, so without this a
    /// `[denominations]` entry written as `USD` would only be found by
    /// looking up `usd`.
    fn normalized(self) -> Self {
        Settings {
            currency: self.currency.map(|code| code.to_uppercase()),
            denominations: self
                .denominations
                .into_iter()
                .map(|(code, faces)| (code.to_uppercase(), faces))
                .collect(),
        }
    }

    /// Converts into the configuration type the calculator consumes.
    pub fn into_currency_config(self) -> CurrencyConfig {
        CurrencyConfig {
            currency: self.currency,
            denominations: self.denominations,
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

    #[test]
    fn test_missing_file_loads_empty_settings() {
        let settings = Settings::load(Path::new("/definitely/not/here/till.toml")).unwrap();
        assert!(settings.currency.is_none());
        assert!(settings.denominations.is_empty());
    }

    #[test]
    fn test_settings_file_round_trip() {
        let path = std::env::temp_dir().join(format!("till-settings-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
currency = "usd"

[denominations]
usd = ["0.25", "1.00"]
"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.currency.as_deref(), Some("USD"));
        assert_eq!(
            settings.denominations.get("USD"),
            Some(&vec![dec!(0.25), dec!(1.00)])
        );
    }

    #[test]
    fn test_normalized_uppercases_codes() {
        let settings = Settings {
            currency: Some("usd".to_string()),
            denominations: [("mxn".to_string(), vec![dec!(0.5)])].into(),
        }
        .normalized();

        assert_eq!(settings.currency.as_deref(), Some("USD"));
        assert!(settings.denominations.contains_key("MXN"));
    }

    #[test]
    fn test_into_currency_config_preserves_fields() {
        let settings = Settings {
            currency: Some("USD".to_string()),
            denominations: [("USD".to_string(), vec![dec!(0.25), dec!(1)])].into(),
        };

        let config = settings.into_currency_config();
        assert_eq!(config.currency.as_deref(), Some("USD"));
        assert_eq!(
            config.denominations.get("USD"),
            Some(&vec![dec!(0.25), dec!(1)])
        );
    }

    #[test]
    fn test_empty_settings_surface_as_missing_configuration() {
        use std::collections::BTreeMap;
        use till_core::{ChangeCalculator, ChangeError, ChangeRequest, MissingSetting};

        // Absent settings load fine and fail at calculation time, typed
        let calculator = ChangeCalculator::new(Settings::default().into_currency_config());
        let request = ChangeRequest {
            purchase_lines: BTreeMap::from([(dec!(1.00), 1)]),
            payment_lines: BTreeMap::from([(dec!(5.00), 1)]),
        };

        let err = calculator.calculate(&request).unwrap_err();
        assert!(matches!(
            err,
            ChangeError::MissingConfiguration(MissingSetting::Currency)
        ));
    }
}
