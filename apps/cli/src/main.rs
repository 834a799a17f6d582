//! # Till Console Application
//!
//! Interactive change calculator for a cash drawer.
//!
//! ## Application Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          till (binary)                                  │
//! │                                                                         │
//! │  1. Initialize tracing            (RUST_LOG overrides the default)      │
//! │  2. Load currency settings        (till.toml + TILL__* environment)     │
//! │  3. Build the change calculator   (settings injected, read-only)        │
//! │  4. Prompt for purchase lines     (retry until the line parses)         │
//! │  5. Prompt for payment lines      (retry until the line parses)         │
//! │  6. Calculate and report          (structured event, or the typed       │
//! │                                    failure and a nonzero exit)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Example
//! ```text
//! $ till
//! Insert items prices and amounts in the format: 'price,amount price,amount ...'
//! 10.00,1 0.50,3
//! Insert money provided in the format: 'denomination,amount denomination,amount ...'
//! 20.00,1 10.00,2
//!  INFO till_cli: change calculated change_due=28.50 piece_count=11
//! ```

mod config;
mod input;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use till_core::{ChangeCalculator, ChangeRequest};

use crate::config::Settings;
use crate::input::ValueRule;

/// Prompt for the purchase side of the request.
const PURCHASE_PROMPT: &str =
    "Insert items prices and amounts in the format: 'price,amount price,amount ...'";

/// Prompt for the payment side of the request.
const PAYMENT_PROMPT: &str =
    "Insert money provided in the format: 'denomination,amount denomination,amount ...'";

/// Computes the change due for a purchase and the minimum number of
/// bills and coins to hand back.
#[derive(Debug, Parser)]
#[command(name = "till", version, about)]
struct Cli {
    /// Path to the currency settings file.
    #[arg(long, default_value = "till.toml")]
    config: PathBuf,

    /// Override the active currency code from the settings.
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();

    if let Err(problem) = run() {
        error!("{problem:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// One interactive session: load settings, collect a request, calculate,
/// report.
fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.config)
        .with_context(|| format!("failed to load settings from {}", cli.config.display()))?;
    if let Some(code) = cli.currency {
        settings.currency = Some(code.to_uppercase());
    }
    info!(
        currency = settings.currency.as_deref().unwrap_or("<unset>"),
        tables = settings.denominations.len(),
        "settings loaded"
    );

    let calculator = ChangeCalculator::new(settings.into_currency_config());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    debug!("collecting purchase lines");
    let purchase_lines = input::prompt_entries(
        &mut reader,
        &mut writer,
        PURCHASE_PROMPT,
        ValueRule::NonNegative,
    )?;

    debug!("collecting payment lines");
    let payment_lines = input::prompt_entries(
        &mut reader,
        &mut writer,
        PAYMENT_PROMPT,
        ValueRule::Positive,
    )?;

    let request = ChangeRequest {
        purchase_lines,
        payment_lines,
    };

    let result = calculator.calculate(&request)?;
    info!(
        change_due = %result.change_due,
        piece_count = result.piece_count,
        "change calculated"
    );

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=till_core=trace` - Trace for the core crate only
/// - Default: INFO level, DEBUG for the till crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,till_cli=debug,till_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
