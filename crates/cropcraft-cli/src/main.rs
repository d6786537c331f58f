//! Command line front-end for the Cropcraft market engine.
//!
//! Loads a catalog, a game state snapshot, and optionally a configuration
//! file, then evaluates the catalog or performs a craft or restock against an
//! in-memory sink. Everything the engine would have sent to the game-state
//! service is printed as JSON on stdout; logs go to stderr.
//!
//! ```text
//! cropcraft --catalog catalog.yaml --state state.json evaluate --bulk
//! cropcraft --catalog catalog.yaml --state state.json craft --item "Sunflower Statue" --quantity 10
//! cropcraft --catalog catalog.yaml --state state.json restock
//! ```

mod error;
mod report;

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cropcraft_market::{
    Catalog, CropcraftConfig, Eligibility, Picker, RecordingSink, TransactionEmitter,
};
use cropcraft_types::{DisplayMode, GameSnapshot};

use crate::error::CliError;
use crate::report::{EmissionReport, ItemReport};

/// Evaluate and emit market crafts from the command line.
#[derive(Debug, Parser)]
#[command(name = "cropcraft", version, about)]
struct Cli {
    /// YAML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// YAML catalog file.
    #[arg(long)]
    catalog: PathBuf,

    /// JSON game state snapshot file.
    #[arg(long)]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report eligibility for every catalog item.
    Evaluate {
        /// Evaluate every configured bulk quantity instead of one unit.
        #[arg(long)]
        bulk: bool,
    },
    /// Craft an item.
    Craft {
        /// Item to select. Defaults to the first catalog entry.
        #[arg(long)]
        item: Option<String>,
        /// Units to craft.
        #[arg(long, default_value = "1")]
        quantity: NonZeroU32,
    },
    /// Request a stock resync.
    Restock,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any input fails to load or the report cannot be
/// written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let catalog = Catalog::from_file(&cli.catalog)?;
    let state = load_state(&cli.state)?;
    info!(
        items = catalog.len(),
        balance = %state.balance,
        read_only = state.read_only,
        "Inputs loaded"
    );

    let emitter = TransactionEmitter::new(&config.market);

    match cli.command {
        Command::Evaluate { bulk } => {
            let mode = if bulk {
                DisplayMode::Bulk
            } else {
                DisplayMode::Single
            };
            let reports = evaluate_all(&catalog, mode, &config, &emitter, &state)?;
            print_json(&reports)?;
        }
        Command::Craft { item, quantity } => {
            let mut picker = Picker::new(catalog, DisplayMode::Single)?;
            if let Some(name) = item {
                picker.selection_mut().select(&name)?;
            }
            let mut sink = RecordingSink::new();
            let outcome = emitter.craft(picker.selection(), quantity, &state, &mut sink);
            print_json(&EmissionReport::crafted(
                &outcome,
                sink,
                emitter.currency_label(),
            ))?;
        }
        Command::Restock => {
            let mut sink = RecordingSink::new();
            let signal = emitter.restock(&mut sink);
            print_json(&EmissionReport::restocked(signal, sink))?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CropcraftConfig, CliError> {
    match path {
        Some(path) => Ok(CropcraftConfig::from_file(path)?),
        None => {
            let mut config = CropcraftConfig::default();
            config.logging.apply_env_overrides();
            Ok(config)
        }
    }
}

fn load_state(path: &Path) -> Result<GameSnapshot, CliError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Evaluate every catalog item at every quantity `mode` offers.
fn evaluate_all(
    catalog: &Catalog,
    mode: DisplayMode,
    config: &CropcraftConfig,
    emitter: &TransactionEmitter,
    state: &GameSnapshot,
) -> Result<Vec<ItemReport>, CliError> {
    let mut picker = Picker::new(catalog.clone(), mode)?;
    let quantities = picker.offered_quantities(&config.market);
    let mut reports = Vec::with_capacity(catalog.len());

    for item in catalog.iter() {
        let current = picker.selection_mut().select(item.name.as_str())?;
        let evaluations: Vec<Eligibility> = quantities
            .iter()
            .map(|q| emitter.evaluate(current, q.get(), state))
            .collect();
        reports.extend(ItemReport::new(current, &evaluations));
    }

    Ok(reports)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use cropcraft_types::{Availability, CraftableItem};

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CraftableItem::new("Sunflower Statue", Decimal::new(10, 0))
                .with_ingredient("Wood", Decimal::new(2, 0)),
            CraftableItem::new("Gold Egg", Decimal::ONE).with_supply(0),
        ])
        .unwrap()
    }

    #[test]
    fn parses_craft_command() {
        let cli = Cli::try_parse_from([
            "cropcraft",
            "--catalog",
            "catalog.yaml",
            "--state",
            "state.json",
            "craft",
            "--item",
            "Gold Egg",
            "--quantity",
            "10",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Craft { ref item, quantity }
                if item.as_deref() == Some("Gold Egg") && quantity.get() == 10
        ));
    }

    #[test]
    fn rejects_zero_quantity() {
        let result = Cli::try_parse_from([
            "cropcraft",
            "--catalog",
            "c.yaml",
            "--state",
            "s.json",
            "craft",
            "--quantity",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn bulk_evaluation_covers_every_offer() {
        let config = CropcraftConfig::default();
        let emitter = TransactionEmitter::new(&config.market);
        let state = GameSnapshot::with_balance(Decimal::new(10, 0)).holding("Wood", Decimal::new(2, 0));

        let reports = evaluate_all(&catalog(), DisplayMode::Bulk, &config, &emitter, &state).unwrap();

        assert_eq!(reports.len(), 2);
        let statue = reports.first().unwrap();
        let crafts: Vec<(u32, bool)> = statue.offers.iter().map(|o| (o.quantity, o.can_craft)).collect();
        assert_eq!(crafts, vec![(1, true), (10, false)]);

        let egg = reports.get(1).unwrap();
        assert_eq!(egg.availability, Availability::SoldOutGlobally);
        assert!(!egg.can_restock);
    }

    #[test]
    fn craft_report_renders_notifications() {
        let emitter = TransactionEmitter::new(&CropcraftConfig::default().market);
        let picker = Picker::new(catalog(), DisplayMode::Single).unwrap();
        let state = GameSnapshot::with_balance(Decimal::new(10, 0)).holding("Wood", Decimal::new(2, 0));
        let mut sink = RecordingSink::new();

        let outcome = emitter.craft(picker.selection(), NonZeroU32::MIN, &state, &mut sink);
        let report = EmissionReport::crafted(&outcome, sink, emitter.currency_label());

        assert_eq!(report.notifications, vec!["SFL -$10", "Item Wood -2"]);
        assert!(report.reasons.is_empty());
        assert!(!report.close_picker);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["intents"][0],
            serde_json::json!({"type": "item.crafted", "item": "Sunflower Statue", "amount": 1})
        );
    }

    #[test]
    fn restock_report_carries_the_close_signal() {
        let emitter = TransactionEmitter::new(&CropcraftConfig::default().market);
        let mut sink = RecordingSink::new();

        let signal = emitter.restock(&mut sink);
        let report = EmissionReport::restocked(signal, sink);

        assert!(report.close_picker);
        assert!(report.notifications.is_empty());
        assert!(report.reasons.is_empty());
        assert_eq!(report.shortcut, None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["intents"], serde_json::json!([{"type": "SYNC"}]));
        assert_eq!(json["close_picker"], serde_json::json!(true));
    }
}
