use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use smeta_cli::session::Session;
use smeta_core::admission::{LineItemDraft, admit};
use smeta_core::models::{Ledger, PricingMode};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive estimate calculator for doors, windows and similar items.
///
/// Builds an in-memory estimate from typed commands, renders it as a table
/// and exports it to CSV or a spreadsheet workbook.
#[derive(Debug, Parser)]
struct Cli {
    /// Start with two demonstration rows instead of an empty estimate.
    #[arg(long)]
    demo: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep terminal output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── demonstration data ──────────────────────────────────────────────────────

/// Seeds the ledger with two sample rows: a fixed-price door and a
/// per-area-priced window.
fn seed_demo(ledger: &mut Ledger) -> anyhow::Result<()> {
    let drafts = [
        LineItemDraft {
            item_type: "Дверь".to_string(),
            width_cm: "90".to_string(),
            height_cm: "200".to_string(),
            quantity: "4".to_string(),
            unit_price: "600".to_string(),
            pricing_mode: PricingMode::Fixed,
        },
        LineItemDraft {
            item_type: "Окно".to_string(),
            width_cm: "180".to_string(),
            height_cm: "150".to_string(),
            quantity: "6".to_string(),
            unit_price: "300".to_string(),
            pricing_mode: PricingMode::PerArea,
        },
    ];

    for draft in drafts {
        admit(ledger, &draft)
            .map_err(|error| anyhow::anyhow!("demonstration row rejected: {error}"))?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut ledger = Ledger::new();
    if cli.demo {
        seed_demo(&mut ledger)?;
        debug!("seeded demonstration rows");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(stdin.lock(), stdout.lock()).run(&mut ledger)
}
