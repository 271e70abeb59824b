//! Interactive console for the skin clinic record keeper.
//!
//! ## Purpose
//! Loads the registry from the records file, runs the numbered menu loop on
//! standard input/output, and writes the registry back on exit.
//!
//! ## Environment Variables
//! - `CLINIC_RECORDS_FILE`: records file path (default: `skinClinicRecords.csv`)
//! - `RUST_LOG`: log filter for diagnostics (both clinic crates default to `info`)

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_core::{
    constants::RECORDS_FILE_ENV, resolve_records_path, AdminSession, CoreConfig, RecordStore,
    RowGrouping,
};

mod menu;
mod prompt;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Skin clinic records management console")]
struct Cli {
    /// Records file path (overrides the CLINIC_RECORDS_FILE environment variable)
    #[arg(long)]
    records_file: Option<PathBuf>,

    /// How reloaded rows group into patient records: "adjacent" or "merged"
    #[arg(long, default_value_t = RowGrouping::Adjacent)]
    grouping: RowGrouping,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?)
                .add_directive("clinic_cli=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let records_path = resolve_records_path(cli.records_file, std::env::var(RECORDS_FILE_ENV).ok());
    let config = CoreConfig::new(records_path, cli.grouping);
    let store = RecordStore::new(&config);

    tracing::info!("records file: {}", store.path().display());

    let mut clinic = store.load_or_empty();
    let mut session = AdminSession::new();

    menu::run(&mut clinic, &mut session, &store)
}
