//! Prints the dashboard summary for a file-backed store.
//!
//! `DATA_DIR` selects the data directory (default `./data`); the demo user
//! accounts are seeded on first run. `RUST_LOG` controls log verbosity.

use std::error::Error as StdError;
use std::sync::Arc;

use tracing::info;

use fleet_maintenance_store::services::{DashboardSummary, seed_demo_users};
use fleet_maintenance_store::storage::FileBackend;
use fleet_maintenance_store::store::FleetStore;

fn main() -> Result<(), Box<dyn StdError + Send + Sync + 'static>> {
    // RUST_LOG environment variable controls log level (default: info)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    info!(data_dir = %data_dir, "opening store");

    let backend = Arc::new(FileBackend::new(&data_dir)?);
    seed_demo_users(backend.as_ref())?;

    let store = FleetStore::open(backend)?;
    let summary = DashboardSummary::build(&store);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
