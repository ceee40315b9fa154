//! `pokedex-seed <path>`: ingest a catalog seed file.
//!
//! Targets `DATABASE_URL` when set. Without it the records are ingested into
//! a throwaway in-memory store, which validates the file and reports what
//! would be inserted.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_api::config::ServerConfig;
use pokedex_api::seed::load_seed_file;
use pokedex_api::services::ingestion;
use pokedex_api::state::open_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_api=info,pokedex_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: pokedex-seed <path-to-seed.json>")?;

    let config = ServerConfig::from_env()?;
    let dry_run = config.database_url.is_none();

    let store = open_store(&config).await.context("Failed to open store")?;
    let records = load_seed_file(&path).await?;
    let report = ingestion::ingest(store.as_ref(), records)
        .await
        .map_err(|e| anyhow::anyhow!("Seeding failed: {e}"))?;

    tracing::info!(
        dry_run,
        inserted = report.inserted.len(),
        skipped = report.skipped.len(),
        "Seeding complete",
    );
    Ok(())
}
