//! Run-once legislator synchronizer
//!
//! Intended to be invoked once per tick by an external scheduler (a daily
//! cron or Kubernetes CronJob). All configuration comes from the
//! environment; a missing value fails fast before any network or database
//! access.
//!
//! ## Usage
//!
//! ```bash
//! POSTGRES_DB=legislators POSTGRES_USER=sync POSTGRES_PASSWORD=... \
//! POSTGRES_HOST=localhost POSTGRES_PORT=5432 \
//! cargo run --bin daily_sync
//!
//! # Optional overrides
//! LEGISLATORS_FEED_URL=https://example.org/legislators-current.json
//! RECONCILE_MODE=full-replace   # default: diff-merge
//! ```

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use legisync::config::SyncConfig;
use legisync::feed::FeedClient;
use legisync::store::LegislatorStore;
use legisync::sync::SyncService;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = SyncConfig::from_env().context("failed to load configuration")?;
    info!(
        feed = %config.feed_url,
        database = %config.database.masked_url(),
        mode = ?config.mode,
        "starting legislator sync"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.connect_timeout)
        .connect(&config.database.connection_url())
        .await
        .context("failed to connect to database")?;

    let client = FeedClient::new(config.feed_url.clone())?;
    let store = LegislatorStore::new(pool);
    let service = SyncService::new(client, store, config.mode);

    let report = service.run_once().await.context("sync run failed")?;
    info!(
        started_at = %report.started_at,
        fetched = report.fetched,
        skipped = report.skipped,
        upserts = report.upserts,
        deletes = report.deletes,
        full_replace = report.full_replace,
        "sync finished"
    );

    Ok(())
}
