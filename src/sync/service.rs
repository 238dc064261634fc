//! Sync service
//!
//! Orchestrates one run: load existing state, fetch the feed, reconcile,
//! apply. A run either completes or fails atomically at the storage layer.

use chrono::{DateTime, Utc};
use tracing::info;

use super::reconcile::{reconcile, Mutation, ReconcileMode};
use super::snapshot::build_snapshot;
use crate::error::SyncError;
use crate::feed::FeedClient;
use crate::store::LegislatorStore;

/// Counters summarising one completed run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    /// Raw records received from the feed.
    pub fetched: usize,
    /// Records filtered (no terms) or skipped (shape errors).
    pub skipped: usize,
    pub upserts: usize,
    pub deletes: usize,
    pub full_replace: bool,
}

pub struct SyncService {
    client: FeedClient,
    store: LegislatorStore,
    mode: ReconcileMode,
}

impl SyncService {
    pub fn new(client: FeedClient, store: LegislatorStore, mode: ReconcileMode) -> Self {
        Self {
            client,
            store,
            mode,
        }
    }

    /// Run one full synchronization pass.
    ///
    /// The fetch happens before any storage write, so a feed failure leaves
    /// the table untouched; storage writes happen inside one transaction.
    pub async fn run_once(&self) -> Result<SyncReport, SyncError> {
        let started_at = Utc::now();

        self.store.ensure_schema().await?;
        let existing = self.store.load_existing().await?;
        info!(rows = existing.len(), "loaded existing legislators");

        let raw = self.client.fetch().await?;
        let fetched = raw.len();
        let build = build_snapshot(&raw);
        let incoming = build.snapshot;
        let skipped = build.skipped;
        info!(fetched, skipped, "built incoming snapshot");

        let mutations = reconcile(&existing, &incoming, self.mode);

        let mut upserts = 0;
        let mut deletes = 0;
        let mut full_replace = false;
        for mutation in &mutations {
            match mutation {
                Mutation::DeleteAll => {
                    full_replace = true;
                    deletes += existing.len();
                }
                Mutation::InsertAll(recs) => upserts += recs.len(),
                Mutation::Upsert(_) => upserts += 1,
                Mutation::Delete(_) => deletes += 1,
            }
        }

        if mutations.is_empty() {
            info!("storage already matches the feed, nothing to apply");
        } else {
            self.store.apply_mutations(&mutations).await?;
        }

        info!(upserts, deletes, full_replace, "sync run complete");
        Ok(SyncReport {
            started_at,
            fetched,
            skipped,
            upserts,
            deletes,
            full_replace,
        })
    }
}
