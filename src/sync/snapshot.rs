//! Snapshot builder
//!
//! A snapshot is a complete id-to-record mapping representing state at one
//! point in time, either the source feed or storage. `IndexMap` keeps feed
//! order so serialized snapshots are deterministic.

use indexmap::IndexMap;
use tracing::warn;

use super::normalize::normalize;
use super::LegislatorRecord;
use crate::feed::types::RawLegislator;

pub type Snapshot = IndexMap<String, LegislatorRecord>;

/// Result of building a snapshot from raw feed records.
#[derive(Debug)]
pub struct SnapshotBuild {
    pub snapshot: Snapshot,
    /// Records filtered (no terms) or skipped (shape errors). Records
    /// collapsed by a repeated id are not counted here.
    pub skipped: usize,
}

/// Build the incoming snapshot from the full list of raw feed records.
///
/// Records with no term history are filtered; records missing required
/// fields are skipped with a warning and the build continues. On a repeated
/// id the last-seen record wins.
pub fn build_snapshot(raw: &[RawLegislator]) -> SnapshotBuild {
    let mut snapshot = Snapshot::with_capacity(raw.len());
    let mut skipped = 0;
    for record in raw {
        match normalize(record) {
            Ok(Some(rec)) => {
                snapshot.insert(rec.id.clone(), rec);
            }
            Ok(None) => skipped += 1,
            Err(err) => {
                warn!(error = %err, "skipping malformed feed record");
                skipped += 1;
            }
        }
    }
    SnapshotBuild { snapshot, skipped }
}

/// Build a snapshot from already-canonical rows, e.g. loaded from storage.
pub fn snapshot_from_rows(rows: impl IntoIterator<Item = LegislatorRecord>) -> Snapshot {
    rows.into_iter().map(|rec| (rec.id.clone(), rec)).collect()
}
