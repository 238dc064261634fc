//! Sync core: normalization, snapshot building, reconciliation
//!
//! Everything here is a pure function over immutable snapshots; the
//! collaborators in [`crate::feed`] and [`crate::store`] sit at the edges.

pub mod normalize;
pub mod reconcile;
pub mod service;
pub mod snapshot;

pub use normalize::{normalize, strip_non_alpha};
pub use reconcile::{apply_in_memory, reconcile, Mutation, ReconcileMode};
pub use service::{SyncReport, SyncService};
pub use snapshot::{build_snapshot, snapshot_from_rows, Snapshot, SnapshotBuild};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Canonical legislator row, keyed by the stable bioguide id.
///
/// Constructed fresh from source data on every run, never mutated in place.
/// Row equality is field-wise equality over all attributes (derived
/// `PartialEq`), which is what the reconciler diffs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LegislatorRecord {
    pub id: String,
    pub fullname: String,
    pub firstname: String,
    pub lastname: String,
    pub party: Option<String>,
    pub state: Option<String>,
    pub position: Option<String>,
    pub start_term: Option<String>,
    pub end_term: Option<String>,
}
