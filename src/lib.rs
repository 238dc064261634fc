//! Daily synchronization of a relational legislators table with the public
//! congress-legislators JSON feed.
//!
//! The crate splits into a pure core and thin collaborators around it:
//! - [`sync`] — field normalization, snapshot building, and reconciliation
//!   (the only nontrivial logic; side-effect free)
//! - [`feed`] — HTTP client and serde types for the upstream feed
//! - [`store`] — Postgres adapter that applies reconciliation mutations
//!   inside one transaction
//! - [`config`] — resolved runtime configuration, loaded from the
//!   environment before anything else runs

pub mod config;
pub mod error;
pub mod feed;
pub mod store;
pub mod sync;

pub use error::SyncError;
pub use sync::{
    build_snapshot, reconcile, LegislatorRecord, Mutation, ReconcileMode, Snapshot, SnapshotBuild,
    SyncReport, SyncService,
};
