//! Reconciler
//!
//! Compares the storage snapshot against the freshly fetched snapshot and
//! produces the mutations that make storage hold exactly the incoming state.
//! Pure; the store adapter applies the result transactionally.

use std::str::FromStr;

use super::snapshot::Snapshot;
use super::LegislatorRecord;
use crate::error::ConfigError;

/// One atomic storage change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Drop every row (full-replace mode only).
    DeleteAll,
    /// Bulk insert (full-replace mode only).
    InsertAll(Vec<LegislatorRecord>),
    /// Insert or update one row by id.
    Upsert(LegislatorRecord),
    /// Delete one row by id.
    Delete(String),
}

/// Policy for translating snapshot differences into mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileMode {
    /// Delete everything, then rewrite every incoming row. Simple, but
    /// briefly empties the table and rewrites unchanged rows.
    FullReplace,
    /// Per-row upserts for changed or new rows, per-row deletes for rows
    /// gone from the source. Zero mutations when nothing changed.
    #[default]
    DiffMerge,
}

impl FromStr for ReconcileMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-replace" => Ok(Self::FullReplace),
            "diff-merge" => Ok(Self::DiffMerge),
            other => Err(ConfigError::Invalid {
                name: "RECONCILE_MODE".to_string(),
                reason: format!("unknown mode '{}', expected 'full-replace' or 'diff-merge'", other),
            }),
        }
    }
}

/// Compute the mutations that take storage from `existing` to `incoming`.
///
/// Deletes are ordered before upserts. Idempotent: reconciling a snapshot
/// against itself in diff-merge mode yields no mutations.
pub fn reconcile(existing: &Snapshot, incoming: &Snapshot, mode: ReconcileMode) -> Vec<Mutation> {
    match mode {
        ReconcileMode::FullReplace => vec![
            Mutation::DeleteAll,
            Mutation::InsertAll(incoming.values().cloned().collect()),
        ],
        ReconcileMode::DiffMerge => {
            let mut mutations = Vec::new();
            for id in existing.keys() {
                if !incoming.contains_key(id) {
                    mutations.push(Mutation::Delete(id.clone()));
                }
            }
            for (id, rec) in incoming {
                if existing.get(id) != Some(rec) {
                    mutations.push(Mutation::Upsert(rec.clone()));
                }
            }
            mutations
        }
    }
}

/// Apply mutations to an in-memory snapshot.
///
/// Mirrors what the store adapter does inside its transaction; kept here so
/// the reconcile-then-apply round trip can be checked without a database.
pub fn apply_in_memory(state: &mut Snapshot, mutations: &[Mutation]) {
    for mutation in mutations {
        match mutation {
            Mutation::DeleteAll => state.clear(),
            Mutation::InsertAll(recs) => {
                for rec in recs {
                    state.insert(rec.id.clone(), rec.clone());
                }
            }
            Mutation::Upsert(rec) => {
                state.insert(rec.id.clone(), rec.clone());
            }
            Mutation::Delete(id) => {
                state.shift_remove(id);
            }
        }
    }
}
