//! End-to-end tests over the pure sync core: raw feed records in, applied
//! snapshot state out. Database-free; the store's transactional behavior is
//! mirrored by `apply_in_memory`.

use legisync::feed::types::{RawIds, RawLegislator, RawName, RawTerm};
use legisync::sync::{
    apply_in_memory, build_snapshot, reconcile, snapshot_from_rows, LegislatorRecord, Mutation,
    ReconcileMode,
};

fn raw_term(party: &str, start: &str, end: Option<&str>) -> RawTerm {
    RawTerm {
        kind: Some("sen".to_string()),
        state: Some("MO".to_string()),
        party: Some(party.to_string()),
        start: Some(start.to_string()),
        end: end.map(str::to_string),
    }
}

fn raw_legislator(bioguide: &str, first: &str, last: &str, terms: Vec<RawTerm>) -> RawLegislator {
    RawLegislator {
        id: RawIds {
            bioguide: Some(bioguide.to_string()),
        },
        name: RawName {
            first: Some(first.to_string()),
            last: Some(last.to_string()),
            official_full: None,
        },
        terms,
    }
}

fn record(id: &str, party: &str) -> LegislatorRecord {
    LegislatorRecord {
        id: id.to_string(),
        fullname: "Pat Quinn".to_string(),
        firstname: "Pat".to_string(),
        lastname: "Quinn".to_string(),
        party: Some(party.to_string()),
        state: Some("MO".to_string()),
        position: Some("sen".to_string()),
        start_term: Some("2019-01-03".to_string()),
        end_term: Some("2025-01-03".to_string()),
    }
}

#[test]
fn feed_to_snapshot_to_storage_state() {
    let feed = vec![
        raw_legislator(
            "Q000023",
            "Pat",
            "Quinn",
            vec![
                raw_term("D", "2013-01-03", Some("2019-01-03")),
                raw_term("D", "2019-01-03", Some("2025-01-03")),
            ],
        ),
        // No term history: filtered out of the snapshot.
        raw_legislator("R000099", "Robin", "Reyes", vec![]),
    ];

    let build = build_snapshot(&feed);
    assert_eq!(build.skipped, 1);
    let incoming = build.snapshot;
    assert_eq!(incoming.len(), 1);
    let rec = &incoming["Q000023"];
    assert_eq!(rec.start_term.as_deref(), Some("2019-01-03"));
    assert_eq!(rec.end_term.as_deref(), Some("2025-01-03"));

    // First run against an empty table inserts everything.
    let empty = snapshot_from_rows([]);
    let mutations = reconcile(&empty, &incoming, ReconcileMode::DiffMerge);
    assert_eq!(mutations.len(), 1);

    let mut state = empty;
    apply_in_memory(&mut state, &mutations);
    assert_eq!(state, incoming);

    // Second run with an unchanged feed is a no-op.
    assert!(reconcile(&state, &incoming, ReconcileMode::DiffMerge).is_empty());
}

#[test]
fn party_change_and_new_member_scenario() {
    let existing = snapshot_from_rows([record("A123", "D")]);
    let incoming = snapshot_from_rows([record("A123", "R"), record("B456", "D")]);

    let mutations = reconcile(&existing, &incoming, ReconcileMode::DiffMerge);
    assert_eq!(
        mutations,
        vec![
            Mutation::Upsert(record("A123", "R")),
            Mutation::Upsert(record("B456", "D")),
        ]
    );

    let mut state = existing;
    apply_in_memory(&mut state, &mutations);
    assert_eq!(state, incoming);
}

#[test]
fn departed_member_is_deleted() {
    let existing = snapshot_from_rows([record("A123", "D"), record("B456", "R")]);
    let incoming = snapshot_from_rows([record("A123", "D")]);

    let mutations = reconcile(&existing, &incoming, ReconcileMode::DiffMerge);
    assert_eq!(mutations, vec![Mutation::Delete("B456".to_string())]);

    let mut state = existing;
    apply_in_memory(&mut state, &mutations);
    assert_eq!(state, incoming);
}

#[test]
fn full_replace_rewrites_regardless_of_diff() {
    let existing = snapshot_from_rows([record("A123", "D")]);
    let incoming = existing.clone();

    // Unchanged data still yields the two bulk mutations.
    let mutations = reconcile(&existing, &incoming, ReconcileMode::FullReplace);
    assert_eq!(mutations.len(), 2);

    let mut state = existing;
    apply_in_memory(&mut state, &mutations);
    assert_eq!(state, incoming);
}

#[test]
fn modes_agree_on_final_state() {
    let existing = snapshot_from_rows([record("A123", "D"), record("C789", "I")]);
    let incoming = snapshot_from_rows([record("A123", "R"), record("B456", "D")]);

    let mut via_diff = existing.clone();
    apply_in_memory(
        &mut via_diff,
        &reconcile(&existing, &incoming, ReconcileMode::DiffMerge),
    );

    let mut via_replace = existing.clone();
    apply_in_memory(
        &mut via_replace,
        &reconcile(&existing, &incoming, ReconcileMode::FullReplace),
    );

    assert_eq!(via_diff, incoming);
    assert_eq!(via_replace, incoming);
}
