//! Field normalizer
//!
//! Cleans one raw feed record into a canonical [`LegislatorRecord`], or
//! signals "skip" for records with no term history.

use std::sync::LazyLock;

use regex::Regex;

use super::LegislatorRecord;
use crate::error::RecordShapeError;
use crate::feed::types::{RawLegislator, RawTerm};

static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("static pattern compiles"));

/// Strip every character that is not an ASCII letter or whitespace.
pub fn strip_non_alpha(input: &str) -> String {
    NON_ALPHA.replace_all(input, "").into_owned()
}

/// Normalize one raw record.
///
/// Returns `Ok(None)` for records with an empty term list (filtered, not an
/// error) and `Err` when a required id or name field is missing.
pub fn normalize(raw: &RawLegislator) -> Result<Option<LegislatorRecord>, RecordShapeError> {
    let latest = match latest_term(&raw.terms) {
        Some(term) => term,
        None => return Ok(None),
    };

    let id = raw
        .id
        .bioguide
        .clone()
        .ok_or(RecordShapeError::MissingField {
            id: None,
            field: "id.bioguide",
        })?;
    let first = raw
        .name
        .first
        .as_deref()
        .ok_or_else(|| RecordShapeError::MissingField {
            id: Some(id.clone()),
            field: "name.first",
        })?;
    let last = raw
        .name
        .last
        .as_deref()
        .ok_or_else(|| RecordShapeError::MissingField {
            id: Some(id.clone()),
            field: "name.last",
        })?;

    let firstname = strip_non_alpha(first);
    let lastname = strip_non_alpha(last);
    let fullname = match raw.name.official_full.as_deref() {
        Some(full) => strip_non_alpha(full),
        None => format!("{} {}", firstname, lastname),
    };

    Ok(Some(LegislatorRecord {
        id,
        fullname,
        firstname,
        lastname,
        party: latest.party.clone(),
        state: latest.state.clone(),
        position: latest.kind.clone(),
        start_term: latest.start.clone(),
        end_term: latest.end.clone(),
    }))
}

/// Select the term with the lexicographically greatest `end` date.
///
/// A missing `end` compares as the empty string, which sorts *below* any
/// real date, so a current officeholder whose open term carries no end date
/// loses to any dated historical term. On equal `end` dates the first-listed
/// term wins (a stable descending sort taking the head). Both match the
/// upstream job this replaces; see DESIGN.md before changing the ordering.
fn latest_term(terms: &[RawTerm]) -> Option<&RawTerm> {
    // max_by_key keeps the last maximal element; reversed iteration makes
    // that the first-listed term in feed order.
    terms
        .iter()
        .rev()
        .max_by_key(|t| t.end.as_deref().unwrap_or(""))
}
