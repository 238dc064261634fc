//! Serde types for the congress-legislators feed
//!
//! Deliberately lenient: every subfield is optional with `#[serde(default)]`
//! so one malformed record surfaces as a shape error downstream instead of
//! failing the whole body decode.

use serde::Deserialize;

/// One raw legislator entry as published by the feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLegislator {
    #[serde(default)]
    pub id: RawIds,
    #[serde(default)]
    pub name: RawName,
    #[serde(default)]
    pub terms: Vec<RawTerm>,
}

/// External identifiers. Only the bioguide id is used as the stable key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIds {
    #[serde(default)]
    pub bioguide: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub official_full: Option<String>,
}

/// One term of office. `end` is absent or empty for open terms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTerm {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}
