//! Upstream feed integration
//!
//! This module provides:
//! - Serde types for the congress-legislators JSON feed
//! - A client for fetching the full current-members data set

pub mod client;
pub mod types;

pub use client::FeedClient;
pub use types::{RawIds, RawLegislator, RawName, RawTerm};
