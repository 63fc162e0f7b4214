//! Time-slot row identity.
//!
//! A grid row is identified by a stable string key derived from whatever
//! time encoding a record carries — ideally a zero-padded
//! `"HH:MM-HH:MM"` range, otherwise free text. The associated start
//! minute drives row ordering; unparseable slots carry a large sentinel
//! and sort last.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel start minute for slots with no parseable `H:MM` time.
///
/// Large enough that such rows sort after any real time of day.
pub const UNPARSED_MINUTE: u32 = 99_999;

/// The identity of one grid row: a stable key, a display label, and the
/// start minute used for ordering.
///
/// Two records expressed with different field shapes but equal times
/// (`start`/`end` pair vs an embedded `"9:00-10:30"` range) produce the
/// same key, so they land in the same row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlotKey {
    /// Stable row key (`"HH:MM-HH:MM"` or verbatim free text).
    pub key: String,
    /// Human-readable row label.
    pub label: String,
    /// Minutes since midnight, or [`UNPARSED_MINUTE`].
    pub start_minute: u32,
}

impl TimeSlotKey {
    /// Creates a slot key.
    pub fn new(key: impl Into<String>, label: impl Into<String>, start_minute: u32) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            start_minute,
        }
    }

    /// A slot from verbatim free text; sorts last.
    pub fn free_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            key: text.clone(),
            label: text,
            start_minute: UNPARSED_MINUTE,
        }
    }

    /// The fallback slot for records with no time-bearing fields at all.
    pub fn unknown() -> Self {
        Self::free_text("Unknown")
    }

    /// Whether a real start time was extracted.
    #[inline]
    pub fn is_parsed(&self) -> bool {
        self.start_minute != UNPARSED_MINUTE
    }
}

/// Row order: start minute ascending, then label, then key.
impl Ord for TimeSlotKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_minute
            .cmp(&other.start_minute)
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for TimeSlotKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
