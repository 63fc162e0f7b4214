//! Viewpoint selection: filtering records for a group, teacher, or room.
//!
//! Group views read the pre-expanded per-group rows (one row per group a
//! session belongs to); teacher and room views read the flat schedule.
//! Matching is on string-coerced equality, so numeric and string-typed
//! keys compare equal.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::models::ScheduleRecord;

/// The viewpoint a timetable is filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Sessions of one student group (reads the by-group rows).
    #[default]
    Group,
    /// Sessions taught by one teacher.
    Teacher,
    /// Sessions held in one room.
    Room,
}

impl ViewMode {
    /// The record field this mode filters on.
    pub fn field(&self) -> &'static str {
        match self {
            ViewMode::Group => "group",
            ViewMode::Teacher => "teacher",
            ViewMode::Room => "room",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Selects the records relevant to one view and key.
///
/// Group mode filters `by_group`; teacher and room modes filter
/// `schedule`. Both sides of the comparison are string-coerced, so
/// `group: 7` matches the key `"7"`. An empty or whitespace-only key
/// yields an empty result. Borrows records; never clones or mutates.
pub fn classify<'a>(
    mode: ViewMode,
    key: &str,
    schedule: &'a [ScheduleRecord],
    by_group: &'a [ScheduleRecord],
) -> Vec<&'a ScheduleRecord> {
    let key = key.trim();
    if key.is_empty() {
        return Vec::new();
    }
    let pool = match mode {
        ViewMode::Group => by_group,
        ViewMode::Teacher | ViewMode::Room => schedule,
    };
    pool.iter()
        .filter(|r| r.text(mode.field()).as_deref() == Some(key))
        .collect()
}

/// Distinct, sorted selector values for a mode — the set of groups,
/// teachers, or rooms present in the data.
pub fn options(
    mode: ViewMode,
    schedule: &[ScheduleRecord],
    by_group: &[ScheduleRecord],
) -> Vec<String> {
    let pool = match mode {
        ViewMode::Group => by_group,
        ViewMode::Teacher | ViewMode::Room => schedule,
    };
    let distinct: BTreeSet<String> = pool.iter().filter_map(|r| r.text(mode.field())).collect();
    distinct.into_iter().collect()
}

/// A view selection, usable as a memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Viewpoint to filter by.
    pub mode: ViewMode,
    /// Selected group/teacher/room key.
    pub key: String,
}

impl ViewQuery {
    /// Creates a query.
    pub fn new(mode: ViewMode, key: impl Into<String>) -> Self {
        Self {
            mode,
            key: key.into(),
        }
    }

    /// Content fingerprint over the query and the input collections.
    ///
    /// Callers that cache `classify`/`build_grid` output should key the
    /// cache on this rather than on collection identity: it changes when
    /// the mode, the key, or either record sequence changes size, which
    /// covers every refresh the polling loop can produce.
    pub fn fingerprint(&self, schedule: &[ScheduleRecord], by_group: &[ScheduleRecord]) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        schedule.len().hash(&mut hasher);
        by_group.len().hash(&mut hasher);
        hasher.finish()
    }
}
