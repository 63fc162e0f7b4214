//! Day × time grid projection.
//!
//! Buckets classified records into an ordered grid: rows are time slots
//! (start minute ascending, label tie-break), columns are canonical days
//! in week order. A cell holds *every* record that lands on it, in
//! insertion order — concurrent sessions (split groups, shared rooms) are
//! legitimate and must all survive.
//!
//! The grid is pure derived state: it borrows the records it was built
//! from and is rebuilt from scratch whenever the inputs change.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{DayCode, ScheduleRecord, TimeSlotKey};
use crate::normalize::{extract_day, parse_time_range};

/// Which day columns a grid exposes.
///
/// The week range is configuration, not a hard-coded constant: different
/// deployments want a fixed teaching week or only the days that actually
/// occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCoverage {
    /// Only the weekdays present in the data, in week order.
    #[default]
    DaysPresent,
    /// Fixed Mon–Sat columns, present or not.
    MonToSat,
    /// Fixed Mon–Sun columns, present or not.
    FullWeek,
}

/// Grid-building configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Day-column coverage.
    pub coverage: DayCoverage,
    /// Whether an `Unknown` column is appended when records without a
    /// recognizable day are present. On by default, so no record is
    /// invisible.
    pub show_unknown: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    /// The standard configuration: days present, `Unknown` shown.
    pub fn new() -> Self {
        Self {
            coverage: DayCoverage::DaysPresent,
            show_unknown: true,
        }
    }

    /// Sets the day coverage.
    pub fn with_coverage(mut self, coverage: DayCoverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Hides the `Unknown` column.
    pub fn hide_unknown(mut self) -> Self {
        self.show_unknown = false;
        self
    }
}

/// An ordered day × time grid of record buckets.
///
/// Borrows the records it was built from; holds no ownership beyond the
/// current computation.
#[derive(Debug, Clone, Default)]
pub struct Grid<'a> {
    rows: Vec<TimeSlotKey>,
    days: Vec<DayCode>,
    cells: HashMap<String, BTreeMap<DayCode, Vec<&'a ScheduleRecord>>>,
    session_count: usize,
}

impl<'a> Grid<'a> {
    /// Ordered row descriptors (start minute ascending, label tie-break).
    pub fn rows(&self) -> &[TimeSlotKey] {
        &self.rows
    }

    /// Ordered day columns.
    pub fn days(&self) -> &[DayCode] {
        &self.days
    }

    /// The records in one cell, in insertion order. Empty when the cell
    /// is absent.
    pub fn cell(&self, row_key: &str, day: DayCode) -> &[&'a ScheduleRecord] {
        self.cells
            .get(row_key)
            .and_then(|row| row.get(&day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of bucketed records.
    ///
    /// Equals the size of the input: every record lands in exactly one
    /// cell, including those keyed `Unknown`.
    pub fn session_count(&self) -> usize {
        self.session_count
    }

    /// Whether the grid holds no records.
    pub fn is_empty(&self) -> bool {
        self.session_count == 0
    }
}

/// Buckets records into a day × time grid.
///
/// Each record is normalized to a `(day, time slot)` pair and appended to
/// that cell; multiple records on the same cell stack in insertion order.
/// Row order is `(start_minute asc, label asc)`; day columns follow the
/// configured coverage, with `Unknown` appended last when present and
/// enabled.
pub fn build_grid<'a, I>(records: I, config: &GridConfig) -> Grid<'a>
where
    I: IntoIterator<Item = &'a ScheduleRecord>,
{
    let mut slots: HashMap<String, TimeSlotKey> = HashMap::new();
    let mut cells: HashMap<String, BTreeMap<DayCode, Vec<&'a ScheduleRecord>>> = HashMap::new();
    let mut days_present: BTreeSet<DayCode> = BTreeSet::new();
    let mut session_count = 0;

    for record in records {
        let slot = parse_time_range(record);
        let day = extract_day(record);

        days_present.insert(day);
        slots.entry(slot.key.clone()).or_insert_with(|| slot.clone());
        cells
            .entry(slot.key)
            .or_default()
            .entry(day)
            .or_default()
            .push(record);
        session_count += 1;
    }

    let mut rows: Vec<TimeSlotKey> = slots.into_values().collect();
    rows.sort();

    let mut days: Vec<DayCode> = match config.coverage {
        DayCoverage::DaysPresent => DayCode::WEEK
            .iter()
            .copied()
            .filter(|d| days_present.contains(d))
            .collect(),
        DayCoverage::MonToSat => DayCode::WEEK[..6].to_vec(),
        DayCoverage::FullWeek => DayCode::WEEK.to_vec(),
    };
    if config.show_unknown && days_present.contains(&DayCode::Unknown) {
        days.push(DayCode::Unknown);
    }

    debug!(
        "grid built: {} rows, {} days, {} sessions",
        rows.len(),
        days.len(),
        session_count,
    );

    Grid {
        rows,
        days,
        cells,
        session_count,
    }
}
