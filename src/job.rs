//! Optimizer job-result boundary.
//!
//! The external optimizer service runs a search and exposes its outcome
//! as a JSON payload: penalty breakdowns, a progress history, the flat
//! schedule, and a per-group expansion of it. This module types that
//! payload just enough for the grid pipeline and its callers; unknown
//! sections are ignored, missing sections default to empty.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;
use crate::grid::{build_grid, Grid, GridConfig};
use crate::models::ScheduleRecord;
use crate::view::{classify, ViewMode};

/// Lifecycle state of an optimizer job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepted, not yet started.
    Queued,
    /// Search in progress.
    Running,
    /// Finished; a result is available.
    Done,
    /// Failed; no result.
    Error,
}

impl JobStatus {
    /// Whether the job will make no further progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Error)
    }
}

/// A penalty breakdown reported by the optimizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    /// Combined penalty.
    pub total: i64,
    /// Hard-constraint share.
    pub hard: i64,
    /// Soft-constraint share.
    pub soft: i64,
    /// Per-constraint contributions.
    #[serde(default)]
    pub details: HashMap<String, i64>,
}

/// One progress sample: `[generation, total, hard, soft]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow(pub u64, pub i64, pub i64, pub i64);

impl HistoryRow {
    /// Generation index.
    pub fn generation(&self) -> u64 {
        self.0
    }

    /// Total penalty at this generation.
    pub fn total(&self) -> i64 {
        self.1
    }
}

/// The result body of a finished optimizer job.
///
/// Every section defaults when absent, so partial payloads (e.g. a job
/// polled mid-flight) still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobResult {
    /// Best penalty found by the search.
    #[serde(default)]
    pub penalty: Penalty,
    /// Independent re-evaluation of the best individual.
    #[serde(default)]
    pub verify_penalty: Option<Penalty>,
    /// Progress history, one row per logged generation.
    #[serde(default)]
    pub history: Vec<HistoryRow>,
    /// Flat schedule: one record per scheduled session.
    #[serde(default)]
    pub schedule: Vec<ScheduleRecord>,
    /// Group-expanded schedule: one record per (session, group) pair.
    #[serde(default)]
    pub by_group: Vec<ScheduleRecord>,
}

impl JobResult {
    /// Parses a job-result JSON body.
    pub fn from_json_str(body: &str) -> Result<Self> {
        let result: JobResult = serde_json::from_str(body)?;
        debug!(
            "job result parsed: {} schedule rows, {} by-group rows, penalty {}",
            result.schedule.len(),
            result.by_group.len(),
            result.penalty.total,
        );
        Ok(result)
    }

    /// Converts an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Classifies and projects in one step.
    ///
    /// Returns the filtered record list alongside the grid built from it,
    /// which is everything a rendering layer needs for one view.
    pub fn project<'a>(
        &'a self,
        mode: ViewMode,
        key: &str,
        config: &GridConfig,
    ) -> (Vec<&'a ScheduleRecord>, Grid<'a>) {
        let records = classify(mode, key, &self.schedule, &self.by_group);
        let grid = build_grid(records.iter().copied(), config);
        (records, grid)
    }
}
