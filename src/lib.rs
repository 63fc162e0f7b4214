//! Timetable grid projection for optimizer results.
//!
//! An external timetable optimizer returns scheduled sessions as flat,
//! loosely-typed records with heterogeneous day/time encodings. This
//! crate normalizes those records and projects them into a canonical
//! day × time grid, filterable by group, teacher, or room — everything a
//! rendering layer needs without re-deriving day/time semantics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ScheduleRecord`, `DayCode`,
//!   `TimeSlotKey`
//! - **`normalize`**: Day canonicalization and time-slot extraction
//!   (an ordered strategy table over the known field-shape variants)
//! - **`view`**: Viewpoint filtering (`classify`), selector `options`,
//!   memoization fingerprints
//! - **`grid`**: The day × time grid builder and its read-only contract
//! - **`display`**: Mode-dependent cell text
//! - **`job`**: The optimizer job-result JSON boundary
//!
//! # Data Flow
//!
//! Raw records → normalize (per record) → classify (filter) → grid
//! (bucket + sort) → rendering (out of scope). Every stage is a pure,
//! synchronous function over immutable inputs; outputs borrow the
//! caller's records and are rebuilt whenever inputs change. Malformed
//! day/time data degrades to an explicit `Unknown` bucket, never to an
//! error.

pub mod display;
pub mod error;
pub mod grid;
pub mod job;
pub mod models;
pub mod normalize;
pub mod view;

pub use error::{Error, Result};
pub use grid::{build_grid, DayCoverage, Grid, GridConfig};
pub use job::{HistoryRow, JobResult, JobStatus, Penalty};
pub use models::{DayCode, ScheduleRecord, TimeSlotKey, UNPARSED_MINUTE};
pub use normalize::{extract_day, normalize_day, parse_time_range};
pub use view::{classify, options, ViewMode, ViewQuery};
