//! Timetable domain models.
//!
//! The small, stable vocabulary the grid pipeline is built on:
//!
//! - [`ScheduleRecord`]: one optimizer-produced session, a loosely-typed
//!   JSON object behind coercing accessors
//! - [`DayCode`]: canonical weekday (or `Unknown`), in calendar order
//! - [`TimeSlotKey`]: the normalized row identity of the grid

mod day;
mod record;
mod timeslot;

pub use day::DayCode;
pub use record::ScheduleRecord;
pub use timeslot::{TimeSlotKey, UNPARSED_MINUTE};
