//! Loose schedule-record model.
//!
//! The optimizer's job-result rows are plain JSON objects with no fixed
//! schema: field names vary (`start` vs `start_time`), values mix strings
//! and numbers for the same logical key, and anything may be absent.
//! Rather than forcing a rigid struct and losing fields, a record wraps
//! the raw object and exposes coercing accessors; the normalizer walks
//! named fields in an explicit priority order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One scheduled session, as supplied by the external optimizer.
///
/// Immutable from the engine's point of view: the grid pipeline only ever
/// reads fields, and borrows records rather than cloning them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleRecord {
    fields: Map<String, Value>,
}

impl ScheduleRecord {
    /// Creates an empty record (every accessor returns `None`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::InvalidPayload(format!(
                "schedule record must be a JSON object, got {other}"
            ))),
        }
    }

    /// Sets a field, replacing any previous value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw field lookup.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A field coerced to trimmed text.
    ///
    /// Strings are trimmed; numbers and booleans render via `to_string`,
    /// so a numeric `group: 7` compares equal to the string key `"7"`.
    /// Null, arrays, objects, and empty-after-trim strings count as
    /// absent.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(s.to_string())
                }
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The first present field from an ordered list of synonyms.
    pub fn first_text(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.text(name))
    }

    /// The `group` field as text.
    pub fn group(&self) -> Option<String> {
        self.text("group")
    }

    /// The `teacher` field as text.
    pub fn teacher(&self) -> Option<String> {
        self.text("teacher")
    }

    /// The `room` field as text.
    pub fn room(&self) -> Option<String> {
        self.text("room")
    }

    /// The `session_id` field as text.
    pub fn session_id(&self) -> Option<String> {
        self.text("session_id")
    }
}

impl From<Map<String, Value>> for ScheduleRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
