//! Label normalization: canonical days and time-slot keys.
//!
//! Optimizer records encode day and time in several shapes, sometimes more
//! than one at once:
//!
//! - paired fields: `start: "9:00", end: "10:30"`
//! - a composite time field: `time: "9:00–10:30"`
//! - a day-prefixed label: `timeslot_label: "Mon, 09:00-10:00"`
//! - an id-encoded slot: `timeslot_id: "mon_2"`
//!
//! Extraction is an explicit, ordered table of named strategies evaluated
//! until one succeeds, so the priority order is auditable and each rule is
//! testable on its own. Equivalent times expressed through different
//! shapes produce the *same* zero-padded `"HH:MM-HH:MM"` key, which is
//! what keeps them in the same grid row.
//!
//! Nothing here fails: a record with no recognizable day or time degrades
//! to the `Unknown` bucket.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{DayCode, ScheduleRecord, TimeSlotKey, UNPARSED_MINUTE};

/// Synonyms for the range start, in priority order.
const START_FIELDS: &[&str] = &["start", "start_time", "begin", "from"];
/// Synonyms for the range end, in priority order.
const END_FIELDS: &[&str] = &["end", "end_time", "finish", "to"];
/// Composite single-field time encodings.
const COMPOSITE_FIELDS: &[&str] = &["time", "timeslot", "slot", "period"];
/// Day-prefixed slot labels.
const LABEL_FIELDS: &[&str] = &["timeslot_label", "label"];
/// Id-encoded slots of the form `"<day>_<ordinal>"`.
const SLOT_ID_FIELDS: &[&str] = &["timeslot_id", "slot_id"];
/// Direct day fields.
const DAY_FIELDS: &[&str] = &["day", "weekday", "dow"];

/// An exact `H:MM` time, nothing else.
static EXACT_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());
/// Any embedded `H:MM` occurrence.
static ANY_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})").unwrap());
/// An embedded `H:MM-H:MM` range, hyphen or en-dash.
static TIME_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}:\d{2})\s*[-–]\s*(\d{1,2}:\d{2})").unwrap());
/// A leading day word followed by time text, e.g. `"Mon 09:00-10:00"`.
static DAY_PREFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(mon|tue|wed|thu|fri|sat|sun)[a-z]*\s+(\S.*)$").unwrap());

/// Canonicalizes a raw day token. See [`DayCode::normalize`].
pub fn normalize_day(raw: &str) -> DayCode {
    DayCode::normalize(raw)
}

type TimeStrategy = fn(&ScheduleRecord) -> Option<TimeSlotKey>;

/// Time-extraction strategies in strict priority order.
const TIME_STRATEGIES: &[(&str, TimeStrategy)] = &[
    ("paired start/end fields", paired_fields),
    ("embedded time range", embedded_range),
    ("day-prefixed label", labeled_slot),
    ("verbatim time text", verbatim_text),
];

/// Extracts the time-slot row identity from a record.
///
/// Strategies are tried in priority order; the first that yields a result
/// wins. Records with no time-bearing fields at all fall back to the
/// `"Unknown"` slot. Never fails.
pub fn parse_time_range(record: &ScheduleRecord) -> TimeSlotKey {
    for (name, strategy) in TIME_STRATEGIES {
        if let Some(slot) = strategy(record) {
            trace!("time slot via {name}: {}", slot.key);
            return slot;
        }
    }
    TimeSlotKey::unknown()
}

/// Extracts the canonical day from a record.
///
/// Sources are tried in order — direct day fields, the day side of a
/// composite label, the `"<day>_<ordinal>"` slot-id prefix — and the
/// first *recognized* day wins, so an unparseable `day` field does not
/// shadow a perfectly good slot id. Never fails; returns
/// [`DayCode::Unknown`] when nothing matches.
pub fn extract_day(record: &ScheduleRecord) -> DayCode {
    for field in DAY_FIELDS {
        if let Some(text) = record.text(field) {
            let day = DayCode::normalize(&text);
            if day.is_known() {
                return day;
            }
        }
    }

    if let Some(text) = record.first_text(LABEL_FIELDS) {
        if let Some((left, _)) = text.split_once(',') {
            let left = left.trim();
            // Labels sometimes carry the raw slot id: "mon_2, 09:00".
            let token = left.split_once('_').map(|(p, _)| p).unwrap_or(left);
            let day = DayCode::normalize(token);
            if day.is_known() {
                return day;
            }
        } else if let Some(caps) = DAY_PREFIXED.captures(&text) {
            let day = DayCode::normalize(&caps[1]);
            if day.is_known() {
                return day;
            }
        }
    }

    for field in SLOT_ID_FIELDS {
        if let Some(id) = record.text(field) {
            if let Some((prefix, _)) = id.split_once('_') {
                let day = DayCode::normalize(prefix);
                if day.is_known() {
                    return day;
                }
            }
        }
    }

    DayCode::Unknown
}

/// Strategy 1: explicit `start`/`end` field pair, both exact `H:MM`.
fn paired_fields(record: &ScheduleRecord) -> Option<TimeSlotKey> {
    let start = record.first_text(START_FIELDS)?;
    let end = record.first_text(END_FIELDS)?;
    let start_minute = exact_minute(&start)?;
    exact_minute(&end)?;
    let key = format!("{}-{}", pad_time(&start), pad_time(&end));
    Some(TimeSlotKey::new(key.clone(), key, start_minute))
}

/// Strategy 2: a composite field with an embedded `H:MM-H:MM` range.
fn embedded_range(record: &ScheduleRecord) -> Option<TimeSlotKey> {
    let text = record.first_text(COMPOSITE_FIELDS)?;
    let caps = TIME_RANGE.captures(&text)?;
    let start = pad_time(&caps[1]);
    let end = pad_time(&caps[2]);
    let start_minute = exact_minute(&start).unwrap_or(UNPARSED_MINUTE);
    let key = format!("{start}-{end}");
    Some(TimeSlotKey::new(key.clone(), key, start_minute))
}

/// Strategy 3: a day-prefixed slot label, `"Mon, 09:00-10:00"` or
/// `"Monday 09:00-10:00"`. The time side is used verbatim; the start
/// minute comes from any embedded `H:MM`.
fn labeled_slot(record: &ScheduleRecord) -> Option<TimeSlotKey> {
    let text = record.first_text(LABEL_FIELDS)?;

    let time = if let Some((_, right)) = text.split_once(',') {
        right.trim().to_string()
    } else {
        let caps = DAY_PREFIXED.captures(&text)?;
        caps[2].trim().to_string()
    };
    if time.is_empty() {
        return None;
    }

    let start_minute = first_minute_in(&time).unwrap_or(UNPARSED_MINUTE);
    Some(TimeSlotKey::new(time.clone(), time, start_minute))
}

/// Strategy 4: any remaining time-like field, verbatim, sorting last.
fn verbatim_text(record: &ScheduleRecord) -> Option<TimeSlotKey> {
    record
        .first_text(COMPOSITE_FIELDS)
        .or_else(|| record.first_text(LABEL_FIELDS))
        .or_else(|| record.first_text(SLOT_ID_FIELDS))
        .map(TimeSlotKey::free_text)
}

/// Minutes since midnight for an exact `H:MM` string.
fn exact_minute(text: &str) -> Option<u32> {
    let caps = EXACT_TIME.captures(text.trim())?;
    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Minutes since midnight for the first `H:MM` embedded anywhere in text.
fn first_minute_in(text: &str) -> Option<u32> {
    let caps = ANY_TIME.captures(text)?;
    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Zero-pads a single-digit hour: `"9:05"` → `"09:05"`.
fn pad_time(text: &str) -> String {
    let text = text.trim();
    if text.len() == 4 {
        format!("0{text}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> ScheduleRecord {
        ScheduleRecord::from_value(value).unwrap()
    }

    #[test]
    fn test_paired_fields() {
        let slot = parse_time_range(&record(json!({"start": "9:00", "end": "10:30"})));
        assert_eq!(slot.key, "09:00-10:30");
        assert_eq!(slot.label, "09:00-10:30");
        assert_eq!(slot.start_minute, 540);
    }

    #[test]
    fn test_paired_field_synonyms() {
        let slot = parse_time_range(&record(json!({"start_time": "14:00", "to": "15:30"})));
        assert_eq!(slot.key, "14:00-15:30");
        assert_eq!(slot.start_minute, 840);
    }

    #[test]
    fn test_encoding_equivalence() {
        let paired = parse_time_range(&record(json!({"start": "09:00", "end": "10:30"})));
        let composite = parse_time_range(&record(json!({"time": "09:00-10:30"})));
        let dashed = parse_time_range(&record(json!({"timeslot": "9:00 – 10:30"})));
        assert_eq!(paired.key, "09:00-10:30");
        assert_eq!(composite.key, paired.key);
        assert_eq!(dashed.key, paired.key);
        assert_eq!(composite.start_minute, 540);
    }

    #[test]
    fn test_paired_takes_priority_over_composite() {
        let slot = parse_time_range(&record(json!({
            "start": "8:00", "end": "9:00", "time": "13:00-14:00",
        })));
        assert_eq!(slot.key, "08:00-09:00");
    }

    #[test]
    fn test_malformed_pair_degrades() {
        // End is not H:MM, so the pair strategy passes and the composite
        // field wins instead.
        let slot = parse_time_range(&record(json!({
            "start": "9:00", "end": "later", "time": "9:00-10:00",
        })));
        assert_eq!(slot.key, "09:00-10:00");
    }

    #[test]
    fn test_labeled_slot_comma_form() {
        let slot = parse_time_range(&record(json!({"timeslot_label": "Mon, 09:00-10:00"})));
        assert_eq!(slot.key, "09:00-10:00");
        assert_eq!(slot.start_minute, 540);
    }

    #[test]
    fn test_labeled_slot_day_word_form() {
        let slot = parse_time_range(&record(json!({"timeslot_label": "Thursday 11:15-12:45"})));
        assert_eq!(slot.key, "11:15-12:45");
        assert_eq!(slot.start_minute, 11 * 60 + 15);
    }

    #[test]
    fn test_labeled_slot_without_time_pattern() {
        let slot = parse_time_range(&record(json!({"timeslot_label": "Fri, after lunch"})));
        assert_eq!(slot.key, "after lunch");
        assert_eq!(slot.start_minute, UNPARSED_MINUTE);
    }

    #[test]
    fn test_verbatim_fallback() {
        let slot = parse_time_range(&record(json!({"period": "third block"})));
        assert_eq!(slot.key, "third block");
        assert_eq!(slot.label, "third block");
        assert_eq!(slot.start_minute, UNPARSED_MINUTE);
    }

    #[test]
    fn test_slot_id_as_last_resort_text() {
        let slot = parse_time_range(&record(json!({"timeslot_id": "mon_2"})));
        assert_eq!(slot.key, "mon_2");
        assert_eq!(slot.start_minute, UNPARSED_MINUTE);
    }

    #[test]
    fn test_unknown_fallback() {
        let slot = parse_time_range(&record(json!({"course": "Math"})));
        assert_eq!(slot.key, "Unknown");
        assert_eq!(slot.start_minute, UNPARSED_MINUTE);
        assert_eq!(parse_time_range(&ScheduleRecord::new()).key, "Unknown");
    }

    #[test]
    fn test_extract_day_direct_fields() {
        assert_eq!(extract_day(&record(json!({"day": "Monday"}))), DayCode::Mon);
        assert_eq!(extract_day(&record(json!({"weekday": "tue"}))), DayCode::Tue);
        assert_eq!(extract_day(&record(json!({"dow": "WED"}))), DayCode::Wed);
    }

    #[test]
    fn test_extract_day_from_label() {
        let day = extract_day(&record(json!({"timeslot_label": "Thu, 09:00-10:00"})));
        assert_eq!(day, DayCode::Thu);
        let day = extract_day(&record(json!({"timeslot_label": "Friday 09:00"})));
        assert_eq!(day, DayCode::Fri);
        // Label carrying a raw slot id on the day side.
        let day = extract_day(&record(json!({"timeslot_label": "sat_1, 08:00-09:00"})));
        assert_eq!(day, DayCode::Sat);
    }

    #[test]
    fn test_extract_day_from_slot_id() {
        assert_eq!(
            extract_day(&record(json!({"timeslot_id": "mon_3"}))),
            DayCode::Mon,
        );
        // No underscore means no day prefix to split off.
        assert_eq!(
            extract_day(&record(json!({"timeslot_id": "slot9"}))),
            DayCode::Unknown,
        );
    }

    #[test]
    fn test_unrecognized_day_field_does_not_shadow_slot_id() {
        let day = extract_day(&record(json!({"day": "Funday", "timeslot_id": "tue_1"})));
        assert_eq!(day, DayCode::Tue);
    }

    #[test]
    fn test_extract_day_nothing_present() {
        assert_eq!(extract_day(&ScheduleRecord::new()), DayCode::Unknown);
        assert_eq!(
            extract_day(&record(json!({"course": "Math", "room": "R1"}))),
            DayCode::Unknown,
        );
    }

    #[test]
    fn test_pad_time() {
        assert_eq!(pad_time("9:00"), "09:00");
        assert_eq!(pad_time("14:30"), "14:30");
    }

    #[test]
    fn test_exact_minute() {
        assert_eq!(exact_minute("0:00"), Some(0));
        assert_eq!(exact_minute("23:59"), Some(23 * 60 + 59));
        assert_eq!(exact_minute("9"), None);
        assert_eq!(exact_minute("9:00 am"), None);
    }
}
