//! Mode-dependent cell text.
//!
//! What a cell shows depends on the viewpoint: a group already knows its
//! own name, so its cells lead with course/teacher/room; teacher and room
//! views swap in the group and append the session id to tell concurrent
//! sessions apart.

use crate::models::ScheduleRecord;
use crate::view::ViewMode;

/// Synonyms for the session's display label, in priority order.
const PRIMARY_FIELDS: &[&str] = &[
    "course", "subject", "module", "lesson", "name", "class", "unit",
];

/// The session's primary display label (`course`, `subject`, …), or
/// `"Lesson"` when none is present.
pub fn primary_label(record: &ScheduleRecord) -> String {
    record
        .first_text(PRIMARY_FIELDS)
        .unwrap_or_else(|| "Lesson".to_string())
}

/// The three display parts of one cell entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellParts {
    /// Leading label (course/subject).
    pub top: String,
    /// Middle badge: teacher in group view, group otherwise.
    pub mid: Option<String>,
    /// Trailing badge: room, or teacher in room view.
    pub right: Option<String>,
}

/// Splits a record into the parts a cell renders for the given view.
pub fn cell_parts(record: &ScheduleRecord, mode: ViewMode) -> CellParts {
    let top = primary_label(record);
    let (mid, right) = match mode {
        ViewMode::Group => (record.teacher(), record.room()),
        ViewMode::Teacher => (record.group(), record.room()),
        ViewMode::Room => (record.group(), record.teacher()),
    };
    CellParts { top, mid, right }
}

/// One-line cell text, parts joined by `" · "`.
///
/// Teacher and room views append the session id so concurrent sessions in
/// the same cell stay distinguishable.
pub fn cell_text(record: &ScheduleRecord, mode: ViewMode) -> String {
    let parts = cell_parts(record, mode);
    let mut pieces = vec![parts.top];
    pieces.extend(parts.mid);
    pieces.extend(parts.right);
    if mode != ViewMode::Group {
        pieces.extend(record.session_id());
    }
    pieces.join(" · ")
}
