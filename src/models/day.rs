//! Canonical day codes.
//!
//! Optimizer output spells days inconsistently (`"Monday"`, `"mon"`,
//! `"Tues"`, slot-id prefixes like `"tue_3"`). Everything collapses to one
//! of seven canonical codes, or `Unknown` when no day can be determined.
//! `Unknown` is a bucket, not an error: a record without a recognizable
//! day still gets rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical weekday, or `Unknown` when a record's day cannot be
/// determined.
///
/// The derived `Ord` is calendar week order with `Unknown` sorting last,
/// which is exactly the column order the grid wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
    Unknown,
}

impl DayCode {
    /// The seven weekdays in calendar order (without `Unknown`).
    pub const WEEK: [DayCode; 7] = [
        DayCode::Mon,
        DayCode::Tue,
        DayCode::Wed,
        DayCode::Thu,
        DayCode::Fri,
        DayCode::Sat,
        DayCode::Sun,
    ];

    /// Normalizes a raw day token to a canonical code.
    ///
    /// Case-insensitive, whitespace-trimmed. Accepts full names, 3-letter
    /// abbreviations, and the irregular short forms (`tues`, `thur`,
    /// `thurs`). Anything unrecognized (including the empty string) maps
    /// to [`DayCode::Unknown`].
    ///
    /// Idempotent: normalizing the display form of any code, `Unknown`
    /// included, returns that code.
    pub fn normalize(raw: &str) -> DayCode {
        let token = raw.trim().to_ascii_lowercase();
        if token.is_empty() {
            return DayCode::Unknown;
        }
        if let Some(day) = Self::from_alias(&token) {
            return day;
        }
        // Unrecognized long form: retry on the 3-letter prefix, so
        // "monday mornings" or misspelled tails still resolve.
        let prefix: String = token.chars().take(3).collect();
        Self::from_alias(&prefix).unwrap_or(DayCode::Unknown)
    }

    fn from_alias(token: &str) -> Option<DayCode> {
        let day = match token {
            "mon" | "monday" => DayCode::Mon,
            "tue" | "tues" | "tuesday" => DayCode::Tue,
            "wed" | "wednesday" => DayCode::Wed,
            "thu" | "thur" | "thurs" | "thursday" => DayCode::Thu,
            "fri" | "friday" => DayCode::Fri,
            "sat" | "saturday" => DayCode::Sat,
            "sun" | "sunday" => DayCode::Sun,
            "unknown" => DayCode::Unknown,
            _ => return None,
        };
        Some(day)
    }

    /// The canonical display form (3-letter code, or `"Unknown"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Mon => "Mon",
            DayCode::Tue => "Tue",
            DayCode::Wed => "Wed",
            DayCode::Thu => "Thu",
            DayCode::Fri => "Fri",
            DayCode::Sat => "Sat",
            DayCode::Sun => "Sun",
            DayCode::Unknown => "Unknown",
        }
    }

    /// Whether this is a real weekday (not `Unknown`).
    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, DayCode::Unknown)
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_names_and_abbreviations() {
        assert_eq!(DayCode::normalize("Monday"), DayCode::Mon);
        assert_eq!(DayCode::normalize("mon"), DayCode::Mon);
        assert_eq!(DayCode::normalize("TUES"), DayCode::Tue);
        assert_eq!(DayCode::normalize("Thur"), DayCode::Thu);
        assert_eq!(DayCode::normalize("thurs"), DayCode::Thu);
        assert_eq!(DayCode::normalize("  friday  "), DayCode::Fri);
        assert_eq!(DayCode::normalize("SATURDAY"), DayCode::Sat);
    }

    #[test]
    fn test_normalize_prefix_fallback() {
        assert_eq!(DayCode::normalize("wednes"), DayCode::Wed);
        assert_eq!(DayCode::normalize("sundays"), DayCode::Sun);
    }

    #[test]
    fn test_normalize_unrecognized() {
        assert_eq!(DayCode::normalize(""), DayCode::Unknown);
        assert_eq!(DayCode::normalize("   "), DayCode::Unknown);
        assert_eq!(DayCode::normalize("Funday"), DayCode::Unknown);
        assert_eq!(DayCode::normalize("42"), DayCode::Unknown);
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["Monday", "tue", "WED", "Thursday", "nonsense", "", "Unknown"] {
            let once = DayCode::normalize(raw);
            let twice = DayCode::normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_week_order() {
        assert!(DayCode::Mon < DayCode::Tue);
        assert!(DayCode::Sat < DayCode::Sun);
        assert!(DayCode::Sun < DayCode::Unknown);
        let mut days = vec![DayCode::Fri, DayCode::Unknown, DayCode::Mon];
        days.sort();
        assert_eq!(days, vec![DayCode::Mon, DayCode::Fri, DayCode::Unknown]);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&DayCode::Wed).unwrap();
        assert_eq!(json, "\"Wed\"");
        let back: DayCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DayCode::Wed);
    }
}
