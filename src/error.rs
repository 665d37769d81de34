//! Error types for the picker library.

/// Errors raised at the picker's validation boundaries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PickerError {
    /// A day number outside `1..=days_in_month` for the month being shown.
    #[error("day {day} is out of range for {year}-{month:02} (max {max_day})")]
    DayOutOfRange {
        day: u32,
        /// 1-based, as printed.
        month: u32,
        year: i32,
        max_day: u32,
    },

    /// A 0-based month index outside `0..=11`.
    #[error("invalid month index: {month} (must be 0..=11)")]
    InvalidMonth { month: u32 },

    /// A date string that could not be parsed as `YYYY-MM-DD` / `YYYY-MM`.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Weekday or month label overrides with the wrong number of entries.
    #[error("expected {expected} {kind} labels, got {got}")]
    LabelCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
}
