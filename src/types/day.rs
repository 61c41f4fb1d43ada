//! Day and hour label canonicalization
//!
//! Day-of-week labels arrive as free text from the host table and are
//! canonicalized onto a fixed ordinal axis: 0=Mon .. 6=Sun, 7=bank holiday.
//! Labels that match nothing map to a sentinel that sorts after every real
//! row rather than failing the build.

use chrono::Weekday;

use crate::types::{HourmapError, Result};

/// Row index of the bank-holiday pseudo-day.
pub const HOLIDAY_INDEX: u8 = 7;

/// Sentinel for labels the synonym table does not recognize.
pub const UNKNOWN_DAY_INDEX: u8 = 10;

/// Canonical index for a free-text day label.
///
/// Case-insensitive; accepts full names, three- and two-letter
/// abbreviations, and ordinal strings.
///
/// # Examples
/// ```
/// use hourmap::types::day_index;
///
/// assert_eq!(day_index("Monday"), 0);
/// assert_eq!(day_index("SAT"), 5);
/// assert_eq!(day_index("bank holiday"), 7);
/// assert_eq!(day_index("someday"), 10);
/// ```
pub fn day_index(label: &str) -> u8 {
    match label.trim().to_lowercase().as_str() {
        "monday" | "mon" | "mo" | "0" => 0,
        "tuesday" | "tue" | "tu" | "1" => 1,
        "wednesday" | "wed" | "we" | "2" => 2,
        "thursday" | "thu" | "th" | "3" => 3,
        "friday" | "fri" | "fr" | "4" => 4,
        "saturday" | "sat" | "sa" | "5" => 5,
        "sunday" | "sun" | "su" | "6" => 6,
        "bank holiday" | "holiday" | "hol" | "bh" | "7" => HOLIDAY_INDEX,
        _ => UNKNOWN_DAY_INDEX,
    }
}

/// Canonical index for a typed weekday (Monday-first, 0..=6).
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_monday() as u8
}

/// Parse an hour-of-day label as a plain decimal integer.
///
/// Non-numeric labels fail the cell build; numeric labels outside 0..=23
/// are kept and will position off the 24-column grid.
pub fn parse_hour(label: &str, row: usize) -> Result<u32> {
    label
        .trim()
        .parse::<u32>()
        .map_err(|_| HourmapError::InvalidHourLabel {
            label: label.to_string(),
            row,
        })
}
