//! Keyword tables driving ride date detection.
//!
//! All markers are lowercase and matched as substrings of the lowercased post
//! text.

use chrono::Weekday;

/// Markers that anchor a ride to the post's own reference date.
pub const TODAY_MARKERS: [&str; 2] = ["today", "tonight"];

/// Weekday abbreviations and the day each one names.
///
/// These also match inside full names ("friday") and inside unrelated words
/// ("month").
pub const WEEKDAY_ABBREVIATIONS: [(&str, Weekday); 7] = [
    ("sun", Weekday::Sun),
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
];

/// Number of days, starting at the reference date, searched for explicit dates.
pub const EXPLICIT_DATE_WINDOW_DAYS: u64 = 14;

/// US-English renderings searched for explicit dates.
///
/// Long month ("May 24", "September 3"), short month ("Sep 3") and numeric
/// month/day ("5/24"), with no zero padding.
pub const EXPLICIT_DATE_FORMATS: [&str; 3] = ["%B %-d", "%b %-d", "%-m/%-d"];

/// Returns the first marker contained in `text`, if any.
pub fn find_marker<'a>(text: &str, markers: &[&'a str]) -> Option<&'a str> {
    markers.iter().copied().find(|marker| text.contains(marker))
}
