//! Common helper functions for output formatting.

use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::zone::format_us_date;

/// Formats ride dates for display, `5/24/2019, 5/26/2019`.
pub fn format_ride_dates(dates: &[NaiveDate], use_colors: bool) -> String {
    if dates.is_empty() {
        let none = "(no date)";
        return if use_colors {
            none.dimmed().to_string()
        } else {
            none.to_string()
        };
    }

    let joined = dates
        .iter()
        .map(|d| format_us_date(*d))
        .collect::<Vec<_>>()
        .join(", ");

    if use_colors {
        joined.yellow().to_string()
    } else {
        joined
    }
}

/// Indents every line of `text` by `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
