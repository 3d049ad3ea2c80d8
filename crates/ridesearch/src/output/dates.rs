//! Formatting for the `dates` command.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use ridesearch_core::filter::Intent;
use serde::Serialize;

use crate::zone::format_us_date;

/// Ride dates inferred for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferredDates {
    /// Reference date the text was read against.
    pub reference: NaiveDate,
    /// Offer or request.
    pub intent: Intent,
    /// Inferred ride dates, ascending.
    pub ride_dates: Vec<NaiveDate>,
}

/// Formats inferred dates as JSON.
pub fn format_inferred_dates_json(inferred: &InferredDates) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(inferred)
}

/// Formats inferred dates for the terminal.
pub fn format_inferred_dates_table(inferred: &InferredDates, use_colors: bool) -> String {
    let mut output = String::new();

    let header = format!(
        "Reference {}  ({})",
        format_us_date(inferred.reference),
        inferred.intent
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&format!("{}\n", header));
    }

    if inferred.ride_dates.is_empty() {
        output.push_str("No ride dates found.\n");
        return output;
    }

    for date in &inferred.ride_dates {
        let line = format!("{}  {}", format_us_date(*date), date.format("%A"));
        if use_colors {
            output.push_str(&format!("{}\n", line.yellow()));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 5, day).unwrap()
    }

    #[test]
    fn test_format_inferred_dates_table() {
        let inferred = InferredDates {
            reference: may(22),
            intent: Intent::Offering,
            ride_dates: vec![may(24), may(26)],
        };
        assert_eq!(
            format_inferred_dates_table(&inferred, false),
            "Reference 5/22/2019  (driving)\n5/24/2019  Friday\n5/26/2019  Sunday\n"
        );
    }

    #[test]
    fn test_format_inferred_dates_table_empty() {
        let inferred = InferredDates {
            reference: may(22),
            intent: Intent::Seeking,
            ride_dates: Vec::new(),
        };
        assert_eq!(
            format_inferred_dates_table(&inferred, false),
            "Reference 5/22/2019  (looking)\nNo ride dates found.\n"
        );
    }

    #[test]
    fn test_format_inferred_dates_json() {
        let inferred = InferredDates {
            reference: may(22),
            intent: Intent::Seeking,
            ride_dates: vec![may(22)],
        };
        let value: serde_json::Value =
            serde_json::from_str(&format_inferred_dates_json(&inferred).unwrap()).unwrap();
        assert_eq!(value["reference"], "2019-05-22");
        assert_eq!(value["intent"], "looking");
        assert_eq!(value["ride_dates"][0], "2019-05-22");
    }
}
