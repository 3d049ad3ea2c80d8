//! Ride date inference from free-text posts.
//!
//! Three keyword detectors run against the lowercased post text, anchored at
//! the post's reference date:
//!
//! 1. **Today** - `today` / `tonight` name the reference date itself.
//! 2. **Explicit dates** - `May 24`, `Sep 3` or `5/24` for any of the
//!    [`EXPLICIT_DATE_WINDOW_DAYS`] days starting at the reference date.
//! 3. **Weekdays** - `sun` .. `sat` name the next such day on or after the
//!    reference date. Only consulted when no explicit date matched.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use ridesearch_core::dates::infer_ride_dates_on;
//!
//! let wednesday = NaiveDate::from_ymd_opt(2019, 5, 22).unwrap();
//! let dates = infer_ride_dates_on("looking for UCLA -> UCI Thursday", wednesday);
//! assert_eq!(dates, vec![NaiveDate::from_ymd_opt(2019, 5, 23).unwrap()]);
//! ```

mod keywords;

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Weekday};

pub use keywords::{
    find_marker, EXPLICIT_DATE_FORMATS, EXPLICIT_DATE_WINDOW_DAYS, TODAY_MARKERS,
    WEEKDAY_ABBREVIATIONS,
};

/// Infers the ride dates of a post from its text and reference time.
///
/// The reference date is the calendar date of `reference` in its own time
/// zone. Returns dates ascending, without duplicates.
pub fn infer_ride_dates<Tz: TimeZone>(text: &str, reference: &DateTime<Tz>) -> Vec<NaiveDate> {
    infer_ride_dates_on(text, reference.date_naive())
}

/// Infers the ride dates of a post relative to a reference calendar date.
pub fn infer_ride_dates_on(text: &str, reference: NaiveDate) -> Vec<NaiveDate> {
    let text = text.to_lowercase();
    let mut dates = BTreeSet::new();

    dates.extend(detect_today(&text, reference));

    let explicit = detect_explicit_dates(&text, reference);
    if explicit.is_empty() {
        dates.extend(detect_weekdays(&text, reference));
    } else {
        dates.extend(explicit);
    }

    dates.into_iter().collect()
}

/// Builds the table of rendered explicit dates and their day offsets.
///
/// Keys are lowercase. Long and short renderings coincide for some months
/// ("may 24"), so a day may have fewer than three keys.
pub fn explicit_date_table(reference: NaiveDate) -> BTreeMap<String, u64> {
    let mut table = BTreeMap::new();
    for offset in 0..EXPLICIT_DATE_WINDOW_DAYS {
        let date = reference + Days::new(offset);
        for format in EXPLICIT_DATE_FORMATS {
            table.insert(date.format(format).to_string().to_lowercase(), offset);
        }
    }
    table
}

/// Returns the next `target` on or after `reference`.
pub fn next_weekday(reference: NaiveDate, target: Weekday) -> NaiveDate {
    let from = reference.weekday().num_days_from_sunday();
    let to = target.num_days_from_sunday();
    reference + Days::new(u64::from((to + 7 - from) % 7))
}

fn detect_today(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let marker = find_marker(text, &TODAY_MARKERS)?;
    tracing::trace!(marker, date = %reference, "today marker matched");
    Some(reference)
}

fn detect_explicit_dates(text: &str, reference: NaiveDate) -> BTreeSet<NaiveDate> {
    explicit_date_table(reference)
        .into_iter()
        .filter(|(rendered, _)| text.contains(rendered.as_str()))
        .map(|(rendered, offset)| {
            let date = reference + Days::new(offset);
            tracing::trace!(%rendered, date = %date, "explicit date matched");
            date
        })
        .collect()
}

fn detect_weekdays(text: &str, reference: NaiveDate) -> BTreeSet<NaiveDate> {
    WEEKDAY_ABBREVIATIONS
        .iter()
        .filter(|(abbreviation, _)| text.contains(abbreviation))
        .map(|&(abbreviation, weekday)| {
            let date = next_weekday(reference, weekday);
            tracing::trace!(abbreviation, date = %date, "weekday matched");
            date
        })
        .collect()
}
