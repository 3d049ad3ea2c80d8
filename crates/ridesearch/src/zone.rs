//! Time zone used to read post timestamps as calendar dates.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};
use chrono_tz::Tz;
use ridesearch_core::{AnnotatedPost, Post};

use crate::commands::{CommandError, Result};

/// US-English short date, as `toLocaleDateString("en-US")` renders it.
pub const US_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// US-English date and time.
pub const US_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Where a post's "today" is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The host's local time zone.
    Local,
    /// A named IANA zone.
    Named(Tz),
}

impl Zone {
    /// Parses an IANA zone name.
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| CommandError::Config(format!("Unknown time zone '{}'", name)))
    }

    /// Picks the `--tz` flag, then the configured zone, then local time.
    pub fn resolve(flag: Option<&str>, configured: Option<&str>) -> Result<Self> {
        match flag.or(configured) {
            Some(name) => Self::parse(name),
            None => Ok(Zone::Local),
        }
    }

    /// Annotates posts with ride dates read in this zone.
    pub fn annotate(&self, posts: Vec<Post>) -> Vec<AnnotatedPost> {
        match self {
            Zone::Local => AnnotatedPost::annotate_all_in(posts, &Local),
            Zone::Named(tz) => AnnotatedPost::annotate_all_in(posts, tz),
        }
    }

    /// Calendar date of `time` in this zone.
    pub fn date_of(&self, time: &DateTime<FixedOffset>) -> NaiveDate {
        match self {
            Zone::Local => time.with_timezone(&Local).date_naive(),
            Zone::Named(tz) => time.with_timezone(tz).date_naive(),
        }
    }

    /// Formats `time` in this zone as `5/22/2019, 9:00:00 PM`.
    pub fn format_datetime(&self, time: &DateTime<FixedOffset>) -> String {
        match self {
            Zone::Local => format_in(time, &Local),
            Zone::Named(tz) => format_in(time, tz),
        }
    }

    /// Display name.
    pub fn name(&self) -> String {
        match self {
            Zone::Local => "local".to_string(),
            Zone::Named(tz) => tz.name().to_string(),
        }
    }
}

fn format_in<Tz2>(time: &DateTime<FixedOffset>, tz: &Tz2) -> String
where
    Tz2: TimeZone,
    Tz2::Offset: std::fmt::Display,
{
    time.with_timezone(tz).format(US_DATETIME_FORMAT).to_string()
}

/// Formats a date as `5/24/2019`.
pub fn format_us_date(date: NaiveDate) -> String {
    date.format(US_DATE_FORMAT).to_string()
}
