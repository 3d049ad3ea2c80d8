//! Search queries.

use chrono::NaiveDate;

use super::intent::Intent;

/// Format of the date picked in the search form (`2019-05-24`).
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// A search over annotated posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Only posts with this intent match.
    pub intent: Intent,

    /// When set, only posts with this ride date match.
    pub date: Option<NaiveDate>,

    /// Every keyword must appear in the post body (case-insensitive).
    pub keywords: Vec<String>,
}

impl Query {
    /// Creates a query on intent alone.
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            date: None,
            keywords: Vec::new(),
        }
    }

    /// Builds a query from raw form input.
    ///
    /// An empty or unparseable date is no date constraint. Keywords are split
    /// on whitespace.
    pub fn from_input(intent: Intent, raw_date: &str, raw_keywords: &str) -> Self {
        Self::new(intent)
            .with_date(parse_query_date(raw_date))
            .with_keywords(tokenize_keywords(raw_keywords))
    }

    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Parses a `YYYY-MM-DD` date, returning `None` when empty or invalid.
pub fn parse_query_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, QUERY_DATE_FORMAT).ok()
}

/// Splits a raw keyword string on whitespace.
pub fn tokenize_keywords(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
