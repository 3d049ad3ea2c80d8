//! Post records and their ride-date annotations.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, Local, NaiveDate, ParseResult, TimeZone};
use serde::{Deserialize, Serialize};

use crate::dates::infer_ride_dates;

/// Timestamp format used by the Graph API (`2019-05-22T21:00:00+0000`).
pub const GRAPH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Base URL for post permalinks.
const FACEBOOK_BASE_URL: &str = "https://www.facebook.com";

/// Parses a Graph API timestamp.
///
/// Accepts the Graph form (`+0000` offset) as well as RFC 3339 (`Z` or `+00:00`).
pub fn parse_graph_time(s: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, GRAPH_TIME_FORMAT).or_else(|_| DateTime::parse_from_rfc3339(s))
}

/// A single post from a group feed.
///
/// Identity is the `id`: two posts with the same id are the same post, even
/// if one of them has since been edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Graph id, `GROUP_POST`.
    pub id: String,

    /// The post body.
    #[serde(rename = "message")]
    pub text: String,

    /// Last update time. Relative phrases like "today" are anchored here.
    #[serde(with = "graph_time")]
    pub updated_time: DateTime<FixedOffset>,
}

impl Post {
    /// Creates a new post.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        updated_time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            updated_time,
        }
    }

    /// Creates a new post, parsing `updated_time` with [`parse_graph_time`].
    pub fn parse(
        id: impl Into<String>,
        text: impl Into<String>,
        updated_time: &str,
    ) -> ParseResult<Self> {
        Ok(Self::new(id, text, parse_graph_time(updated_time)?))
    }

    /// Returns the public URL of the post, if the id has the `GROUP_POST` shape.
    pub fn permalink(&self) -> Option<String> {
        let mut parts = self.id.split('_');
        let group = parts.next().filter(|s| !s.is_empty())?;
        let post = parts.next().filter(|s| !s.is_empty())?;
        Some(format!("{FACEBOOK_BASE_URL}/{group}/posts/{post}"))
    }

    /// Case-insensitive substring test against the post body.
    pub fn includes(&self, keyword: &str) -> bool {
        self.text
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A post together with the ride dates inferred from it.
///
/// The fields are private: the only way to get ride dates for a different
/// text or reference time is to annotate again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedPost {
    #[serde(flatten)]
    post: Post,
    ride_dates: Vec<NaiveDate>,
}

impl AnnotatedPost {
    /// Annotates a post, reading its reference date in the host's local time zone.
    pub fn annotate(post: Post) -> Self {
        Self::annotate_in(post, &Local)
    }

    /// Annotates a post, reading its reference date in `tz`.
    pub fn annotate_in<Tz: TimeZone>(post: Post, tz: &Tz) -> Self {
        let reference = post.updated_time.with_timezone(tz);
        let ride_dates = infer_ride_dates(&post.text, &reference);
        Self { post, ride_dates }
    }

    /// Annotates every post, keeping feed order.
    pub fn annotate_all_in<Tz, I>(posts: I, tz: &Tz) -> Vec<Self>
    where
        Tz: TimeZone,
        I: IntoIterator<Item = Post>,
    {
        posts
            .into_iter()
            .map(|post| Self::annotate_in(post, tz))
            .collect()
    }

    /// The underlying post.
    pub fn post(&self) -> &Post {
        &self.post
    }

    /// Ride dates, ascending and without duplicates.
    pub fn ride_dates(&self) -> &[NaiveDate] {
        &self.ride_dates
    }

    pub fn id(&self) -> &str {
        &self.post.id
    }

    pub fn text(&self) -> &str {
        &self.post.text
    }

    /// Discards the annotation.
    pub fn into_post(self) -> Post {
        self.post
    }
}

mod graph_time {
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_graph_time, GRAPH_TIME_FORMAT};

    pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(GRAPH_TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_graph_time(&s).map_err(de::Error::custom)
    }
}
