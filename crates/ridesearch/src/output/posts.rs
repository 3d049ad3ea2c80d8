//! Search result formatting.

use owo_colors::OwoColorize;
use ridesearch_core::filter::{Intent, Query};
use ridesearch_core::AnnotatedPost;
use serde::Serialize;

use super::helpers::{format_ride_dates, indent};
use crate::zone::Zone;

/// JSON output structure for the search command.
#[derive(Serialize)]
pub struct SearchOutput<'a> {
    pub query: QueryOutput<'a>,
    pub timezone: String,
    pub posts: Vec<PostOutput<'a>>,
    pub total: usize,
}

/// JSON output for the query that produced the results.
#[derive(Serialize)]
pub struct QueryOutput<'a> {
    #[serde(rename = "type")]
    pub intent: Intent,
    pub date: Option<String>,
    pub keywords: &'a [String],
}

/// JSON output for a single matching post.
#[derive(Serialize)]
pub struct PostOutput<'a> {
    pub id: &'a str,
    pub message: &'a str,
    pub updated_time: String,
    pub ride_dates: Vec<String>,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

/// Totals shown under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    /// Posts matching the query.
    pub matched: usize,
    /// Posts shown after `--limit`.
    pub shown: usize,
}

impl<'a> PostOutput<'a> {
    fn from_post(post: &'a AnnotatedPost) -> Self {
        Self {
            id: post.id(),
            message: post.text(),
            updated_time: post.post().updated_time.to_rfc3339(),
            ride_dates: post
                .ride_dates()
                .iter()
                .map(|d| d.to_string())
                .collect(),
            intent: Intent::classify(post.text()),
            permalink: post.post().permalink(),
        }
    }
}

/// Formats search results as JSON.
pub fn format_posts_json(
    posts: &[&AnnotatedPost],
    query: &Query,
    zone: &Zone,
) -> Result<String, serde_json::Error> {
    let output = SearchOutput {
        query: QueryOutput {
            intent: query.intent,
            date: query.date.map(|d| d.to_string()),
            keywords: &query.keywords,
        },
        timezone: zone.name(),
        posts: posts.iter().map(|p| PostOutput::from_post(p)).collect(),
        total: posts.len(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats search results as a list of cards, newest first as the feed orders them.
pub fn format_posts_table(
    posts: &[&AnnotatedPost],
    zone: &Zone,
    summary: SearchSummary,
    use_colors: bool,
) -> String {
    if posts.is_empty() {
        return "No rides found.\n".to_string();
    }

    let mut output = String::new();

    for post in posts {
        let dates = format_ride_dates(post.ride_dates(), use_colors);
        let updated = format!(
            "Updated {}",
            zone.format_datetime(&post.post().updated_time)
        );

        if use_colors {
            output.push_str(&format!("{}  {}\n", dates, updated.dimmed()));
        } else {
            output.push_str(&format!("{}  {}\n", dates, updated));
        }

        output.push_str(&indent(post.text(), 2));
        output.push('\n');

        if let Some(link) = post.post().permalink() {
            if use_colors {
                output.push_str(&format!("  {}\n", link.cyan()));
            } else {
                output.push_str(&format!("  {}\n", link));
            }
        }
        output.push('\n');
    }

    let footer = if summary.shown < summary.matched {
        format!("Showing {} of {} rides", summary.shown, summary.matched)
    } else if summary.matched == 1 {
        "1 ride".to_string()
    } else {
        format!("{} rides", summary.matched)
    };

    if use_colors {
        output.push_str(&format!("{}\n", footer.dimmed()));
    } else {
        output.push_str(&format!("{}\n", footer));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ridesearch_core::Post;

    fn annotated(id: &str, text: &str, time: &str) -> AnnotatedPost {
        let post = Post::parse(id, text, time).unwrap();
        AnnotatedPost::annotate_in(post, &chrono::Utc)
    }

    fn utc() -> Zone {
        Zone::parse("UTC").unwrap()
    }

    #[test]
    fn test_format_posts_table_empty() {
        let summary = SearchSummary {
            matched: 0,
            shown: 0,
        };
        assert_eq!(
            format_posts_table(&[], &utc(), summary, false),
            "No rides found.\n"
        );
    }

    #[test]
    fn test_format_posts_table_card() {
        let post = annotated(
            "123_456",
            "driving to SF friday",
            "2019-05-22T12:00:00+0000",
        );
        let summary = SearchSummary {
            matched: 1,
            shown: 1,
        };
        let table = format_posts_table(&[&post], &utc(), summary, false);

        assert!(table.starts_with("5/24/2019  Updated 5/22/2019, 12:00:00 PM\n"));
        assert!(table.contains("  driving to SF friday\n"));
        assert!(table.contains("  https://www.facebook.com/123/posts/456\n"));
        assert!(table.ends_with("1 ride\n"));
    }

    #[test]
    fn test_format_posts_table_limited_footer() {
        let post = annotated("1_1", "driving friday", "2019-05-22T12:00:00+0000");
        let summary = SearchSummary {
            matched: 3,
            shown: 1,
        };
        let table = format_posts_table(&[&post], &utc(), summary, false);
        assert!(table.ends_with("Showing 1 of 3 rides\n"));
    }

    #[test]
    fn test_format_posts_table_multiline_message() {
        let post = annotated("1_1", "driving friday\nhave 2 seats", "2019-05-22T12:00:00+0000");
        let summary = SearchSummary {
            matched: 1,
            shown: 1,
        };
        let table = format_posts_table(&[&post], &utc(), summary, false);
        assert!(table.contains("  driving friday\n  have 2 seats\n"));
    }

    #[test]
    fn test_format_posts_json() {
        let post = annotated(
            "123_456",
            "anyone driving to LA 5/24?",
            "2019-05-22T12:00:00+0000",
        );
        let query = Query::new(Intent::Seeking)
            .with_date(NaiveDate::from_ymd_opt(2019, 5, 24))
            .with_keywords(["LA"]);

        let json = format_posts_json(&[&post], &query, &utc()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["query"]["type"], "looking");
        assert_eq!(value["query"]["date"], "2019-05-24");
        assert_eq!(value["query"]["keywords"][0], "LA");
        assert_eq!(value["timezone"], "UTC");
        assert_eq!(value["total"], 1);
        assert_eq!(value["posts"][0]["id"], "123_456");
        assert_eq!(value["posts"][0]["intent"], "looking");
        assert_eq!(value["posts"][0]["ride_dates"][0], "2019-05-24");
        assert_eq!(value["posts"][0]["updated_time"], "2019-05-22T12:00:00+00:00");
        assert_eq!(
            value["posts"][0]["permalink"],
            "https://www.facebook.com/123/posts/456"
        );
    }

    #[test]
    fn test_format_posts_json_without_permalink() {
        let post = annotated("nounderscore", "driving today", "2019-05-22T12:00:00+0000");
        let query = Query::default();
        let json = format_posts_json(&[&post], &query, &utc()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["posts"][0].get("permalink").is_none());
        assert!(value["query"]["date"].is_null());
    }
}
