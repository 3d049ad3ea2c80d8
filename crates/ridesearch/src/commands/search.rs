//! Search command implementation.
//!
//! Loads a feed, annotates every post with ride dates and prints the posts
//! matching the ride type, date and keywords.

use std::path::PathBuf;

use ridesearch_core::feed::load_feed_async;
use ridesearch_core::filter::{filter_posts, Intent, Query, QUERY_DATE_FORMAT};
use ridesearch_core::{sample, Post};

use super::config::Config;
use super::{CommandContext, CommandError, Result};
use crate::output::{format_posts_json, format_posts_table, SearchSummary};
use crate::zone::Zone;

/// Options for the search command.
#[derive(Debug, Default)]
pub struct SearchOptions {
    /// Feed file from `--feed`.
    pub feed: Option<PathBuf>,
    /// Use the built-in sample feed.
    pub sample: bool,
    /// Ride type to show.
    pub intent: Intent,
    /// Raw `--date` input.
    pub date: Option<String>,
    /// Raw `--keywords` input.
    pub keywords: String,
    /// IANA zone from `--tz`.
    pub tz: Option<String>,
    /// Maximum number of posts to print.
    pub limit: Option<usize>,
}

/// Where the posts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FeedSource {
    Sample,
    File(PathBuf),
}

impl FeedSource {
    /// Picks `--sample`, then `--feed`, then `feed.path` from config.
    fn resolve(opts: &SearchOptions, config: &Config) -> Result<Self> {
        if opts.sample {
            return Ok(FeedSource::Sample);
        }
        opts.feed
            .clone()
            .or_else(|| config.feed.path.clone())
            .map(FeedSource::File)
            .ok_or_else(|| {
                CommandError::Config(
                    "No feed given. Pass --feed <FILE>, --sample, or run \
                     'ridesearch config set feed.path <FILE>'"
                        .to_string(),
                )
            })
    }
}

async fn load_posts(source: &FeedSource, ctx: &CommandContext) -> Result<Vec<Post>> {
    match source {
        FeedSource::Sample => Ok(sample::posts()),
        FeedSource::File(path) => {
            if ctx.verbose {
                eprintln!("Loading feed from {}", path.display());
            }
            Ok(load_feed_async(path).await?)
        }
    }
}

/// Builds the query, warning about a date that will be ignored.
fn build_query(opts: &SearchOptions) -> Query {
    let raw_date = opts.date.as_deref().unwrap_or("");
    let query = Query::from_input(opts.intent, raw_date, &opts.keywords);

    if query.date.is_none() && !raw_date.trim().is_empty() {
        tracing::warn!(
            date = raw_date,
            "ignoring date that is not {}; showing every date",
            QUERY_DATE_FORMAT
        );
    }

    query
}

/// Executes the search command.
pub async fn execute(ctx: &CommandContext, opts: &SearchOptions, config: &Config) -> Result<()> {
    let source = FeedSource::resolve(opts, config)?;
    let zone = Zone::resolve(opts.tz.as_deref(), config.output.timezone.as_deref())?;
    let query = build_query(opts);

    let posts = zone.annotate(load_posts(&source, ctx).await?);
    tracing::debug!(posts = posts.len(), zone = %zone.name(), "annotated feed");

    let matched = filter_posts(&posts, &query);
    let total = matched.len();
    let shown: Vec<_> = match opts.limit {
        Some(limit) => matched.into_iter().take(limit).collect(),
        None => matched,
    };

    if ctx.verbose {
        eprintln!("{} of {} posts match", total, posts.len());
    }

    if ctx.json_output {
        println!("{}", format_posts_json(&shown, &query, &zone)?);
    } else {
        let summary = SearchSummary {
            matched: total,
            shown: shown.len(),
        };
        print!("{}", format_posts_table(&shown, &zone, summary, ctx.use_colors));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config_with_feed(path: &str) -> Config {
        let mut config = Config::default();
        config.feed.path = Some(PathBuf::from(path));
        config
    }

    #[test]
    fn test_feed_source_sample_wins() {
        let opts = SearchOptions {
            sample: true,
            ..Default::default()
        };
        let source = FeedSource::resolve(&opts, &config_with_feed("config.json")).unwrap();
        assert_eq!(source, FeedSource::Sample);
    }

    #[test]
    fn test_feed_source_flag_over_config() {
        let opts = SearchOptions {
            feed: Some(PathBuf::from("flag.json")),
            ..Default::default()
        };
        let source = FeedSource::resolve(&opts, &config_with_feed("config.json")).unwrap();
        assert_eq!(source, FeedSource::File(PathBuf::from("flag.json")));
    }

    #[test]
    fn test_feed_source_from_config() {
        let source =
            FeedSource::resolve(&SearchOptions::default(), &config_with_feed("config.json"))
                .unwrap();
        assert_eq!(source, FeedSource::File(PathBuf::from("config.json")));
    }

    #[test]
    fn test_feed_source_missing() {
        let result = FeedSource::resolve(&SearchOptions::default(), &Config::default());
        assert!(matches!(result, Err(CommandError::Config(_))));
    }

    #[test]
    fn test_build_query() {
        let opts = SearchOptions {
            intent: Intent::Seeking,
            date: Some("2019-05-24".to_string()),
            keywords: "UCSD  bike".to_string(),
            ..Default::default()
        };
        let query = build_query(&opts);
        assert_eq!(query.intent, Intent::Seeking);
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2019, 5, 24));
        assert_eq!(query.keywords, vec!["UCSD", "bike"]);
    }

    #[test]
    fn test_build_query_ignores_bad_date() {
        let opts = SearchOptions {
            date: Some("5/24".to_string()),
            ..Default::default()
        };
        let query = build_query(&opts);
        assert!(query.date.is_none());
        assert!(query.keywords.is_empty());
    }

    #[tokio::test]
    async fn test_load_posts_missing_file() {
        let ctx = CommandContext {
            json_output: false,
            use_colors: false,
            quiet: false,
            verbose: false,
        };
        let dir = tempfile::tempdir().unwrap();
        let source = FeedSource::File(dir.path().join("missing.json"));
        let result = load_posts(&source, &ctx).await;
        assert!(matches!(result, Err(CommandError::Feed(_))));
    }
}
