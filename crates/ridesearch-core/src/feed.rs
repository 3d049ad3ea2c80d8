//! Feed ingestion.
//!
//! Feeds are JSON in the Graph API shape, either the `{"data": [...]}`
//! envelope returned by `/{group}/feed` or a bare array of records. Records
//! missing an id, message or update time are dropped here so the rest of the
//! crate only ever sees complete posts.
//!
//! Both synchronous and asynchronous file readers are provided:
//! - [`load_feed`] - uses `std::fs`
//! - [`load_feed_async`] - uses `tokio::fs`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::post::{parse_graph_time, Post};

/// Errors that can occur while reading a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// I/O error during file read.
    #[error("failed to read feed file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The feed file is not a valid feed document.
    #[error("failed to parse feed file '{path}': {source}")]
    ParseError {
        /// The path that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory document is not a valid feed.
    #[error("failed to parse feed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for feed operations.
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// A feed record as delivered, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

impl RawPost {
    /// Converts the record into a [`Post`].
    ///
    /// Returns `None` if any field is missing or empty, or if the update time
    /// does not parse.
    pub fn into_post(self) -> Option<Post> {
        let id = self.id.filter(|s| !s.is_empty())?;
        let message = self.message.filter(|s| !s.is_empty())?;
        let updated_time = self.updated_time.filter(|s| !s.is_empty())?;

        match parse_graph_time(&updated_time) {
            Ok(time) => Some(Post::new(id, message, time)),
            Err(e) => {
                tracing::debug!(%id, %updated_time, error = %e, "dropping post with unparseable time");
                None
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Envelope { data: Vec<RawPost> },
    List(Vec<RawPost>),
}

impl FeedDocument {
    fn into_records(self) -> Vec<RawPost> {
        match self {
            FeedDocument::Envelope { data } => data,
            FeedDocument::List(records) => records,
        }
    }
}

/// Validates raw records, keeping feed order.
pub fn posts_from_raw(records: impl IntoIterator<Item = RawPost>) -> Vec<Post> {
    let mut dropped = 0usize;
    let posts: Vec<Post> = records
        .into_iter()
        .filter_map(|record| {
            let post = record.into_post();
            if post.is_none() {
                dropped += 1;
            }
            post
        })
        .collect();

    if dropped > 0 {
        tracing::debug!(kept = posts.len(), dropped, "dropped incomplete feed records");
    }
    posts
}

/// Parses a feed document.
pub fn parse_feed(json: &str) -> FeedResult<Vec<Post>> {
    let document: FeedDocument = serde_json::from_str(json)?;
    Ok(posts_from_raw(document.into_records()))
}

/// Reads and parses a feed file.
pub fn load_feed(path: &Path) -> FeedResult<Vec<Post>> {
    let content = fs::read_to_string(path).map_err(|source| FeedError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_feed_file(path, &content)
}

/// Reads and parses a feed file without blocking the runtime.
pub async fn load_feed_async(path: &Path) -> FeedResult<Vec<Post>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FeedError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
    parse_feed_file(path, &content)
}

fn parse_feed_file(path: &Path, content: &str) -> FeedResult<Vec<Post>> {
    let document: FeedDocument =
        serde_json::from_str(content).map_err(|source| FeedError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
    let posts = posts_from_raw(document.into_records());
    tracing::debug!(path = %path.display(), count = posts.len(), "loaded feed");
    Ok(posts)
}
