//! Ride date and intent inference for rideshare group posts.
//!
//! Posts from a group feed are annotated with the calendar dates they refer to
//! ([`dates::infer_ride_dates`]) and then filtered by intent, date and keywords
//! ([`filter::matches`]).
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, NaiveDate};
//! use ridesearch_core::filter::{filter_posts, Intent, Query};
//! use ridesearch_core::{AnnotatedPost, Post};
//!
//! let post = Post::parse("1_2", "Driving UCLA -> SD on 5/24", "2019-05-22T12:00:00+0000").unwrap();
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let posts = vec![AnnotatedPost::annotate_in(post, &utc)];
//!
//! let query = Query::new(Intent::Offering).with_date(NaiveDate::from_ymd_opt(2019, 5, 24));
//! assert_eq!(filter_posts(&posts, &query).len(), 1);
//! ```

pub mod dates;
pub mod feed;
pub mod filter;
pub mod post;
pub mod sample;

pub use feed::{FeedError, FeedResult};
pub use post::{AnnotatedPost, Post};
