//! Post filtering by intent, ride date and keywords.
//!
//! # Clauses
//!
//! - **Intent** - a post containing `looking` or `anyone` is a ride request
//!   ([`Intent::Seeking`]), anything else is an offer ([`Intent::Offering`]).
//! - **Date** - when the query carries a date, it must be one of the post's
//!   ride dates. Posts without ride dates never match a dated query.
//! - **Keywords** - each keyword must be a case-insensitive substring of the
//!   post body.
//!
//! # Example
//!
//! ```
//! use chrono::FixedOffset;
//! use ridesearch_core::filter::{matches, Intent, Query};
//! use ridesearch_core::{AnnotatedPost, Post};
//!
//! let post = Post::parse("1_2", "DRIVING: UCLA --> UCSD $15 FRIDAY 6PM", "2019-05-22T12:00:00+0000").unwrap();
//! let post = AnnotatedPost::annotate_in(post, &FixedOffset::east_opt(0).unwrap());
//!
//! let query = Query::from_input(Intent::Offering, "2019-05-24", "UCSD");
//! assert!(matches(&post, &query));
//! ```

mod error;
mod evaluator;
mod intent;
mod query;

pub use error::{QueryError, QueryResult};
pub use evaluator::{filter_posts, matches, QueryEvaluator, Rejection};
pub use intent::{Intent, SEEKING_MARKERS};
pub use query::{parse_query_date, tokenize_keywords, Query, QUERY_DATE_FORMAT};
