//! Output formatting utilities for the ridesearch CLI.
//!
//! - [`posts`] - Search results (table and JSON)
//! - [`dates`] - Ride dates inferred for ad-hoc text
//! - [`helpers`] - Common formatting utilities

mod dates;
pub mod helpers;
mod posts;

pub use dates::{format_inferred_dates_json, format_inferred_dates_table, InferredDates};
pub use posts::{format_posts_json, format_posts_table, SearchSummary};
