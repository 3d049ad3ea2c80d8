//! Query evaluation against annotated posts.

use chrono::NaiveDate;

use super::intent::Intent;
use super::query::Query;
use crate::post::AnnotatedPost;

/// The first query clause a post failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The post's inferred intent differs from the query's.
    Intent {
        /// The intent the query asked for.
        expected: Intent,
        /// The intent inferred from the post.
        actual: Intent,
    },

    /// The query date is not among the post's ride dates.
    Date(NaiveDate),

    /// The keyword does not appear in the post body.
    Keyword(String),
}

/// Evaluates a [`Query`] against posts.
///
/// Clauses are checked in order (intent, date, keywords) and evaluation stops
/// at the first one that fails.
#[derive(Debug)]
pub struct QueryEvaluator<'a> {
    query: &'a Query,
    keywords_lower: Vec<String>,
}

impl<'a> QueryEvaluator<'a> {
    /// Creates a new evaluator for `query`.
    pub fn new(query: &'a Query) -> Self {
        let keywords_lower = query.keywords.iter().map(|k| k.to_lowercase()).collect();
        Self {
            query,
            keywords_lower,
        }
    }

    /// Returns true if the post satisfies every clause.
    pub fn matches(&self, post: &AnnotatedPost) -> bool {
        self.rejection(post).is_none()
    }

    /// Returns the first clause the post fails, or `None` if it matches.
    pub fn rejection(&self, post: &AnnotatedPost) -> Option<Rejection> {
        let text = post.text().to_lowercase();

        let actual = Intent::classify_lowercase(&text);
        if actual != self.query.intent {
            return Some(Rejection::Intent {
                expected: self.query.intent,
                actual,
            });
        }

        if let Some(date) = self.query.date {
            if !post.ride_dates().contains(&date) {
                return Some(Rejection::Date(date));
            }
        }

        self.query
            .keywords
            .iter()
            .zip(&self.keywords_lower)
            .find(|(_, lower)| !text.contains(lower.as_str()))
            .map(|(keyword, _)| Rejection::Keyword(keyword.clone()))
    }

    /// Filters posts, keeping only matches in their original order.
    pub fn filter_posts<'b>(&self, posts: &'b [AnnotatedPost]) -> Vec<&'b AnnotatedPost> {
        posts
            .iter()
            .filter(|post| match self.rejection(post) {
                None => true,
                Some(rejection) => {
                    tracing::trace!(id = post.id(), ?rejection, "post rejected");
                    false
                }
            })
            .collect()
    }
}

/// Returns true if `post` satisfies `query`.
pub fn matches(post: &AnnotatedPost, query: &Query) -> bool {
    QueryEvaluator::new(query).matches(post)
}

/// Returns the posts satisfying `query`, in their original order.
pub fn filter_posts<'b>(posts: &'b [AnnotatedPost], query: &Query) -> Vec<&'b AnnotatedPost> {
    QueryEvaluator::new(query).filter_posts(posts)
}
