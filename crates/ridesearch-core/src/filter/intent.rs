//! Ride intent classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::QueryError;
use crate::dates::find_marker;

/// Markers (lowercase) that make a post a ride request rather than an offer.
pub const SEEKING_MARKERS: [&str; 2] = ["looking", "anyone"];

/// Whether a post offers a ride or asks for one.
///
/// Never labeled by the poster; see [`Intent::classify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// The poster is driving and has seats.
    #[default]
    #[serde(rename = "driving", alias = "offering")]
    Offering,

    /// The poster is looking for a ride.
    #[serde(rename = "looking", alias = "seeking")]
    Seeking,
}

impl Intent {
    /// Classifies a post body: any of [`SEEKING_MARKERS`] means [`Intent::Seeking`].
    pub fn classify(text: &str) -> Self {
        Self::classify_lowercase(&text.to_lowercase())
    }

    pub(crate) fn classify_lowercase(text: &str) -> Self {
        if find_marker(text, &SEEKING_MARKERS).is_some() {
            Intent::Seeking
        } else {
            Intent::Offering
        }
    }

    /// The user-facing name (`driving` or `looking`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Offering => "driving",
            Intent::Seeking => "looking",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" | "offering" => Ok(Intent::Offering),
            "looking" | "seeking" => Ok(Intent::Seeking),
            _ => Err(QueryError::invalid_intent(s)),
        }
    }
}
