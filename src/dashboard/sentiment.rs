//! Sentiment labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted sentiment of a review.
///
/// Classifiers emit numeric labels; `1` is positive and every other value is
/// negative. [`Sentiment::from_label`] is the only place that mapping lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Numeric label of the positive class
    pub const POSITIVE_LABEL: i64 = 1;

    /// Map a raw classifier label
    pub fn from_label(label: i64) -> Self {
        if label == Self::POSITIVE_LABEL {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Get emoji representation.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Positive => "👍",
            Self::Negative => "👎",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("Positive"),
            Self::Negative => f.write_str("Negative"),
        }
    }
}
