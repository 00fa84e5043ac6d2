use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Three-way polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Exact boundary rule: a score of exactly zero is neutral.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl Display for SentimentLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus the polarity score behind it.
///
/// The stored score keeps full precision; two-decimal rounding happens only
/// at render time via [`Self::display_score`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
}

impl SentimentResult {
    pub fn from_score(score: f64) -> Self {
        Self {
            label: SentimentLabel::from_polarity(score),
            score,
        }
    }

    pub fn display_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}
