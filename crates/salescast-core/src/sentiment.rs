//! Lexicon-based sentiment scoring.
//!
//! The scorer is an opaque collaborator behind [`SentimentScorer`]; the part
//! this crate owns is the classification rule layered on top of it.

use crate::SentimentResult;

/// Sentiment collaborator contract: polarity in `[-1.0, 1.0]`.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// Classifies free text, or `None` when the input is empty.
///
/// Only truly empty input short-circuits before the collaborator is
/// invoked; whitespace-only text reaches the scorer and classifies as
/// neutral.
pub fn classify(scorer: &dyn SentimentScorer, text: &str) -> Option<SentimentResult> {
    if text.is_empty() {
        return None;
    }

    Some(SentimentResult::from_score(scorer.score(text)))
}

/// Weighted word-list scorer.
///
/// Weights follow the AFINN convention (-5 strongly negative to +5 strongly
/// positive). The aggregate score is the mean weight of matched words scaled
/// into `[-1, 1]`; text with no matched word scores exactly `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

const MAX_WEIGHT: f64 = 5.0;

// Sorted by word for binary search.
const LEXICON: &[(&str, i8)] = &[
    ("abysmal", -5),
    ("amazing", 4),
    ("angry", -3),
    ("annoying", -2),
    ("awesome", 4),
    ("awful", -3),
    ("bad", -3),
    ("best", 3),
    ("boring", -3),
    ("brilliant", 4),
    ("broken", -1),
    ("catastrophe", -4),
    ("cheerful", 2),
    ("crash", -2),
    ("decline", -2),
    ("delighted", 3),
    ("disappointing", -2),
    ("disaster", -4),
    ("dreadful", -3),
    ("enjoy", 2),
    ("excellent", 3),
    ("exciting", 3),
    ("fail", -2),
    ("failure", -2),
    ("fantastic", 4),
    ("fear", -2),
    ("fine", 2),
    ("gain", 2),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("growth", 2),
    ("happy", 3),
    ("hate", -3),
    ("horrible", -3),
    ("improve", 2),
    ("improvement", 2),
    ("loss", -3),
    ("love", 3),
    ("lovely", 3),
    ("mediocre", -1),
    ("miserable", -3),
    ("nice", 3),
    ("outstanding", 5),
    ("perfect", 3),
    ("pleasant", 3),
    ("poor", -2),
    ("problem", -2),
    ("profit", 2),
    ("recommend", 2),
    ("sad", -2),
    ("slump", -3),
    ("strong", 2),
    ("success", 2),
    ("superb", 5),
    ("terrible", -3),
    ("ugly", -3),
    ("unhappy", -2),
    ("unreliable", -2),
    ("useless", -2),
    ("weak", -2),
    ("win", 4),
    ("wonderful", 4),
    ("worst", -3),
    ("worthless", -2),
];

impl LexiconScorer {
    pub const fn new() -> Self {
        Self
    }

    fn weight(word: &str) -> Option<i8> {
        LEXICON
            .binary_search_by_key(&word, |&(entry, _)| entry)
            .ok()
            .map(|index| LEXICON[index].1)
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let mut total = 0i32;
        let mut matched = 0u32;

        for word in text.split(|ch: char| !ch.is_ascii_alphanumeric() && ch != '\'') {
            if word.is_empty() {
                continue;
            }
            let word = word.to_ascii_lowercase();
            if let Some(weight) = Self::weight(&word) {
                total += i32::from(weight);
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }

        (f64::from(total) / f64::from(matched) / MAX_WEIGHT).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SentimentLabel;

    #[test]
    fn lexicon_stays_sorted_for_binary_search() {
        for pair in LEXICON.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn favorable_text_scores_positive() {
        let scorer = LexiconScorer::new();
        let result = classify(&scorer, "Sales were great, what a wonderful quarter")
            .expect("must classify");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score > 0.0);
    }

    #[test]
    fn unfavorable_text_scores_negative() {
        let scorer = LexiconScorer::new();
        let result =
            classify(&scorer, "A terrible launch and an awful forecast").expect("must classify");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.score < 0.0);
    }

    #[test]
    fn unmatched_text_scores_exactly_zero() {
        let scorer = LexiconScorer::new();
        let result = classify(&scorer, "The sky is blue today").expect("must classify");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn empty_text_is_not_classified() {
        let scorer = LexiconScorer::new();
        assert!(classify(&scorer, "").is_none());
    }

    #[test]
    fn whitespace_only_text_classifies_as_neutral() {
        let scorer = LexiconScorer::new();
        let result = classify(&scorer, "   \t").expect("must classify");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score("GREAT"), scorer.score("great"));
    }

    #[test]
    fn score_stays_within_polarity_bounds() {
        let scorer = LexiconScorer::new();
        for text in ["outstanding superb amazing", "abysmal disaster catastrophe"] {
            let score = scorer.score(text);
            assert!((-1.0..=1.0).contains(&score), "{score} out of range");
        }
    }
}
