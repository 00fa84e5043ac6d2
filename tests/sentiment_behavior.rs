//! Behavior-driven tests for the sentiment pipeline
//!
//! These tests verify the classification contract: a polarity score in
//! [-1.0, 1.0] mapped to exactly one of three labels, with empty input
//! short-circuiting before any scoring happens.

use salescast_core::SentimentResult;
use salescast_tests::{classify, LexiconScorer, SentimentLabel};

// =============================================================================
// User Journey: Classifying Text
// =============================================================================

#[test]
fn user_gets_a_positive_label_for_favorable_text() {
    // Given: Clearly favorable text
    let scorer = LexiconScorer::new();

    // When: It is classified
    let result = classify(&scorer, "An amazing quarter, sales were excellent")
        .expect("non-empty text is classified");

    // Then: The label is positive and the score backs it up
    assert_eq!(result.label, SentimentLabel::Positive);
    assert!(result.score > 0.0 && result.score <= 1.0);
}

#[test]
fn user_gets_a_negative_label_for_unfavorable_text() {
    let scorer = LexiconScorer::new();

    let result = classify(&scorer, "A horrible slump, the worst launch yet")
        .expect("non-empty text is classified");

    assert_eq!(result.label, SentimentLabel::Negative);
    assert!(result.score < 0.0 && result.score >= -1.0);
}

#[test]
fn text_without_opinion_words_is_neutral_with_score_zero() {
    let scorer = LexiconScorer::new();

    let result = classify(&scorer, "The report covers the third quarter")
        .expect("non-empty text is classified");

    // Exactly zero, and zero means neutral, never an error.
    assert_eq!(result.score, 0.0);
    assert_eq!(result.label, SentimentLabel::Neutral);
}

#[test]
fn empty_text_is_never_classified() {
    // Given: A completely empty field
    let scorer = LexiconScorer::new();

    // Then: Nothing is scored, nothing is rendered
    assert!(classify(&scorer, "").is_none());
}

#[test]
fn whitespace_only_text_is_still_classified() {
    // Given: A field holding only whitespace
    let scorer = LexiconScorer::new();

    // When: It is classified
    let result = classify(&scorer, "  \n ").expect("non-empty text is classified");

    // Then: The scorer runs and lands on neutral, it is not skipped
    assert_eq!(result.label, SentimentLabel::Neutral);
    assert_eq!(result.score, 0.0);
}

// =============================================================================
// Contract: Label Boundaries
// =============================================================================

#[test]
fn label_boundaries_are_exact() {
    assert_eq!(
        SentimentResult::from_score(0.0).label,
        SentimentLabel::Neutral
    );
    assert_eq!(
        SentimentResult::from_score(0.5).label,
        SentimentLabel::Positive
    );
    assert_eq!(
        SentimentResult::from_score(-0.01).label,
        SentimentLabel::Negative
    );
}

#[test]
fn displayed_score_is_rounded_but_stored_score_is_not() {
    let result = SentimentResult::from_score(0.666_666);
    assert_eq!(result.display_score(), "0.67");
    assert!((result.score - 0.666_666).abs() < f64::EPSILON);
}
