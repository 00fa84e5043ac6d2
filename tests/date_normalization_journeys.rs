//! Behavior-driven tests for the date-input pipeline
//!
//! These tests verify WHAT a user typing into the "dates to predict" field
//! can accomplish, focusing on observable behavior rather than
//! implementation details.

use salescast_tests::{normalize_dates, CalendarDate, DateBatch, ValidationError};

// =============================================================================
// User Journey: Entering Dates
// =============================================================================

#[test]
fn user_can_enter_several_dates_and_keeps_their_order() {
    // Given: A user types three dates with uneven spacing around the commas
    let input = "2023-01-01, 2023-01-02 ,2023-01-03";

    // When: The input is normalized
    let dates = normalize_dates(input).expect("all tokens are valid dates");

    // Then: Every date survives, in the order it was typed
    let formatted: Vec<String> = dates.iter().map(|d| d.format_iso()).collect();
    assert_eq!(formatted, ["2023-01-01", "2023-01-02", "2023-01-03"]);
}

#[test]
fn user_can_abbreviate_a_year_to_mean_january_first() {
    // Given: A user types just "2023"
    let dates = normalize_dates("2023").expect("bare year is valid shorthand");

    // Then: It means January 1st of that year
    assert_eq!(
        dates,
        vec![CalendarDate::parse("2023-01-01").expect("valid")]
    );

    // And: The shorthand only applies to exactly four digits
    assert!(normalize_dates("23").is_err(), "2 digits are not a year");
    assert!(normalize_dates("20233").is_err(), "5 digits are not a year");
    assert!(normalize_dates("2a23").is_err(), "mixed digits are not a year");
}

#[test]
fn user_typing_nothing_gets_an_empty_batch_not_an_error() {
    // Given: The field is left completely empty
    let batch = DateBatch::parse("");

    // Then: The batch is empty and collapses without error
    assert!(batch.is_empty());
    assert_eq!(batch.into_dates().expect("empty is not invalid"), Vec::new());
}

#[test]
fn user_typing_only_whitespace_gets_a_rejection() {
    // Given: The field holds nothing but spaces
    let batch = DateBatch::parse("   ");

    // Then: That is one empty token, which is invalid, so the batch is
    // rejected rather than silently ignored
    assert_eq!(batch.len(), 1);
    assert!(matches!(
        batch.into_dates().expect_err("must fail"),
        ValidationError::InvalidDateInput { .. }
    ));
}

// =============================================================================
// User Journey: Mistyping a Date
// =============================================================================

#[test]
fn one_bad_token_blocks_the_entire_request() {
    // Given: A mix of valid dates and one typo
    let input = "2023-01-01, 2023-01-02, not-a-date";

    // When: The input is normalized
    let err = normalize_dates(input).expect_err("batch must be rejected whole");

    // Then: The rejection names the offending token and the expected format
    let message = err.to_string();
    assert!(message.contains("not-a-date"));
    assert!(message.contains("YYYY-MM-DD"));

    // And: No partial results leak out
    assert!(matches!(err, ValidationError::InvalidDateInput { .. }));
}

#[test]
fn trailing_comma_counts_as_an_invalid_empty_token() {
    // Given: A user leaves a trailing comma
    let err = normalize_dates("2023-01-01,").expect_err("empty token is invalid");
    assert!(matches!(err, ValidationError::InvalidDateInput { .. }));
}

#[test]
fn impossible_calendar_dates_are_rejected() {
    // February 30th never exists, whatever the format looks like.
    assert!(normalize_dates("2023-02-30").is_err());
    assert!(normalize_dates("2023-13-01").is_err());
}

#[test]
fn normalizing_canonical_input_is_a_no_op() {
    // Given: Input that is already in canonical form
    let first = normalize_dates("2023-06-15").expect("valid");

    // When: The formatted result is normalized again
    let again = normalize_dates(&first[0].format_iso()).expect("still valid");

    // Then: Nothing changes
    assert_eq!(first, again);
}
