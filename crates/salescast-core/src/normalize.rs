//! Date-input normalization feeding forecast queries.
//!
//! Free text arrives as comma-separated tokens. Each token is trimmed,
//! bare-year shorthand is expanded, and every token independently parses to a
//! calendar date or an invalid marker. One invalid token rejects the whole
//! batch; a forecast table must never silently drop rows.

use std::borrow::Cow;

use crate::{CalendarDate, ValidationError};

/// Outcome of normalizing one raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOutcome {
    Valid(CalendarDate),
    Invalid,
}

/// Ordered raw-token/outcome pairs for one input field.
///
/// Length and order match the comma-separated tokens as typed, so entries
/// line up with whatever the presentation shell displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateBatch {
    entries: Vec<(String, TokenOutcome)>,
}

impl DateBatch {
    /// Tokenizes, expands bare years, and parses. Never fails: malformed
    /// tokens are carried as invalid markers until [`Self::into_dates`].
    ///
    /// Only a truly empty input is an empty batch. Whitespace-only input
    /// tokenizes to a single empty token, which is invalid and rejects the
    /// batch like any other malformed token.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::default();
        }

        let entries = input
            .split(',')
            .map(|raw| {
                let token = raw.trim();
                let outcome = match CalendarDate::parse(&expand_bare_year(token)) {
                    Ok(date) => TokenOutcome::Valid(date),
                    Err(_) => TokenOutcome::Invalid,
                };
                (token.to_owned(), outcome)
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[(String, TokenOutcome)] {
        &self.entries
    }

    /// All-or-nothing collapse: either every token parsed, or the batch is
    /// rejected with one message naming the offending tokens and the
    /// expected format.
    pub fn into_dates(self) -> Result<Vec<CalendarDate>, ValidationError> {
        let mut dates = Vec::with_capacity(self.entries.len());
        let mut invalid = Vec::new();

        for (raw, outcome) in self.entries {
            match outcome {
                TokenOutcome::Valid(date) => dates.push(date),
                TokenOutcome::Invalid => invalid.push(raw),
            }
        }

        if invalid.is_empty() {
            Ok(dates)
        } else {
            Err(ValidationError::InvalidDateInput {
                tokens: invalid.join(", "),
            })
        }
    }
}

/// A token of exactly four ASCII digits is shorthand for January 1st of that
/// year. Everything else reaches the parser unchanged.
fn expand_bare_year(token: &str) -> Cow<'_, str> {
    if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Owned(format!("{token}-01-01"))
    } else {
        Cow::Borrowed(token)
    }
}

/// Convenience wrapper for the full pipeline: tokenize, expand, parse,
/// validate.
pub fn normalize_dates(input: &str) -> Result<Vec<CalendarDate>, ValidationError> {
    DateBatch::parse(input).into_dates()
}
