//! Core contracts for salescast.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The date-input normalization pipeline feeding forecast queries
//! - Collaborator traits for forecasting and sentiment scoring, with the
//!   default persisted-model and lexicon implementations
//! - Response envelope and structured errors

pub mod chart;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod forecaster;
pub mod model;
pub mod normalize;
pub mod sentiment;

pub use chart::ForecastChart;
pub use domain::{CalendarDate, ForecastRow, SentimentLabel, SentimentResult};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::ValidationError;
pub use forecaster::{ForecastError, Forecaster};
pub use model::{ModelError, PersistedModel, TrendComponent};
pub use normalize::{normalize_dates, DateBatch, TokenOutcome};
pub use sentiment::{classify, LexiconScorer, SentimentScorer};
