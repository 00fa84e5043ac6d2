use thiserror::Error;

use crate::{CalendarDate, ForecastChart, ForecastRow};

/// Failures raised by a forecasting collaborator.
///
/// The forecast requestor does not catch these; they abort the single
/// request that triggered them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("model has an empty training range")]
    EmptyTrainingRange,
    #[error("timeline of {days} days overflows the supported calendar range")]
    TimelineOverflow { days: u32 },
}

/// Forecasting collaborator contract.
///
/// Implementations arrive fully fitted and stay read-only for the life of
/// the process. The core never inspects how estimates are produced.
pub trait Forecaster: Send + Sync {
    /// Dates the model can evaluate: the trained range extended by
    /// `periods` future days. Zero periods means no extrapolation.
    fn timeline(&self, periods: u32) -> Result<Vec<CalendarDate>, ForecastError>;

    /// Point estimate plus lower/upper uncertainty bound per date.
    fn predict(&self, timeline: &[CalendarDate]) -> Result<Vec<ForecastRow>, ForecastError>;

    /// Renders predictions as a chart for the presentation shell.
    fn plot(&self, rows: &[ForecastRow]) -> ForecastChart;
}
