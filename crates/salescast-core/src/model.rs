//! Persisted forecasting model.
//!
//! The model arrives fully fitted as a JSON blob on disk and is deserialized
//! exactly once at process start. Nothing here trains or refits; `predict`
//! replays the fitted trend and weekly seasonality over a requested
//! timeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forecaster::{ForecastError, Forecaster};
use crate::{chart, CalendarDate, ForecastChart, ForecastRow};

const TIMELINE_PREALLOC_CAP: usize = 4096;

/// Startup failures for the persisted model file.
///
/// Fatal by design: without a loaded model the process serves no forecast,
/// so startup halts instead of entering a degraded mode.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model file '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("model file '{path}' does not deserialize: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fitted linear trend component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendComponent {
    pub intercept: f64,
    pub slope_per_day: f64,
}

/// Complete fitted state of the forecasting model.
///
/// The shape is owned by whatever fitted the model; this crate only requires
/// that it deserializes before first use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedModel {
    /// First day of the trained range.
    pub trained_start: CalendarDate,
    /// Number of consecutive days the model was trained on.
    pub trained_days: u32,
    pub trend: TrendComponent,
    /// Additive weekly seasonality indexed Monday..Sunday.
    pub weekly: [f64; 7],
    /// Symmetric half-width of the uncertainty band.
    pub interval_width: f64,
}

impl PersistedModel {
    /// Reads and deserializes the model blob. Called once at process start;
    /// any failure here is fatal.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ModelError::Malformed {
            path: path.display().to_string(),
            source,
        })
    }

    fn fitted(&self, date: CalendarDate) -> ForecastRow {
        let t = date.days_since(self.trained_start) as f64;
        let weekday = date.into_inner().weekday().number_days_from_monday() as usize;
        let estimate = self.trend.intercept + self.trend.slope_per_day * t + self.weekly[weekday];

        ForecastRow {
            date,
            estimate,
            lower: estimate - self.interval_width,
            upper: estimate + self.interval_width,
        }
    }
}

impl Forecaster for PersistedModel {
    fn timeline(&self, periods: u32) -> Result<Vec<CalendarDate>, ForecastError> {
        if self.trained_days == 0 {
            return Err(ForecastError::EmptyTrainingRange);
        }

        let total = self.trained_days.saturating_add(periods);
        // `total` comes from the untrusted model file: cap the pre-allocation
        // so an absurd day count fails through `TimelineOverflow` instead of
        // aborting on allocation.
        let mut dates = Vec::with_capacity((total as usize).min(TIMELINE_PREALLOC_CAP));
        let mut cursor = self.trained_start;
        for _ in 0..total {
            dates.push(cursor);
            cursor = cursor
                .next_day()
                .ok_or(ForecastError::TimelineOverflow { days: total })?;
        }

        Ok(dates)
    }

    fn predict(&self, timeline: &[CalendarDate]) -> Result<Vec<ForecastRow>, ForecastError> {
        if self.trained_days == 0 {
            return Err(ForecastError::EmptyTrainingRange);
        }

        Ok(timeline.iter().map(|&date| self.fitted(date)).collect())
    }

    fn plot(&self, rows: &[ForecastRow]) -> ForecastChart {
        chart::render(rows)
    }
}
