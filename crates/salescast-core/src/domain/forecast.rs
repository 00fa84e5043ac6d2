use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// One row of the forecast table.
///
/// Numeric content comes straight from the forecasting collaborator and is
/// passed through unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub date: CalendarDate,
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
}
