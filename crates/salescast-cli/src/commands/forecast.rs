use serde::Serialize;

use salescast_core::{CalendarDate, DateBatch, ForecastChart, ForecastRow, Forecaster, PersistedModel};

use crate::cli::ForecastArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ForecastResponseData {
    rows: Vec<ForecastRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<ForecastChart>,
}

pub fn run(args: &ForecastArgs, model: &PersistedModel) -> Result<CommandResult, CliError> {
    let batch = DateBatch::parse(&args.dates);

    // Empty input is a no-op, distinct from invalid input which rejects the
    // whole batch with an error.
    if batch.is_empty() {
        let data = serde_json::to_value(ForecastResponseData {
            rows: Vec::new(),
            chart: None,
        })?;
        return Ok(CommandResult::ok(data));
    }

    let requested = batch.into_dates()?;

    // Zero extra periods: only dates inside the trained range are evaluated,
    // no extrapolation beyond the training horizon.
    let timeline = model.timeline(0)?;
    let predicted = model.predict(&timeline)?;
    let chart = model.plot(&predicted);

    let mut warnings = Vec::new();
    let rows = filter_requested(&predicted, &requested, &mut warnings);

    let data = serde_json::to_value(ForecastResponseData {
        rows,
        chart: Some(chart),
    })?;

    Ok(CommandResult::ok(data).with_warnings(warnings))
}

/// Keeps the rows the user asked for, in request order. A requested date the
/// model never evaluated produces a warning instead of a row.
fn filter_requested(
    predicted: &[ForecastRow],
    requested: &[CalendarDate],
    warnings: &mut Vec<String>,
) -> Vec<ForecastRow> {
    requested
        .iter()
        .filter_map(|date| match predicted.iter().find(|row| row.date == *date) {
            Some(row) => Some(*row),
            None => {
                warnings.push(format!(
                    "date {date} is outside the trained range and was skipped"
                ));
                None
            }
        })
        .collect()
}
