use colored::Colorize;
use salescast_core::{Envelope, SentimentLabel, SentimentResult};
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(envelope: &Envelope<Value>, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Ndjson => {
            let payload = serde_json::to_string(envelope)?;
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope),
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) {
    println!("request_id  : {}", envelope.meta.request_id);
    println!("schema      : {}", envelope.meta.schema_version);
    println!("generated_at: {}", envelope.meta.generated_at);
    println!("latency_ms  : {}", envelope.meta.latency_ms);

    if !envelope.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.meta.warnings {
            println!("  - {warning}");
        }
    }

    if let Some(rows) = envelope.data.get("rows").and_then(Value::as_array) {
        if !rows.is_empty() {
            render_forecast_rows(rows);
        }
    }

    if let Some(chart) = envelope.data.get("chart").filter(|chart| !chart.is_null()) {
        render_chart(chart);
    }

    if let Some(sentiment) = envelope
        .data
        .get("sentiment")
        .filter(|sentiment| !sentiment.is_null())
    {
        render_sentiment(sentiment);
    }

    if !envelope.errors.is_empty() {
        println!("errors:");
        for error in &envelope.errors {
            println!("  - {}: {}", error.code, error.message);
        }
    }
}

fn render_forecast_rows(rows: &[Value]) {
    println!();
    println!("{:<12} {:>12} {:>12} {:>12}", "date", "estimate", "lower", "upper");
    for row in rows {
        let date = row.get("date").and_then(Value::as_str).unwrap_or("-");
        let estimate = row.get("estimate").and_then(Value::as_f64).unwrap_or(f64::NAN);
        let lower = row.get("lower").and_then(Value::as_f64).unwrap_or(f64::NAN);
        let upper = row.get("upper").and_then(Value::as_f64).unwrap_or(f64::NAN);
        println!("{date:<12} {estimate:>12.2} {lower:>12.2} {upper:>12.2}");
    }
}

fn render_chart(chart: &Value) {
    println!();
    if let Some(title) = chart.get("title").and_then(Value::as_str) {
        println!("{title}");
    }
    if let Some(lines) = chart.get("lines").and_then(Value::as_array) {
        for line in lines {
            println!("{}", line.as_str().unwrap_or_default());
        }
    }
}

fn render_sentiment(sentiment: &Value) {
    let Ok(result) = serde_json::from_value::<SentimentResult>(sentiment.clone()) else {
        return;
    };

    let line = sentiment_line(&result);
    let colored_line = match result.label {
        SentimentLabel::Positive => line.green().bold(),
        SentimentLabel::Negative => line.red().bold(),
        SentimentLabel::Neutral => line.dimmed(),
    };

    println!();
    println!("{colored_line}");
}

fn sentiment_line(result: &SentimentResult) -> String {
    format!(
        "{} sentiment (score {})",
        result.label,
        result.display_score()
    )
}
