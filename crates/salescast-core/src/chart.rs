//! ASCII band chart for forecast output.
//!
//! The chart is produced here and passed through the presentation shell
//! unmodified: `*` marks the point estimate, `.` fills the band between the
//! lower and upper bound.

use serde::{Deserialize, Serialize};

use crate::ForecastRow;

const WIDTH: usize = 72;
const HEIGHT: usize = 16;

/// Pre-rendered chart lines plus a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastChart {
    pub title: String,
    pub lines: Vec<String>,
}

pub fn render(rows: &[ForecastRow]) -> ForecastChart {
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return ForecastChart {
            title: String::from("forecast (no rows)"),
            lines: Vec::new(),
        };
    };

    let min = rows.iter().map(|r| r.lower).fold(f64::INFINITY, f64::min);
    let max = rows
        .iter()
        .map(|r| r.upper)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);

    let columns = WIDTH.min(rows.len());
    let mut grid = vec![vec![' '; columns]; HEIGHT];

    for col in 0..columns {
        let index = if columns == 1 {
            0
        } else {
            col * (rows.len() - 1) / (columns - 1)
        };
        let row = &rows[index];

        let line_for = |value: f64| -> usize {
            let norm = (value - min) / span;
            let line = ((1.0 - norm) * (HEIGHT - 1) as f64).round();
            (line.max(0.0) as usize).min(HEIGHT - 1)
        };

        let top = line_for(row.upper);
        let bottom = line_for(row.lower);
        for cells in grid.iter_mut().take(bottom + 1).skip(top) {
            cells[col] = '.';
        }
        grid[line_for(row.estimate)][col] = '*';
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .map(|cells| {
            cells
                .into_iter()
                .collect::<String>()
                .trim_end()
                .to_owned()
        })
        .collect();
    lines.push(format!("y: {min:.2} .. {max:.2}"));

    ForecastChart {
        title: format!("forecast {} to {}", first.date, last.date),
        lines,
    }
}
