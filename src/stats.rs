use crate::model::Table;
use crate::profile::parse_float_prefix;

/// Rows inspected when summarizing a numeric column.
pub const STAT_SAMPLE_ROWS: usize = 100;

/// Rows inspected for trend direction, and the minimum parsed values needed
/// before a direction is reported.
pub const TREND_SAMPLE_ROWS: usize = 20;
pub const TREND_MIN_VALUES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Upward,
    Stabilizing,
}

fn sampled_values(table: &Table, column: &str, cap: usize) -> Vec<f64> {
    table
        .column_values(column)
        .take(cap)
        .filter(|value| !value.is_empty())
        .filter_map(parse_float_prefix)
        .collect()
}

/// Count/min/max/mean over the first [`STAT_SAMPLE_ROWS`] parseable values
/// of a column. `None` when nothing in the sample parses.
#[must_use]
pub fn numeric_summary(table: &Table, column: &str) -> Option<NumericSummary> {
    let values = sampled_values(table, column, STAT_SAMPLE_ROWS);
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let mean = values.iter().sum::<f64>() / count as f64;

    Some(NumericSummary {
        count,
        min,
        max,
        mean,
    })
}

/// Compare the last sampled value against the first. Reported only when more
/// than [`TREND_MIN_VALUES`] values parse within the sample window.
#[must_use]
pub fn trend_direction(table: &Table, column: &str) -> Option<TrendDirection> {
    let values = sampled_values(table, column, TREND_SAMPLE_ROWS);
    if values.len() <= TREND_MIN_VALUES {
        return None;
    }

    let first = values[0];
    let last = values[values.len() - 1];
    Some(if last > first {
        TrendDirection::Upward
    } else {
        TrendDirection::Stabilizing
    })
}
