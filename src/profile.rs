use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::Table;

/// Column names that suggest temporal content; only these are probed for
/// date values.
const DATETIME_NAME_HINTS: [&str; 5] = ["date", "time", "created", "updated", "timestamp"];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Distinct-value bounds for calling a column categorical.
const CATEGORICAL_MAX_DISTINCT: usize = 50;
const CATEGORICAL_MAX_DISTINCT_RATIO: f64 = 0.5;

/// Parse the leading numeric prefix of a value, with the semantics of a
/// leading-prefix float scan: optional sign, decimal digits with at most one
/// dot, an optional well-formed exponent, or the literal `Infinity`.
/// Trailing garbage is ignored, so `"12abc"` parses as 12.
pub(crate) fn parse_float_prefix(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }

    // An exponent only counts when it is complete; "12e" stays 12.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exponent_digits = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_digits {
            end = cursor;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn is_numeric_value(value: &str) -> bool {
    !value.is_empty() && parse_float_prefix(value).is_some()
}

/// Columns where at least one row carries a non-empty value whose prefix
/// parses as a float. One stray numeric-looking value is enough; this is the
/// documented single-example rule, not a majority vote.
#[must_use]
pub fn numeric_columns(table: &Table) -> Vec<String> {
    table
        .columns
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            table
                .rows
                .iter()
                .any(|row| row.get(*index).is_some_and(|value| is_numeric_value(value)))
        })
        .map(|(_, name)| name.clone())
        .collect()
}

fn parses_as_datetime(value: &str) -> bool {
    if DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
    {
        return true;
    }
    if DATETIME_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(value, format).is_ok())
    {
        return true;
    }
    DateTime::parse_from_rfc3339(value).is_ok()
}

/// Columns whose name carries a temporal hint and where at least one
/// non-empty value parses as a date.
#[must_use]
pub fn datetime_columns(table: &Table) -> Vec<String> {
    table
        .columns
        .iter()
        .enumerate()
        .filter(|(index, name)| {
            let name_lower = name.to_lowercase();
            if !DATETIME_NAME_HINTS
                .iter()
                .any(|hint| name_lower.contains(hint))
            {
                return false;
            }
            table.rows.iter().any(|row| {
                row.get(*index)
                    .is_some_and(|value| !value.is_empty() && parses_as_datetime(value))
            })
        })
        .map(|(_, name)| name.clone())
        .collect()
}

/// Low-cardinality text columns: neither numeric nor datetime, with fewer
/// than 50 distinct non-empty values covering less than half the rows.
#[must_use]
pub fn categorical_columns(table: &Table) -> Vec<String> {
    if table.rows.is_empty() {
        return Vec::new();
    }

    let numeric = numeric_columns(table).into_iter().collect::<HashSet<_>>();
    let datetime = datetime_columns(table).into_iter().collect::<HashSet<_>>();
    let total = table.rows.len();

    table
        .columns
        .iter()
        .enumerate()
        .filter(|(index, name)| {
            if numeric.contains(*name) || datetime.contains(*name) {
                return false;
            }
            let distinct = table
                .rows
                .iter()
                .filter_map(|row| row.get(*index))
                .filter(|value| !value.is_empty())
                .map(String::as_str)
                .collect::<HashSet<_>>()
                .len();
            #[allow(clippy::cast_precision_loss)]
            let ratio = distinct as f64 / total as f64;
            distinct > 0 && distinct < CATEGORICAL_MAX_DISTINCT && ratio < CATEGORICAL_MAX_DISTINCT_RATIO
        })
        .map(|(_, name)| name.clone())
        .collect()
}
