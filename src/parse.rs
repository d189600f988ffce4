use std::collections::{HashMap, HashSet};

use crate::model::Table;
use crate::warning::{ParseWarning, WarningCode};

/// Rename later occurrences of a repeated header so every column stays
/// addressable by name: `a,a,a` becomes `a,a_1,a_2`.
fn dedupe_headers(headers: &mut [String], header_line: usize, warnings: &mut Vec<ParseWarning>) {
    let originals: HashSet<String> = headers.iter().cloned().collect();
    let mut assigned: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for header in headers.iter_mut() {
        let occurrence = counts.entry(header.clone()).or_insert(0);
        if *occurrence > 0 {
            // Bump the suffix past any name already taken, whether it came
            // from the input or from an earlier rename.
            let mut suffix = *occurrence;
            let mut renamed = format!("{header}_{suffix}");
            while originals.contains(&renamed) || assigned.contains(&renamed) {
                suffix += 1;
                renamed = format!("{header}_{suffix}");
            }
            *occurrence = suffix;

            warnings.push(
                ParseWarning::new(
                    WarningCode::DuplicateHeaderRenamed,
                    format!("duplicate header '{header}' renamed to '{renamed}'"),
                )
                .with_line(header_line)
                .with_column(renamed.clone()),
            );
            *header = renamed;
        }
        *occurrence += 1;
        assigned.insert(header.clone());
    }
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|field| field.trim().to_string())
        .collect()
}

/// Turn raw delimited text into a [`Table`].
///
/// The first non-blank line is the header; every later non-blank line is
/// split on the delimiter and zipped positionally with the header. Short
/// rows are padded with empty strings, extra trailing fields are dropped,
/// and blank lines produce no row at all. There is no quoting support: a
/// delimiter inside a field always separates fields. Malformed text never
/// fails; empty or header-only input yields a zero-row table.
pub(crate) fn parse_table(
    text: &str,
    delimiter: char,
    warnings: &mut Vec<ParseWarning>,
) -> Table {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_index, header_line)) = lines.next() else {
        return Table::default();
    };

    let mut columns = split_fields(header_line, delimiter);
    dedupe_headers(&mut columns, header_index + 1, warnings);

    let mut rows = Vec::new();
    for (index, line) in lines {
        let mut values = split_fields(line, delimiter);
        if values.len() < columns.len() {
            warnings.push(
                ParseWarning::new(
                    WarningCode::ShortRowPadded,
                    format!(
                        "row has {} of {} fields; missing trailing values treated as empty",
                        values.len(),
                        columns.len()
                    ),
                )
                .with_line(index + 1),
            );
            values.resize(columns.len(), String::new());
        } else if values.len() > columns.len() {
            warnings.push(
                ParseWarning::new(
                    WarningCode::LongRowTruncated,
                    format!(
                        "row has {} fields but only {} columns; extras dropped",
                        values.len(),
                        columns.len()
                    ),
                )
                .with_line(index + 1),
            );
            values.truncate(columns.len());
        }
        rows.push(values);
    }

    tracing::debug!(
        columns = columns.len(),
        rows = rows.len(),
        "parsed delimited text"
    );

    Table { columns, rows }
}
