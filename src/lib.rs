mod csv_out;
mod domain;
mod error;
mod insight;
mod model;
mod options;
mod parse;
mod profile;
mod read;
mod session;
mod stats;
mod warning;

use std::path::Path;

pub use csv_out::{write_table, write_table_to_string};
pub use domain::{DOMAIN_CONFIDENCE, DomainLabel, classify_domain};
pub use error::AnalyzeError;
pub use insight::{InsightFormatter, TemplateFormatter};
pub use model::{AnalysisResult, Table};
pub use options::AnalyzeOptions;
pub use profile::{categorical_columns, datetime_columns, numeric_columns};
pub use read::{decode_bytes, read_to_text};
pub use session::Session;
pub use stats::{NumericSummary, TrendDirection, numeric_summary, trend_direction};
pub use warning::{ParseWarning, WarningCode};

/// One full pass over a text blob: the materialized table, its derived
/// snapshot, and any advisory parse warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub table: Table,
    pub result: AnalysisResult,
    pub warnings: Vec<ParseWarning>,
}

fn build_result(table: &Table, options: &AnalyzeOptions) -> AnalysisResult {
    let (domain, confidence) = classify_domain(&table.columns);
    AnalysisResult {
        row_count: table.row_count(),
        column_count: table.column_count(),
        columns: table.columns.clone(),
        numeric_columns: numeric_columns(table),
        datetime_columns: datetime_columns(table),
        categorical_columns: categorical_columns(table),
        domain,
        confidence,
        sample_rows: table.rows.iter().take(options.sample_rows).cloned().collect(),
    }
}

/// Analyze raw delimited text. Total: malformed input degrades to
/// best-effort rows and warnings, never an error.
#[must_use]
pub fn analyze_text(text: &str, options: &AnalyzeOptions) -> Analysis {
    let mut warnings = Vec::new();
    let table = parse::parse_table(text, options.delimiter, &mut warnings);

    if table.rows.is_empty() {
        warnings.push(ParseWarning::new(
            WarningCode::NoDataRows,
            "no data rows were found in the input",
        ));
    }

    let result = build_result(&table, options);
    tracing::debug!(
        rows = result.row_count,
        columns = result.column_count,
        domain = %result.domain,
        "analysis complete"
    );

    Analysis {
        table,
        result,
        warnings,
    }
}

/// Read a file (UTF-8 with Windows-1252 fallback) and analyze it.
pub fn analyze_file(path: &Path, options: &AnalyzeOptions) -> Result<Analysis, AnalyzeError> {
    let text = read_to_text(path)?;
    Ok(analyze_text(&text, options))
}
