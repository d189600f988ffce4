use serde::{Deserialize, Serialize};

use crate::domain::DomainLabel;

/// Fully materialized tabular data. Column order follows the header line;
/// row order follows input line order. Every row holds exactly
/// `columns.len()` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Values of one column in row order. Yields nothing for an unknown
    /// column name.
    pub fn column_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        let index = self.column_index(name);
        self.rows.iter().filter_map(move |row| {
            index.and_then(|index| row.get(index).map(String::as_str))
        })
    }
}

/// Derived snapshot of one parsed table. Computed once per load and replaced
/// wholesale on re-load; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub datetime_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub domain: DomainLabel,
    pub confidence: f32,
    pub sample_rows: Vec<Vec<String>>,
}
