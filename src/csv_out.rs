use std::path::Path;

use csv::WriterBuilder;

use crate::error::AnalyzeError;
use crate::model::Table;

/// Write the normalized table back out as real CSV. Unlike the input path,
/// the output is properly quoted, so fields containing the delimiter
/// survive a round trip through a conforming reader.
pub fn write_table(path: &Path, table: &Table, delimiter: u8) -> Result<(), AnalyzeError> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_table_to_string(table: &Table, delimiter: u8) -> Result<String, AnalyzeError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::<u8>::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|error| AnalyzeError::Csv(error.into_error().into()))?;
    String::from_utf8(bytes).map_err(|error| {
        AnalyzeError::InvalidOption(format!("invalid utf-8 csv output: {error}"))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::write_table_to_string;
    use crate::model::Table;

    #[test]
    fn output_quotes_fields_containing_the_delimiter() {
        let table = Table {
            columns: vec!["a".to_string(), "b".to_string()],
            rows: vec![vec!["x,y".to_string(), "2".to_string()]],
        };
        let csv = write_table_to_string(&table, b',').expect("csv should render");
        assert_eq!(csv, "a,b\n\"x,y\",2\n");
    }

    #[test]
    fn custom_delimiter_is_honored() {
        let table = Table {
            columns: vec!["a".to_string(), "b".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
        };
        let csv = write_table_to_string(&table, b';').expect("csv should render");
        assert_eq!(csv, "a;b\n1;2\n");
    }
}
