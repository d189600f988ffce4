#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    DuplicateHeaderRenamed,
    ShortRowPadded,
    LongRowTruncated,
    NoDataRows,
}

/// Advisory issue noticed while parsing. Warnings never change the parse
/// outcome; malformed lines still produce best-effort rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub code: WarningCode,
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<String>,
}

impl ParseWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// 1-based line number in the raw input.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}
