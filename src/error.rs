use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}
