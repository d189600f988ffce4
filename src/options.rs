/// Knobs for the analysis pipeline. The defaults reproduce the documented
/// contract: comma-separated input and a five-row display sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Field separator. Always treated as a separator, even inside what a
    /// quoted CSV reader would consider a single field.
    pub delimiter: char,

    /// How many leading data rows to retain in `AnalysisResult::sample_rows`.
    pub sample_rows: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            sample_rows: 5,
        }
    }
}
