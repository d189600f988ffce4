use crate::insight::InsightFormatter;
use crate::model::{AnalysisResult, Table};

/// Owns the presentation layer's state for one loaded dataset: the current
/// table, its analysis, and an interaction counter. Replaced the ambient
/// globals of the original UI; the core functions stay pure.
#[derive(Debug, Default)]
pub struct Session {
    table: Option<Table>,
    analysis: Option<AnalysisResult>,
    interactions: usize,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current dataset. The previous table and analysis are
    /// discarded and the interaction counter restarts.
    pub fn load(&mut self, table: Table, analysis: AnalysisResult) {
        self.table = Some(table);
        self.analysis = Some(analysis);
        self.interactions = 0;
    }

    /// Drop everything, back to the freshly-created state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub fn interactions(&self) -> usize {
        self.interactions
    }

    /// Route a question through a formatter. `None` until a dataset is
    /// loaded; each answered question bumps the interaction counter.
    pub fn ask(&mut self, formatter: &dyn InsightFormatter, question: &str) -> Option<String> {
        let (table, analysis) = (self.table.as_ref()?, self.analysis.as_ref()?);
        self.interactions += 1;
        Some(formatter.answer(question, table, analysis))
    }
}
