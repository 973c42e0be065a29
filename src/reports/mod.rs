//! Report kinds and the registry that resolves them by name
//!
//! A report bundles the four steps of a run: parsing a line into a record,
//! summarising one file's records, merging per-file summaries and rendering
//! the merged summary. The orchestrator in [`crate::pipeline`] is generic over
//! [`Report`], so adding a report only means implementing the trait and
//! listing it in the registry below.

pub mod handlers;

use std::path::PathBuf;

use crate::error::AnalysisError;
use crate::pipeline::Analyzer;

pub use handlers::HandlersReport;

/// Main trait for report kinds
pub trait Report: Send + Sync {
    /// What one matching line turns into
    type Record: Send;
    /// Per-file partial result, also the shape of the merged result
    type Summary: Send;

    /// Parse one raw line, `None` when the line is not relevant to this report
    fn parse_line(&self, line: &str) -> Option<Self::Record>;

    /// Fold the records of a single file
    fn summarize<I>(&self, records: I) -> Self::Summary
    where
        I: IntoIterator<Item = Self::Record>;

    /// Combine per-file summaries, must not depend on their order
    fn merge(&self, partials: Vec<Self::Summary>) -> Self::Summary;

    fn render(&self, summary: &Self::Summary) -> String;
}

/// Type-erased entry point used by the registry
pub trait ReportRunner: Send + Sync {
    fn run(&self, analyzer: &Analyzer, files: &[PathBuf]) -> Result<String, AnalysisError>;
}

impl<R: Report> ReportRunner for R {
    fn run(&self, analyzer: &Analyzer, files: &[PathBuf]) -> Result<String, AnalysisError> {
        let summary = analyzer.analyze(self, files)?;
        Ok(self.render(&summary))
    }
}

pub const HANDLERS: &str = "handlers";

static REPORTS: &[(&str, &dyn ReportRunner)] = &[(HANDLERS, &HandlersReport)];

/// Resolve a report by name
pub fn lookup(name: &str) -> Result<&'static dyn ReportRunner, AnalysisError> {
    REPORTS
        .iter()
        .find(|(report_name, _)| *report_name == name)
        .map(|(_, report)| *report)
        .ok_or_else(|| AnalysisError::UnknownReport {
            name: name.to_string(),
            available: available_reports(),
        })
}

/// Names of all registered reports
pub fn available_reports() -> Vec<&'static str> {
    REPORTS.iter().map(|(name, _)| *name).collect()
}
