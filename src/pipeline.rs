// src/pipeline.rs
pub mod config;
pub mod context;
pub mod stream;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::reports::{self, Report};
use config::AnalyzerConfig;
use context::RunStats;

/// Check that every input exists before any of them is read
pub fn validate_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, AnalysisError> {
    paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            if path.exists() {
                Ok(path.to_path_buf())
            } else {
                Err(AnalysisError::FileNotFound {
                    path: path.to_path_buf(),
                })
            }
        })
        .collect()
}

/// Runs reports over a set of log files on a worker pool
///
/// Each file is read and summarised by exactly one worker. Workers share
/// nothing but the report itself; their summaries are collected in input
/// order and merged once every worker has finished.
pub struct Analyzer {
    config: AnalyzerConfig,
    pool: ThreadPool,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.jobs.unwrap_or(0))
            .thread_name(|i| format!("logtally-worker-{}", i))
            .build()?;

        Ok(Analyzer { config, pool })
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Resolve `report_name`, check the inputs and render the report
    ///
    /// The report name is resolved before the filesystem is touched, and all
    /// inputs are checked before any of them is processed.
    pub fn run<P: AsRef<Path>>(
        &self,
        report_name: &str,
        paths: &[P],
    ) -> Result<String, AnalysisError> {
        let report = reports::lookup(report_name)?;
        let files = validate_files(paths)?;
        debug!(report = report_name, files = files.len(), "starting analysis");
        report.run(self, &files)
    }

    /// Summarise every file in parallel and merge the results
    ///
    /// The first failing file aborts the whole run.
    pub fn analyze<R: Report>(
        &self,
        report: &R,
        files: &[PathBuf],
    ) -> Result<R::Summary, AnalysisError> {
        let start_time = Instant::now();
        let buffer_size = self.config.buffer_size;

        info!(
            total_files = files.len(),
            worker_threads = self.worker_count(),
            "processing log files"
        );

        let outcomes = self.pool.install(|| {
            files
                .par_iter()
                .map(|path| stream::process_file(report, path, buffer_size))
                .collect::<Result<Vec<_>, _>>()
        })?;

        let mut run_stats = RunStats::default();
        let mut partials = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            debug!(
                file = %outcome.path.display(),
                lines = outcome.stats.lines_read,
                matched = outcome.stats.records_matched,
                skipped = outcome.stats.lines_skipped(),
                elapsed_ms = outcome.stats.processing_time.as_millis() as u64,
                "file processed"
            );
            run_stats.add_file(&outcome.stats);
            partials.push(outcome.summary);
        }

        let merged = report.merge(partials);
        run_stats.processing_time = start_time.elapsed();

        info!(
            files = run_stats.files,
            lines = run_stats.lines_read,
            matched = run_stats.records_matched,
            elapsed_ms = run_stats.processing_time.as_millis() as u64,
            "analysis complete"
        );

        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;
    use crate::reports::HandlersReport;
    use std::fs;
    use tempfile::TempDir;

    fn analyzer() -> Analyzer {
        Analyzer::new(AnalyzerConfig {
            jobs: Some(2),
            ..AnalyzerConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_validate_files() {
        let dir = TempDir::new().unwrap();
        let file1 = dir.path().join("file1.log");
        let file2 = dir.path().join("file2.log");
        fs::write(&file1, "test").unwrap();
        fs::write(&file2, "test").unwrap();

        let result = validate_files(&[&file1, &file2]).unwrap();
        assert_eq!(result, vec![file1, file2]);
    }

    #[test]
    fn test_validate_files_not_found() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("present.log");
        fs::write(&present, "").unwrap();

        let err = validate_files(&[present.as_path(), Path::new("nonexistent.log")]).unwrap_err();
        assert!(matches!(err, AnalysisError::FileNotFound { ref path } if path == Path::new("nonexistent.log")));
        assert!(err.to_string().contains("nonexistent.log"));
    }

    #[test]
    fn test_worker_count() {
        assert_eq!(analyzer().worker_count(), 2);
    }

    #[test]
    fn test_analyze_merges_files() {
        let dir = TempDir::new().unwrap();
        let file1 = dir.path().join("file1.log");
        let file2 = dir.path().join("file2.log");
        fs::write(
            &file1,
            "2025-01-01 10:00:00,000 INFO django.request: GET /test 200\n",
        )
        .unwrap();
        fs::write(
            &file2,
            "2025-01-01 10:00:01,000 ERROR django.request: Internal Server Error: /test\n\
             2025-01-01 10:00:02,000 INFO django.request: GET /api 200\n\
             2025-01-01 10:00:03,000 INFO django.request: GET /api?page=2 200\n",
        )
        .unwrap();

        let merged = analyzer().analyze(&HandlersReport, &[file1, file2]).unwrap();

        assert_eq!(merged.total(), 4);
        assert_eq!(merged.count("/test", Level::Info), 1);
        assert_eq!(merged.count("/test", Level::Error), 1);
        assert_eq!(merged.count("/api", Level::Info), 2);
        assert!(merged.is_consistent());
    }

    #[test]
    fn test_analyze_zero_buffer_size() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.log");
        fs::write(&file, "2025-01-01 10:00:00,000 INFO django.request: GET /test 200\n").unwrap();

        let analyzer = Analyzer::new(AnalyzerConfig {
            jobs: Some(1),
            buffer_size: 0,
        })
        .unwrap();
        let merged = analyzer.analyze(&HandlersReport, &[file]).unwrap();
        assert_eq!(merged.total(), 1);
    }

    #[test]
    fn test_analyze_empty_file() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty.log");
        fs::write(&empty, "").unwrap();

        let merged = analyzer().analyze(&HandlersReport, &[empty]).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_analyze_fails_on_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.log");
        fs::write(&good, "2025-01-01 10:00:00,000 INFO django.request: GET /test\n").unwrap();
        let missing = dir.path().join("gone.log");

        let err = analyzer()
            .analyze(&HandlersReport, &[good, missing.clone()])
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Io { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_run_unknown_report_before_file_checks() {
        let err = analyzer()
            .run("invalid", &["nonexistent.log"])
            .unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownReport { .. }));
    }

    #[test]
    fn test_run_missing_file() {
        let err = analyzer().run("handlers", &["nonexistent.log"]).unwrap_err();
        assert!(matches!(err, AnalysisError::FileNotFound { .. }));
    }

    #[test]
    fn test_run_renders_report() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.log");
        fs::write(
            &file,
            "2025-01-01 10:00:00,000 WARNING django.request: PATCH /users/7 409\n",
        )
        .unwrap();

        let output = analyzer().run("handlers", &[file]).unwrap();
        assert!(output.starts_with("Total requests: 1\n"));
        assert!(output.contains("/users/7                 \t0\t0\t1\t0\t0\n"));
    }
}
