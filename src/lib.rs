// src/lib.rs
pub mod aggregate;
pub mod error;
pub mod extraction;
pub mod formatters;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod reports;

pub use error::*;

pub use aggregate::{HandlerCounts, LevelCounts};
pub use extraction::extract;
pub use formatters::TableFormatter;
pub use pipeline::config::AnalyzerConfig;
pub use pipeline::context::{FileOutcome, FileStats, RunStats};
pub use pipeline::{validate_files, Analyzer};
pub use record::{Level, LogRecord};
pub use reports::{available_reports, lookup, HandlersReport, Report, ReportRunner};
