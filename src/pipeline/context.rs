use std::path::PathBuf;
use std::time::Duration;

/// Counters for one processed file
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileStats {
    pub lines_read: usize,
    pub records_matched: usize,
    pub processing_time: Duration,
}

impl FileStats {
    /// Lines that did not produce a record
    pub fn lines_skipped(&self) -> usize {
        self.lines_read - self.records_matched
    }
}

/// What a worker hands back for its file
#[derive(Debug)]
pub struct FileOutcome<S> {
    pub path: PathBuf,
    pub summary: S,
    pub stats: FileStats,
}

/// Totals across every file of a run
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub files: usize,
    pub lines_read: usize,
    pub records_matched: usize,
    pub processing_time: Duration,
}

impl RunStats {
    pub fn add_file(&mut self, stats: &FileStats) {
        self.files += 1;
        self.lines_read += stats.lines_read;
        self.records_matched += stats.records_matched;
    }
}
