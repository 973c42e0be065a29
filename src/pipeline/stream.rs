use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::AnalysisError;
use crate::pipeline::context::{FileOutcome, FileStats};
use crate::reports::Report;

/// Lines of a text stream, split on `\n`, `\r\n` and bare `\r`
///
/// Terminators are not part of the yielded lines. Invalid UTF-8 is reported
/// as an `InvalidData` error.
pub struct TextLines<B> {
    input: B,
    buf: Vec<u8>,
    pending: VecDeque<String>,
}

impl<B: BufRead> TextLines<B> {
    pub fn new(input: B) -> Self {
        TextLines {
            input,
            buf: Vec::new(),
            pending: VecDeque::new(),
        }
    }
}

impl<B: BufRead> Iterator for TextLines<B> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            self.buf.clear();
            match self.input.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }

            let mut chunk = self.buf.as_slice();
            if let Some(rest) = chunk.strip_suffix(b"\n") {
                chunk = rest;
            }
            // One trailing CR belongs to the terminator, either `\r\n` or a
            // final bare `\r`
            if let Some(rest) = chunk.strip_suffix(b"\r") {
                chunk = rest;
            }

            let text = match std::str::from_utf8(chunk) {
                Ok(text) => text,
                Err(e) => return Some(Err(io::Error::new(io::ErrorKind::InvalidData, e))),
            };
            self.pending.extend(text.split('\r').map(str::to_string));
        }
    }
}

/// Parse a stream line by line and summarise the records it yields
///
/// Lines the report does not recognise are skipped. Read errors, including
/// invalid UTF-8, are returned as-is.
pub fn process_stream<R, B>(report: &R, input: B) -> io::Result<(R::Summary, FileStats)>
where
    R: Report,
    B: BufRead,
{
    let start_time = Instant::now();
    let mut stats = FileStats::default();
    let mut records = Vec::new();

    for line_result in TextLines::new(input) {
        let line = line_result?;
        stats.lines_read += 1;

        if let Some(record) = report.parse_line(&line) {
            records.push(record);
        }
    }

    stats.records_matched = records.len();
    let summary = report.summarize(records);
    stats.processing_time = start_time.elapsed();

    Ok((summary, stats))
}

/// Open one log file and summarise it
///
/// A `buffer_size` of zero is treated as one byte.
pub fn process_file<R: Report>(
    report: &R,
    path: &Path,
    buffer_size: usize,
) -> Result<FileOutcome<R::Summary>, AnalysisError> {
    let file = File::open(path).map_err(|e| AnalysisError::io(path, e))?;
    let reader = BufReader::with_capacity(buffer_size.max(1), file);

    let (summary, stats) = process_stream(report, reader).map_err(|e| AnalysisError::io(path, e))?;

    Ok(FileOutcome {
        path: path.to_path_buf(),
        summary,
        stats,
    })
}
