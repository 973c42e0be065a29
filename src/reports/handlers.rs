use crate::aggregate::HandlerCounts;
use crate::extraction;
use crate::formatters::TableFormatter;
use crate::record::LogRecord;
use crate::reports::Report;

/// Request counts per handler path and log level
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlersReport;

impl Report for HandlersReport {
    type Record = LogRecord;
    type Summary = HandlerCounts;

    fn parse_line(&self, line: &str) -> Option<LogRecord> {
        extraction::extract(line)
    }

    fn summarize<I>(&self, records: I) -> HandlerCounts
    where
        I: IntoIterator<Item = LogRecord>,
    {
        HandlerCounts::from_records(records)
    }

    fn merge(&self, partials: Vec<HandlerCounts>) -> HandlerCounts {
        HandlerCounts::merge(partials)
    }

    fn render(&self, summary: &HandlerCounts) -> String {
        TableFormatter::new().format(summary)
    }
}
