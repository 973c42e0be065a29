use std::fmt::Write as _;
use std::io::{self, Write};

use crate::aggregate::HandlerCounts;
use crate::record::Level;

/// Width the handler column is padded to. Longer paths are not truncated.
pub const HANDLER_COLUMN_WIDTH: usize = 25;

/// Tab-separated table of request counts per handler and level
///
/// ```text
/// Total requests: 3
///
/// HANDLER                  	DEBUG	INFO	WARNING	ERROR	CRITICAL
/// /api                     	0	2	0	1	0
///                          	0	2	0	1	0
/// ```
#[derive(Debug, Clone)]
pub struct TableFormatter {
    label_width: usize,
}

impl Default for TableFormatter {
    fn default() -> Self {
        TableFormatter {
            label_width: HANDLER_COLUMN_WIDTH,
        }
    }
}

impl TableFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self, counts: &HandlerCounts) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Total requests: {}", counts.total());
        out.push('\n');

        out.push_str(&self.label("HANDLER"));
        for level in Level::ALL {
            let _ = write!(out, "\t{}", level);
        }
        out.push('\n');

        for (handler, levels) in counts.handlers() {
            out.push_str(&self.label(handler));
            for level in Level::ALL {
                let count = levels.get(&level).copied().unwrap_or(0);
                let _ = write!(out, "\t{}", count);
            }
            out.push('\n');
        }

        out.push_str(&self.label(""));
        for total in counts.level_totals() {
            let _ = write!(out, "\t{}", total);
        }
        out.push('\n');

        out
    }

    pub fn write<W: Write>(&self, output: &mut W, counts: &HandlerCounts) -> io::Result<()> {
        output.write_all(self.format(counts).as_bytes())
    }

    fn label(&self, text: &str) -> String {
        format!("{:<width$}", text, width = self.label_width)
    }
}
