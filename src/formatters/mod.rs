//! Text renderings of report summaries

pub mod table;

pub use table::{TableFormatter, HANDLER_COLUMN_WIDTH};
