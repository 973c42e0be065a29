use std::collections::BTreeMap;

use crate::record::{Level, LogRecord};

/// Per-level counters for a single handler
pub type LevelCounts = BTreeMap<Level, u64>;

/// Request counts keyed by handler path, then by level
///
/// Built per file by [`HandlerCounts::from_records`] and combined across
/// files by [`HandlerCounts::merge`]. Handlers are kept sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerCounts {
    handlers: BTreeMap<String, LevelCounts>,
    total: u64,
}

impl HandlerCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble counts from already tallied parts. The stored `total` is
    /// taken as given and is not checked against the per-handler counts.
    pub fn from_parts(handlers: BTreeMap<String, LevelCounts>, total: u64) -> Self {
        HandlerCounts { handlers, total }
    }

    /// Fold a sequence of records from one file
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LogRecord>,
    {
        let mut counts = HandlerCounts::new();
        for record in records {
            counts.record(record);
        }
        counts
    }

    /// Count one record
    pub fn record(&mut self, record: LogRecord) {
        *self
            .handlers
            .entry(record.handler)
            .or_default()
            .entry(record.level)
            .or_insert(0) += 1;
        self.total += 1;
    }

    /// Combine partial counts into one. Totals are summed from each partial's
    /// stored total rather than recomputed from the handler counts.
    pub fn merge<I>(partials: I) -> Self
    where
        I: IntoIterator<Item = HandlerCounts>,
    {
        let mut merged = HandlerCounts::new();
        for partial in partials {
            merged.absorb(partial);
        }
        merged
    }

    /// Add another set of counts into this one
    pub fn absorb(&mut self, other: HandlerCounts) {
        for (handler, levels) in other.handlers {
            let target = self.handlers.entry(handler).or_default();
            for (level, count) in levels {
                *target.entry(level).or_insert(0) += count;
            }
        }
        self.total += other.total;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.total == 0
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handlers with their level counters, sorted by path
    pub fn handlers(&self) -> impl Iterator<Item = (&str, &LevelCounts)> {
        self.handlers.iter().map(|(h, levels)| (h.as_str(), levels))
    }

    pub fn levels_for(&self, handler: &str) -> Option<&LevelCounts> {
        self.handlers.get(handler)
    }

    /// Count for one handler and level, zero when never seen
    pub fn count(&self, handler: &str, level: Level) -> u64 {
        self.handlers
            .get(handler)
            .and_then(|levels| levels.get(&level))
            .copied()
            .unwrap_or(0)
    }

    /// Column sums across all handlers, in `Level::ALL` order
    pub fn level_totals(&self) -> [u64; 5] {
        let mut totals = [0u64; 5];
        for levels in self.handlers.values() {
            for (level, count) in levels {
                totals[level.index()] += count;
            }
        }
        totals
    }

    /// Sum of every handler/level counter
    pub fn counted_total(&self) -> u64 {
        self.level_totals().iter().sum()
    }

    /// Whether the stored total agrees with the per-handler counts
    pub fn is_consistent(&self) -> bool {
        self.total == self.counted_total()
    }
}
