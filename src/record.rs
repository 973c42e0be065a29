use std::fmt;

/// Severity attached to a request log line
///
/// Variants are declared in severity order, which is also the column order
/// of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// All levels in report column order
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Position of this level in `Level::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// One request event pulled out of a log line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    /// URL path that served the request, query string stripped
    pub handler: String,
    pub level: Level,
}

impl LogRecord {
    pub fn new(handler: impl Into<String>, level: Level) -> Self {
        LogRecord {
            handler: handler.into(),
            level,
        }
    }
}
