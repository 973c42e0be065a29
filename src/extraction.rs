use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{Level, LogRecord};

/// Marker that identifies lines written by the request logging subsystem
pub const REQUEST_LOGGER: &str = "django.request:";

/// Request line layout:
/// `<date> <time>,<millis> <level> django.request: <method> <path>`
///
/// The path capture stops at the first whitespace or `?`, which drops query
/// strings and whatever the server appended after the path.
static REQUEST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3} ",
        r"(?P<level>\w+) ",
        r"django\.request: ",
        r"(?:GET|POST|PUT|DELETE|PATCH|Internal Server Error:) ",
        r"(?P<handler>/[^\s?]+)",
    ))
    .expect("request line pattern is valid")
});

/// Extract a request record from a single log line
///
/// Returns `None` for anything that is not a well-formed request line:
/// missing marker, unexpected layout, or a level outside the five known
/// severities. Malformed input is never an error.
pub fn extract(line: &str) -> Option<LogRecord> {
    // Cheap substring test first, most lines in a Django log are not requests
    if !line.contains(REQUEST_LOGGER) {
        return None;
    }

    let captures = REQUEST_LINE.captures(line.trim())?;
    let level: Level = captures.name("level")?.as_str().parse().ok()?;
    let handler = captures.name("handler")?.as_str();

    Some(LogRecord::new(handler, level))
}
