//! Line-oriented parser for Django application logs.
//!
//! Each log line has the shape
//! `<timestamp> <severity> <dotted.logger.name>: <message>`, e.g.
//!
//! ```text
//! 2025-04-29 10:00:00,000 INFO django.request: GET /home 200 OK
//! ```
//!
//! Lines from the `django.request` logger additionally carry request
//! details (`METHOD /path STATUS ...`) in the message; the request path is
//! extracted as the record's handler endpoint. Lines that do not match the
//! log shape are skipped, never an error.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::LogReportError;
use crate::Result;

/// The only logger whose messages carry request details.
const REQUEST_LOGGER: &str = "django.request";

fn log_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3})\s+(?P<level>\w+)\s+(?P<logger>\w+(?:\.\w+)*):\s+(?P<message>.*)$",
        )
        .unwrap()
    })
}

fn request_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<method>\w+)\s+(?P<handler>/[^\s]+)\s+(?P<status>\d+)\s+.+$").unwrap()
    })
}

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Timestamp text (`YYYY-MM-DD HH:MM:SS,mmm`), kept verbatim
    pub timestamp: String,
    /// Severity word (INFO, ERROR, ...)
    pub severity: String,
    /// Raw message remainder of the line
    pub message: String,
    /// Request path, present only for `django.request` lines whose message
    /// carries request details
    pub endpoint: Option<String>,
}

/// Parse a single log line into a record.
///
/// Returns `None` when the line does not match the expected shape. The
/// message field always keeps the full original message text, whether or
/// not request details were extracted from it.
pub fn parse_line(raw: &str) -> Option<LogRecord> {
    let caps = log_pattern().captures(raw.trim())?;

    let logger = &caps["logger"];
    let message = &caps["message"];

    let endpoint = if logger == REQUEST_LOGGER {
        request_pattern()
            .captures(message)
            .map(|req| req["handler"].to_string())
    } else {
        None
    };

    Some(LogRecord {
        timestamp: caps["timestamp"].to_string(),
        severity: caps["level"].to_string(),
        message: message.to_string(),
        endpoint,
    })
}

/// Lazy record stream over one log file.
///
/// Yields parsed records in file order, skipping lines that do not parse.
/// Single pass: once drained it cannot be restarted. Read failures
/// mid-stream surface as `Err` items.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl LogFile {
    /// Open a log file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| LogReportError::FileRead {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
        })
    }

    /// Path this stream was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for LogFile {
    type Item = Result<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if let Some(record) = parse_line(&line) {
                        return Some(Ok(record));
                    }
                }
                Err(source) => {
                    return Some(Err(LogReportError::FileRead {
                        path: self.path.clone(),
                        source,
                    }))
                }
            }
        }
    }
}

/// Open `path` and lazily parse it into log records.
pub fn parse_file(path: impl AsRef<Path>) -> Result<LogFile> {
    LogFile::open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_request_line() {
        let record =
            parse_line("2025-04-29 10:00:00,000 INFO django.request: GET /home 200 OK").unwrap();

        assert_eq!(record.timestamp, "2025-04-29 10:00:00,000");
        assert_eq!(record.severity, "INFO");
        assert_eq!(record.message, "GET /home 200 OK");
        assert_eq!(record.endpoint.as_deref(), Some("/home"));
    }

    #[test]
    fn test_parse_non_request_logger() {
        let record = parse_line(
            "2025-04-29 10:00:01,123 ERROR django.db.backends: Database connection lost",
        )
        .unwrap();

        assert_eq!(record.severity, "ERROR");
        assert_eq!(record.message, "Database connection lost");
        assert_eq!(record.endpoint, None);
    }

    #[test]
    fn test_non_request_logger_never_gets_endpoint() {
        // the message alone would match the request sub-pattern
        let record =
            parse_line("2025-04-29 10:00:02,000 INFO django.security: GET /admin/ 200 OK").unwrap();

        assert_eq!(record.endpoint, None);
    }

    #[test]
    fn test_request_line_without_request_details() {
        let record = parse_line(
            "2025-04-29 10:00:03,000 ERROR django.request: Internal Server Error: /admin/login/",
        )
        .unwrap();

        // still a valid record, just not tied to a handler
        assert_eq!(record.severity, "ERROR");
        assert_eq!(record.endpoint, None);
        assert_eq!(record.message, "Internal Server Error: /admin/login/");
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(parse_line("").is_none());
        assert!(parse_line("not a log line").is_none());
        assert!(parse_line("2025-04-29 INFO django.request: missing time").is_none());
        // timestamp must carry milliseconds
        assert!(parse_line("2025-04-29 10:00:00 INFO django.request: GET /home 200 OK").is_none());
    }

    #[test]
    fn test_parse_line_trims_whitespace() {
        let record =
            parse_line("  2025-04-29 10:00:00,000 DEBUG app.views: rendering template  \n")
                .unwrap();

        assert_eq!(record.severity, "DEBUG");
        assert_eq!(record.message, "rendering template");
    }

    #[test]
    fn test_parse_file_preserves_order_and_skips_junk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(
            &path,
            "2025-04-29 10:00:00,000 INFO django.request: GET /a 200 OK\n\
             garbage line\n\
             2025-04-29 10:00:01,000 ERROR django.request: GET /b 500 Error\n",
        )
        .unwrap();

        let records: Vec<LogRecord> = parse_file(&path)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].endpoint.as_deref(), Some("/a"));
        assert_eq!(records[1].endpoint.as_deref(), Some("/b"));
    }

    #[test]
    fn test_parse_file_missing_path() {
        let err = parse_file("/nonexistent/app.log").unwrap_err();
        assert!(matches!(err, LogReportError::FileRead { .. }));
    }
}
