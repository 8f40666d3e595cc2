//! # logreportlib
//!
//! A library for analyzing Django application logs. It parses structured
//! log lines, extracts per-request records, and aggregates them into
//! tabular reports counting severity levels per request-handling endpoint.
//!
//! ## Overview
//!
//! Log lines have the shape `<timestamp> <severity> <logger>: <message>`;
//! lines from the `django.request` logger carry `METHOD /path STATUS ...`
//! request details in the message, and the request path becomes the
//! record's handler. The `handlers` report counts records per handler and
//! severity, merges counts from any number of files, and renders a
//! fixed-column aligned text table.
//!
//! - **Parsing**: [`parse_line`] for single lines, [`parse_file`] for lazy
//!   per-file record streams
//! - **Aggregation**: [`aggregate`] reduces records to a [`HandlersReport`];
//!   [`merge`] sums reports pointwise
//! - **Formatting**: [`format_handlers_report`] renders the table
//! - **Pipeline**: [`process_files`] runs the whole thing for a list of
//!   paths and a report kind
//!
//! ## Example
//!
//! ```rust
//! use logreportlib::process_files;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("app.log");
//! fs::write(
//!     &path,
//!     "2025-04-29 10:00:00,000 INFO django.request: GET /home 200 OK\n",
//! )
//! .unwrap();
//!
//! let report = process_files(&[&path], "handlers").unwrap();
//! assert!(report.starts_with("Total requests: 1"));
//! assert!(report.contains("/home"));
//! ```

pub mod error;
pub mod parser;
pub mod process;
pub mod report;

pub use error::LogReportError;
pub use parser::{parse_file, parse_line, LogFile, LogRecord};
pub use process::{collect_report, process_files};
pub use report::{aggregate, format_handlers_report, merge, HandlersReport, ReportKind};

/// Result type for logreportlib operations
pub type Result<T> = std::result::Result<T, LogReportError>;
