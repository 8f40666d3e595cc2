//! High-level log processing API.
//!
//! This module provides the entry point callers use to turn a set of log
//! files into a rendered report: validate the report kind and the paths,
//! parse each file into records, aggregate per-file partial reports, merge
//! them, and format the result.

use std::path::Path;

use log::debug;

use crate::error::LogReportError;
use crate::parser::parse_file;
use crate::report::{self, HandlersReport, ReportKind};
use crate::Result;

/// Validate that every path exists as a regular file.
///
/// Fails on the first offender, in input order, before any parsing begins.
fn validate_paths<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LogReportError::FileNotFound(path.to_path_buf()));
        }
    }
    Ok(())
}

/// Parse and aggregate all files into one merged report.
///
/// Files are drained sequentially, one partial report per file; any read
/// failure aborts the whole run.
pub fn collect_report<P: AsRef<Path>>(paths: &[P]) -> Result<HandlersReport> {
    validate_paths(paths)?;

    let mut partials = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let mut partial = HandlersReport::new();
        for record in parse_file(path)? {
            partial.record(&record?);
        }
        debug!("{}: {} request records", path.display(), partial.total);
        partials.push(partial);
    }

    Ok(report::merge(partials))
}

/// Process log files and return the rendered report.
///
/// The report kind is validated before any file I/O; then all paths are
/// checked, parsed, aggregated, merged and formatted. Either the full
/// pipeline succeeds and one report string is produced, or it fails and no
/// report is produced.
///
/// # Example
///
/// ```rust,ignore
/// use logreportlib::process_files;
///
/// let report = process_files(&["app1.log", "app2.log"], "handlers")?;
/// println!("{report}");
/// ```
pub fn process_files<P: AsRef<Path>>(paths: &[P], report_kind: &str) -> Result<String> {
    let kind: ReportKind = report_kind.parse()?;
    let merged = collect_report(paths)?;

    Ok(match kind {
        ReportKind::Handlers => report::format_handlers_report(&merged),
    })
}
