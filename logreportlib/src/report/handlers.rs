//! Per-handler severity report: aggregation, merging, formatting.
//!
//! Reduces a stream of [`LogRecord`]s into per-handler, per-severity
//! counts and renders them as an aligned text table. Merging is a
//! pointwise sum, so partial reports from separate files can be combined
//! in any order.

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::parser::LogRecord;

/// Severity columns of the rendered table, in display order.
///
/// These five always render, even when absent from the data; severities
/// outside this list are counted in the total but never get a column.
pub const LOG_LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

/// Header of the handler column.
const HANDLER_HEADER: &str = "HANDLER";

/// Gap between table columns.
const COLUMN_GAP: &str = "  ";

/// Aggregated per-handler severity counts.
///
/// Invariant: `total` equals the sum of all leaf counts in `handlers`.
/// The map is keyed by handler path, so rows come out in lexicographic
/// order for free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HandlersReport {
    /// handler path -> severity -> count
    pub handlers: BTreeMap<String, BTreeMap<String, u64>>,
    /// Total counted records across all handlers and severities
    pub total: u64,
}

impl HandlersReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record.
    ///
    /// Records without a handler endpoint, or with an empty severity, do
    /// not contribute.
    pub fn record(&mut self, record: &LogRecord) {
        let Some(handler) = record.endpoint.as_deref() else {
            return;
        };
        if record.severity.is_empty() {
            return;
        }

        *self
            .handlers
            .entry(handler.to_string())
            .or_default()
            .entry(record.severity.clone())
            .or_insert(0) += 1;
        self.total += 1;
    }

    /// True when no record has been counted.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Count for one handler/severity pair (0 when absent).
    pub fn count(&self, handler: &str, severity: &str) -> u64 {
        self.handlers
            .get(handler)
            .and_then(|levels| levels.get(severity))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of one severity across all handlers.
    pub fn severity_total(&self, severity: &str) -> u64 {
        self.handlers
            .values()
            .filter_map(|levels| levels.get(severity))
            .sum()
    }
}

impl Add for HandlersReport {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl AddAssign for HandlersReport {
    fn add_assign(&mut self, other: Self) {
        for (handler, levels) in other.handlers {
            let entry = self.handlers.entry(handler).or_default();
            for (severity, count) in levels {
                *entry.entry(severity).or_insert(0) += count;
            }
        }
        self.total += other.total;
    }
}

/// Reduce a sequence of records into a report.
///
/// Only records carrying a handler endpoint are counted; the result does
/// not depend on record order.
pub fn aggregate(records: impl IntoIterator<Item = LogRecord>) -> HandlersReport {
    let mut report = HandlersReport::new();
    for record in records {
        report.record(&record);
    }
    report
}

/// Pointwise sum of many reports.
///
/// Commutative and associative; merging zero reports yields the empty
/// report.
pub fn merge(reports: impl IntoIterator<Item = HandlersReport>) -> HandlersReport {
    let mut merged = HandlersReport::new();
    for report in reports {
        merged += report;
    }
    merged
}

/// Render the report as an aligned text table.
///
/// Layout: a `Total requests: N` line, a blank line, the header row, one
/// row per handler in ascending lexicographic order, and a totals row with
/// an empty handler cell. Every cell is left-justified and padded to its
/// column width; columns are separated by two spaces. Each column is as
/// wide as the longest value rendered into it, the totals row included.
pub fn format_handlers_report(report: &HandlersReport) -> String {
    if report.is_empty() {
        return "No data to display\n".to_string();
    }

    let severity_totals: Vec<u64> = LOG_LEVELS
        .iter()
        .map(|level| report.severity_total(level))
        .collect();

    let handler_width = report
        .handlers
        .keys()
        .map(String::len)
        .chain([HANDLER_HEADER.len()])
        .max()
        .unwrap_or(HANDLER_HEADER.len());

    let level_widths: Vec<usize> = LOG_LEVELS
        .iter()
        .zip(&severity_totals)
        .map(|(level, total)| {
            report
                .handlers
                .keys()
                .map(|handler| report.count(handler, level).to_string().len())
                .chain([level.len(), total.to_string().len()])
                .max()
                .unwrap_or(level.len())
        })
        .collect();

    let mut lines = Vec::with_capacity(report.handlers.len() + 3);
    lines.push(format!("Total requests: {}\n", report.total));
    lines.push(format_row(
        HANDLER_HEADER,
        LOG_LEVELS.iter().map(|level| level.to_string()),
        handler_width,
        &level_widths,
    ));
    for handler in report.handlers.keys() {
        lines.push(format_row(
            handler,
            LOG_LEVELS
                .iter()
                .map(|level| report.count(handler, level).to_string()),
            handler_width,
            &level_widths,
        ));
    }
    lines.push(format_row(
        "",
        severity_totals.iter().map(|total| total.to_string()),
        handler_width,
        &level_widths,
    ));

    lines.join("\n")
}

/// Format one table row: a padded handler cell followed by padded severity
/// cells.
fn format_row(
    handler: &str,
    cells: impl IntoIterator<Item = String>,
    handler_width: usize,
    level_widths: &[usize],
) -> String {
    let mut row = format!("{:<width$}", handler, width = handler_width);
    for (cell, width) in cells.into_iter().zip(level_widths) {
        row.push_str(COLUMN_GAP);
        row.push_str(&format!("{:<width$}", cell, width = width));
    }
    row
}
