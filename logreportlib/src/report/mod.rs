//! Report kinds and their selection.
//!
//! Each kind of report bundles three operations: aggregate log records into
//! report data, merge data from several sources, and format the merged data
//! as text. Kinds are selected by name; `handlers` is the only kind today.
//! Adding a kind means adding an enum variant, its module, and a match arm
//! in [`crate::process::process_files`].

pub mod handlers;

use std::str::FromStr;

use crate::error::LogReportError;

pub use handlers::{aggregate, format_handlers_report, merge, HandlersReport, LOG_LEVELS};

/// Available report kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Per-handler severity counts
    Handlers,
}

impl ReportKind {
    /// All valid kind names, for CLI help and error messages.
    pub const NAMES: [&'static str; 1] = ["handlers"];
}

impl FromStr for ReportKind {
    type Err = LogReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "handlers" => Ok(ReportKind::Handlers),
            _ => Err(LogReportError::UnknownReport(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_from_str() {
        assert_eq!("handlers".parse::<ReportKind>().unwrap(), ReportKind::Handlers);
    }

    #[test]
    fn test_report_kind_unknown() {
        let err = "slowest".parse::<ReportKind>().unwrap_err();
        assert!(matches!(err, LogReportError::UnknownReport(name) if name == "slowest"));
    }

    #[test]
    fn test_unknown_kind_message_names_valid_values() {
        let err = "bogus".parse::<ReportKind>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bogus"));
        assert!(message.contains("handlers"));
    }
}
