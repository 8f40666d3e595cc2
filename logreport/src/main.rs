//! # logreport
//!
//! A CLI tool for analyzing Django application logs.
//!
//! ## Overview
//!
//! logreport is built on top of logreportlib and provides a command-line
//! interface for turning one or more log files into a per-handler severity
//! report.
//!
//! ## Usage
//!
//! ```bash
//! # Report handler severity counts for one file
//! logreport app.log --report handlers
//!
//! # Merge counts across several files
//! logreport app1.log app2.log app3.log --report handlers
//!
//! # Emit the merged report data as JSON
//! logreport app.log --report handlers --output json
//! ```
//!
//! On success the report is printed to stdout and the process exits 0. On
//! any failure a single `Error: <message>` line is printed to stdout and
//! the process exits 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use logreportlib::{collect_report, process_files, ReportKind};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("logreport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analyze Django application logs")
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .action(ArgAction::Append)
                .required(true)
                .help("Log files to analyze"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_name("KIND")
                .required(true)
                .help(format!(
                    "Report type to generate (valid: {})",
                    ReportKind::NAMES.join(", ")
                )),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Run the selected report and return its rendered output.
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let files: Vec<PathBuf> = matches
        .get_many::<String>("files")
        .map(|v| v.map(PathBuf::from).collect())
        .unwrap_or_default();
    let report_kind = matches
        .get_one::<String>("report")
        .map(String::as_str)
        .unwrap_or_default();
    let as_json = matches.get_one::<String>("output").map(String::as_str) == Some("json");

    if as_json {
        // validate the kind up front, same as the table path
        let kind: ReportKind = report_kind.parse()?;
        let merged = collect_report(&files)?;
        let rendered = match kind {
            ReportKind::Handlers => serde_json::to_string_pretty(&merged)?,
        };
        Ok(rendered)
    } else {
        Ok(process_files(&files, report_kind)?)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // errors go to stdout, mirroring the report itself
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
