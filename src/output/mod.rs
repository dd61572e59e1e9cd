//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of scan results.
//! Renderers consume the summary read-only; hiding closed ports in plain
//! output is a display choice and never changes the summary itself.

mod csv_format;
mod json_format;
mod plain;

pub use plain::print_scan_header;

use crate::cli::OutputFormat;
use crate::scanner::ScanSummary;
use std::io;

/// Format and print scan results according to the specified format.
pub fn print_results(
    summary: &ScanSummary,
    format: OutputFormat,
    show_closed: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_plain(summary, show_closed),
        OutputFormat::Json => json_format::print_json(summary),
        OutputFormat::Csv => csv_format::print_csv(summary),
    }
}
