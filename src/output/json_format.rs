//! JSON output formatting.

use crate::scanner::ScanSummary;
use std::io;

/// Print results in JSON format.
pub fn print_json(summary: &ScanSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
