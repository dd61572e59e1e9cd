//! CSV output formatting.

use crate::scanner::ScanSummary;
use std::io;

/// Print results in CSV format.
pub fn print_csv(summary: &ScanSummary) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    // Write header
    wtr.write_record(["port", "status", "service", "banner", "latency_ms", "error"])?;

    // Write results
    for result in &summary.results {
        wtr.write_record(&[
            result.port.to_string(),
            result.status.to_string(),
            result.service.clone().unwrap_or_default(),
            result.banner.clone().unwrap_or_default(),
            result.latency_ms.to_string(),
            result.error.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
