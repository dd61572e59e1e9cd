//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::scanner::{PortStatus, ScanSummary};
use console::{style, Style};
use std::io::{self, Write};

/// Print results in human-readable plain text format.
///
/// Closed ports are hidden unless `show_closed` is set; the statistics line
/// always reflects the full summary.
pub fn print_plain(summary: &ScanSummary, show_closed: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Header
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    )?;
    writeln!(
        out,
        "                    {} Scan Results",
        style("Sounder").cyan().bold()
    )?;
    writeln!(
        out,
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    )?;
    writeln!(out)?;

    // Scan info
    writeln!(out, "  {} {}", style("Target:").bold(), summary.target)?;
    writeln!(
        out,
        "  {} {}",
        style("IP Address:").bold(),
        summary.ip_address
    )?;
    writeln!(out)?;

    // Statistics
    writeln!(
        out,
        "  {} {} ports scanned in {:.2}s",
        style("Statistics:").bold(),
        summary.total_ports,
        summary.duration_ms as f64 / 1000.0
    )?;
    writeln!(
        out,
        "               {} open, {} closed, {} filtered",
        style(summary.open_ports).green().bold(),
        style(summary.closed_ports).red(),
        style(summary.filtered_ports).yellow()
    )?;
    writeln!(out)?;

    // Port table
    let rows: Vec<_> = summary
        .results
        .iter()
        .filter(|r| show_closed || r.status != PortStatus::Closed)
        .collect();

    if rows.is_empty() {
        writeln!(out, "  {}", style("No ports to display.").dim())?;
    } else {
        writeln!(
            out,
            "  {}",
            style("───────────────────────────────────────────────────────────────").dim()
        )?;
        writeln!(
            out,
            "  {:>6}  {:^10}  {:<15}  {}",
            style("PORT").bold(),
            style("STATE").bold(),
            style("SERVICE").bold(),
            style("BANNER").bold()
        )?;
        writeln!(
            out,
            "  {}",
            style("───────────────────────────────────────────────────────────────").dim()
        )?;

        for result in rows {
            let status_style = match result.status {
                PortStatus::Open => Style::new().green().bold(),
                PortStatus::Closed => Style::new().red(),
                PortStatus::Filtered => Style::new().yellow(),
            };

            let banner_display = result
                .banner
                .as_ref()
                .map(|b| truncate_string(b, 35))
                .unwrap_or_default();

            writeln!(
                out,
                "  {:>6}  {:^10}  {:<15}  {}",
                result.port,
                status_style.apply_to(result.status.to_string()),
                result.service.as_deref().unwrap_or("unknown"),
                style(banner_display).dim()
            )?;
        }

        writeln!(
            out,
            "  {}",
            style("───────────────────────────────────────────────────────────────").dim()
        )?;
    }

    writeln!(out)?;
    Ok(())
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(target: &str, ip: &str, ports: usize) {
    println!();
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("Sounder").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Target: {} ({})",
        style("•").dim(),
        style(target).white().bold(),
        ip
    );
    println!(
        "{} Scanning {} ports...",
        style("•").dim(),
        style(ports).white().bold()
    );
    println!();
}

/// Truncate a string to a maximum number of characters, adding an ellipsis
/// if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        let s = "héllo wörld, ünïcode bânner";
        let t = truncate_string(s, 10);
        assert!(t.ends_with("..."));
        assert_eq!(t.chars().count(), 10);
    }
}
