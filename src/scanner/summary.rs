//! Result aggregation.
//!
//! Consolidates the unordered per-port outcomes produced by concurrent
//! workers into a deterministic, read-only summary.

use crate::scanner::traits::{PortStatus, ProbeOutcome};
use serde::Serialize;
use std::time::Duration;

/// Complete scan results.
///
/// `results` is sorted ascending by port, restoring the determinism lost to
/// unordered concurrent completion. `total_ports` always equals
/// `results.len()` and the sum of the three status counts.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub target: String,
    pub ip_address: String,
    pub total_ports: usize,
    pub open_ports: usize,
    pub closed_ports: usize,
    pub filtered_ports: usize,
    pub duration_ms: u64,
    pub results: Vec<ProbeOutcome>,
}

impl ScanSummary {
    /// Consolidate unordered outcomes into a summary.
    ///
    /// Ports are unique per scan, so sorting by port needs no tie-break.
    pub fn aggregate(
        target: impl Into<String>,
        ip_address: impl Into<String>,
        duration: Duration,
        mut outcomes: Vec<ProbeOutcome>,
    ) -> Self {
        outcomes.sort_unstable_by_key(|o| o.port);

        let count = |status: PortStatus| outcomes.iter().filter(|o| o.status == status).count();
        let open_ports = count(PortStatus::Open);
        let closed_ports = count(PortStatus::Closed);
        let filtered_ports = count(PortStatus::Filtered);

        Self {
            target: target.into(),
            ip_address: ip_address.into(),
            total_ports: outcomes.len(),
            open_ports,
            closed_ports,
            filtered_ports,
            duration_ms: duration.as_millis() as u64,
            results: outcomes,
        }
    }
}
