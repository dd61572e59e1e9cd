//! Scan coordination.
//!
//! Fans a port list out across a bounded pool of concurrent probes using the
//! tokio runtime, then aggregates the outcomes into a deterministic summary.

pub mod summary;
pub mod tcp;
pub mod traits;

use crate::types::Port;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

pub use summary::ScanSummary;
pub use tcp::TcpProber;
pub use traits::{PortStatus, ProbeOutcome, Prober};

/// Parameters for a scan run.
pub struct ScanJob {
    /// Original target input (hostname or IP string), carried into the summary.
    pub target_name: String,
    /// Deduplicated ports to probe.
    pub ports: Vec<Port>,
    /// Maximum number of concurrently in-flight probes.
    pub concurrency: usize,
    /// Show a progress bar while scanning.
    pub verbose: bool,
}

/// Execute a complete port scan.
///
/// Every port in the job is probed exactly once, with at most
/// `job.concurrency` probes in flight. Returns only after every dispatched
/// port has produced its outcome.
pub async fn run_scan<P: Prober + ?Sized>(prober: Arc<P>, job: ScanJob) -> ScanSummary {
    let start = Instant::now();
    let total_ports = job.ports.len();
    let ip_address = prober.target().to_string();

    tracing::info!(
        target = %job.target_name,
        ip = %ip_address,
        ports = total_ports,
        concurrency = job.concurrency,
        "starting scan"
    );

    let progress = if job.verbose {
        let pb = ProgressBar::new(total_ports as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let outcomes = collect_outcomes(prober, job.ports, job.concurrency, progress.as_ref()).await;

    if let Some(pb) = progress {
        pb.finish_with_message("scan complete");
    }

    let summary = ScanSummary::aggregate(job.target_name, ip_address, start.elapsed(), outcomes);

    tracing::info!(
        open = summary.open_ports,
        closed = summary.closed_ports,
        filtered = summary.filtered_ports,
        duration_ms = summary.duration_ms,
        "scan finished"
    );

    summary
}

/// Probe every port with bounded concurrency, collecting the unordered outcomes.
///
/// The stream collect is the completion barrier: it resolves only once every
/// dispatched port has contributed exactly one outcome, so no separate
/// counter is needed.
async fn collect_outcomes<P: Prober + ?Sized>(
    prober: Arc<P>,
    ports: Vec<Port>,
    concurrency: usize,
    progress: Option<&ProgressBar>,
) -> Vec<ProbeOutcome> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    stream::iter(ports)
        .map(|port| {
            let prober = Arc::clone(&prober);
            let sem = Arc::clone(&semaphore);
            let progress = progress.cloned();

            async move {
                // Acquire semaphore permit
                let _permit = sem.acquire().await.unwrap();

                let outcome = prober.probe(port).await;

                if let Some(ref pb) = progress {
                    pb.inc(1);
                    if outcome.status == PortStatus::Open {
                        pb.set_message(format!("found open port: {port}"));
                    }
                }

                outcome
            }
        })
        .buffer_unordered(1000) // Allow high buffering, semaphore controls actual concurrency
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;

    /// Deterministic responder: multiples of five closed, other even ports
    /// open, the rest filtered.
    struct FixedProber;

    #[async_trait]
    impl Prober for FixedProber {
        async fn probe(&self, port: Port) -> ProbeOutcome {
            let status = match port.as_u16() {
                p if p % 5 == 0 => PortStatus::Closed,
                p if p % 2 == 0 => PortStatus::Open,
                _ => PortStatus::Filtered,
            };
            ProbeOutcome::new(port, status).with_latency(1)
        }

        fn target(&self) -> IpAddr {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }

        fn timeout(&self) -> Duration {
            Duration::from_millis(100)
        }
    }

    fn ports(range: std::ops::RangeInclusive<u16>) -> Vec<Port> {
        range.map(Port::new_unchecked).collect()
    }

    fn job(ports: Vec<Port>, concurrency: usize) -> ScanJob {
        ScanJob {
            target_name: "localhost".to_string(),
            ports,
            concurrency,
            verbose: false,
        }
    }

    #[tokio::test]
    async fn test_every_port_probed_exactly_once() {
        let summary = run_scan(Arc::new(FixedProber), job(ports(1..=200), 10)).await;

        assert_eq!(summary.total_ports, 200);
        assert_eq!(summary.results.len(), 200);
        assert_eq!(
            summary.total_ports,
            summary.open_ports + summary.closed_ports + summary.filtered_ports
        );

        // Sorted output with no duplicates or omissions.
        let seen: Vec<u16> = summary.results.iter().map(|o| o.port.as_u16()).collect();
        assert_eq!(seen, (1..=200).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_classification_independent_of_concurrency() {
        let key = |s: &ScanSummary| {
            s.results
                .iter()
                .map(|o| (o.port.as_u16(), o.status))
                .collect::<Vec<_>>()
        };

        let serial = run_scan(Arc::new(FixedProber), job(ports(1..=50), 1)).await;
        let parallel = run_scan(Arc::new(FixedProber), job(ports(1..=50), 100)).await;

        assert_eq!(key(&serial), key(&parallel));
    }

    #[tokio::test]
    async fn test_dyn_prober_supported() {
        let prober: Arc<dyn Prober> = Arc::new(FixedProber);
        let summary = run_scan(prober, job(ports(1..=10), 4)).await;
        assert_eq!(summary.total_ports, 10);
    }
}
