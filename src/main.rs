//! Sounder binary entry point.
//!
//! Wires the CLI to the scanning engine: parse arguments, resolve the
//! target, run the scan, render the summary. Input errors abort before any
//! network activity; per-port failures never do.

use anyhow::Context;
use clap::Parser;
use sounder::cli::{self, Args, OutputFormat};
use sounder::output;
use sounder::scanner::{self, ScanJob, TcpProber};
use sounder::types::PortSpec;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Input validation happens entirely before any network activity.
    let port_spec: PortSpec = args
        .ports
        .parse()
        .with_context(|| format!("invalid port specification '{}'", args.ports))?;
    let ports = port_spec.to_ports();

    let ip = cli::resolve_target(&args.target)
        .await
        .context("failed to resolve target")?;

    if args.output == OutputFormat::Plain {
        output::print_scan_header(&args.target, &ip.to_string(), ports.len());
    }

    let prober = Arc::new(TcpProber::new(
        ip,
        Duration::from_millis(args.timeout),
        !args.no_banner,
    ));
    let job = ScanJob {
        target_name: args.target.clone(),
        ports,
        concurrency: args.concurrency as usize,
        verbose: args.verbose,
    };

    let summary = scanner::run_scan(prober, job).await;

    output::print_results(&summary, args.output, args.show_closed)
        .context("failed to render results")?;

    Ok(())
}
