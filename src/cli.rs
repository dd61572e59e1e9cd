//! Command-line interface definitions for Sounder.
//!
//! Uses `clap` derive macros for declarative argument parsing. Hostname
//! resolution lives here too: the scanning engine itself only ever sees a
//! single resolved address.

use crate::error::ResolveError;
use clap::{Parser, ValueEnum};
use std::net::IpAddr;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// A concurrent TCP port scanner with banner grabbing.
#[derive(Parser, Debug)]
#[command(name = "sounder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A concurrent TCP port scanner", long_about = None)]
pub struct Args {
    /// Target IP address or hostname to scan
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Ports to scan (e.g., "80", "80,443", "1-1000", "common", "22,80,1-1024,common")
    #[arg(short, long, default_value = "common")]
    pub ports: String,

    /// Maximum number of concurrent connection attempts
    #[arg(short = 'c', long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub concurrency: u32,

    /// Connection timeout in milliseconds
    #[arg(short = 't', long, default_value_t = 1000)]
    pub timeout: u64,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Skip banner grabbing on open ports
    #[arg(long)]
    pub no_banner: bool,

    /// Show closed ports in plain output
    #[arg(long)]
    pub show_closed: bool,

    /// Verbose output (show scanning progress)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Resolve a hostname or IP address string to a single IpAddr.
///
/// IPv4 addresses are preferred when a hostname resolves to both families.
pub async fn resolve_target(target: &str) -> Result<IpAddr, ResolveError> {
    // First, try parsing as IP address
    if let Ok(ip) = target.parse::<IpAddr>() {
        return Ok(ip);
    }

    // Otherwise, perform DNS resolution
    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

    let response = resolver
        .lookup_ip(target)
        .await
        .map_err(|e| ResolveError::LookupFailed {
            host: target.to_string(),
            reason: e.to_string(),
        })?;

    let ips: Vec<IpAddr> = response.iter().collect();
    ips.iter()
        .copied()
        .find(IpAddr::is_ipv4)
        .or_else(|| ips.first().copied())
        .ok_or_else(|| ResolveError::NoAddresses(target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sounder", "example.com"]).unwrap();
        assert_eq!(args.target, "example.com");
        assert_eq!(args.ports, "common");
        assert_eq!(args.concurrency, 100);
        assert_eq!(args.timeout, 1000);
        assert_eq!(args.output, OutputFormat::Plain);
        assert!(!args.no_banner);
        assert!(!args.show_closed);
        assert!(!args.verbose);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        assert!(Args::try_parse_from(["sounder", "example.com", "-c", "0"]).is_err());
    }

    #[test]
    fn test_target_required() {
        assert!(Args::try_parse_from(["sounder"]).is_err());
    }

    #[tokio::test]
    async fn test_resolve_literal_ip() {
        let ip = resolve_target("127.0.0.1").await.unwrap();
        assert_eq!(ip, "127.0.0.1".parse::<IpAddr>().unwrap());
    }
}
