//! # Sounder - A Concurrent TCP Port Scanner
//!
//! Sounder determines the reachability state of TCP ports on a target host,
//! optionally grabbing service banners from open ports, and reports results
//! deterministically despite parallel execution.
//!
//! ## Features
//!
//! - **Bounded Concurrency**: Async I/O with a configurable in-flight limit
//! - **Three-State Classification**: Open, closed, and filtered ports
//! - **Banner Grabbing**: Protocol-aware probes for well-known services
//! - **Flexible Port Specs**: Single ports, ranges, and the `common` keyword
//! - **Multiple Output Formats**: Plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use sounder::scanner::{run_scan, ScanJob, TcpProber};
//! use sounder::types::PortSpec;
//! use std::net::IpAddr;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let target: IpAddr = "192.168.1.1".parse().unwrap();
//!     let spec: PortSpec = "22,80,443,8000-9000".parse().unwrap();
//!
//!     let prober = Arc::new(TcpProber::new(target, Duration::from_secs(1), true));
//!     let job = ScanJob {
//!         target_name: target.to_string(),
//!         ports: spec.to_ports(),
//!         concurrency: 100,
//!         verbose: false,
//!     };
//!
//!     let summary = run_scan(prober, job).await;
//!     println!("{} open ports", summary.open_ports);
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Port newtype and port specification parsing
//! - [`scanner`] - The prober trait, TCP prober, coordinator, and aggregator
//! - [`banner`] - Banner grabbing with protocol-specific greetings
//! - [`services`] - Well-known port to service name lookup
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod banner;
pub mod cli;
pub mod error;
pub mod output;
pub mod scanner;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use error::{ResolveError, ScanError};
pub use scanner::{PortStatus, ProbeOutcome, Prober, ScanSummary, TcpProber};
pub use types::{Port, PortError, PortRange, PortSpec};
