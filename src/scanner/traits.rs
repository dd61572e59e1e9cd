//! Prober trait abstraction.
//!
//! Defines a common interface over the probing mechanism, keeping the
//! coordinator independent of real sockets and easy to test.

use crate::types::Port;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

/// Status of a scanned port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// Port is open (TCP handshake completed).
    Open,
    /// Port is closed (connection actively refused).
    Closed,
    /// Port is filtered (timeout or ambiguous failure, possibly a firewall).
    Filtered,
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Filtered => write!(f, "filtered"),
        }
    }
}

/// Result of probing a single port.
///
/// Created exactly once per port by the worker that probed it; immutable
/// after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    /// The port number that was probed.
    pub port: Port,
    /// Status determined by the probe.
    pub status: PortStatus,
    /// Inferred service name, present only for open well-known ports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Banner captured from the service, present only for open ports that
    /// responded within the banner deadline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Time spent on the connection attempt in milliseconds.
    pub latency_ms: u64,
    /// Raw failure detail, retained for diagnostics only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// Create a new outcome with no service, banner, or error detail.
    pub fn new(port: Port, status: PortStatus) -> Self {
        Self {
            port,
            status,
            service: None,
            banner: None,
            latency_ms: 0,
            error: None,
        }
    }

    /// Set the service name.
    pub fn with_service(mut self, service: Option<String>) -> Self {
        self.service = service;
        self
    }

    /// Set the banner.
    pub fn with_banner(mut self, banner: Option<String>) -> Self {
        self.banner = banner;
        self
    }

    /// Set the connection latency.
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Set the failure detail.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}

/// Trait for port probing implementations.
///
/// A prober attempts one bounded-time probe of a single port and classifies
/// the outcome. Probing never fails: every error becomes a classification.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single port.
    async fn probe(&self, port: Port) -> ProbeOutcome;

    /// Get the target IP address.
    fn target(&self) -> IpAddr;

    /// Get the configured connect timeout.
    fn timeout(&self) -> Duration;
}
