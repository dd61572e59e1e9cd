//! TCP connect prober implementation.
//!
//! Performs standard TCP connect probes using the operating system's
//! socket API. Completes the full handshake, so no special privileges
//! are required.

use crate::banner::grab_banner;
use crate::error::{ScanError, ScanResult};
use crate::scanner::traits::{PortStatus, ProbeOutcome, Prober};
use crate::services::get_service_name;
use crate::types::Port;
use async_trait::async_trait;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// TCP connect prober.
///
/// Classification policy: a completed handshake is Open, an explicit
/// refusal is Closed, and everything else - timeout, unreachable network,
/// transient errors - is Filtered. The refusal signal is platform-dependent,
/// so ambiguous failures are never reported as Closed.
pub struct TcpProber {
    target: IpAddr,
    timeout: Duration,
    grab_banners: bool,
}

impl TcpProber {
    /// Create a new TCP connect prober.
    ///
    /// # Arguments
    /// * `target` - Target IP address to probe
    /// * `timeout` - Connection timeout per port
    /// * `grab_banners` - Whether to attempt banner grabbing on open ports
    pub fn new(target: IpAddr, timeout: Duration, grab_banners: bool) -> Self {
        Self {
            target,
            timeout,
            grab_banners,
        }
    }

    /// Attempt to connect to the target address, classifying any failure.
    async fn attempt_connect(&self, addr: SocketAddr) -> ScanResult<TcpStream> {
        match timeout(self.timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(e)) => match e.kind() {
                io::ErrorKind::ConnectionRefused => Err(ScanError::ConnectionRefused),
                _ => Err(ScanError::ConnectFailed(e.to_string())),
            },
            Err(_) => Err(ScanError::Timeout),
        }
    }
}

#[async_trait]
impl Prober for TcpProber {
    fn target(&self) -> IpAddr {
        self.target
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn probe(&self, port: Port) -> ProbeOutcome {
        let addr = SocketAddr::new(self.target, port.as_u16());
        let start = Instant::now();

        match self.attempt_connect(addr).await {
            Ok(mut stream) => {
                let latency_ms = start.elapsed().as_millis() as u64;
                let banner = if self.grab_banners {
                    grab_banner(&mut stream, port.as_u16()).await
                } else {
                    None
                };
                drop(stream);

                tracing::debug!(%port, latency_ms, "port open");

                ProbeOutcome::new(port, PortStatus::Open)
                    .with_service(get_service_name(port.as_u16()).map(str::to_string))
                    .with_banner(banner)
                    .with_latency(latency_ms)
            }
            Err(e) => {
                let latency_ms = start.elapsed().as_millis() as u64;
                let status = match e {
                    ScanError::ConnectionRefused => PortStatus::Closed,
                    ScanError::Timeout | ScanError::ConnectFailed(_) => PortStatus::Filtered,
                };

                tracing::debug!(%port, %status, error = %e, "port not open");

                ProbeOutcome::new(port, status)
                    .with_latency(latency_ms)
                    .with_error(e.to_string())
            }
        }
    }
}
