//! Error types for Sounder.
//!
//! Uses `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Classified failure of a single connection attempt.
///
/// These never escape the prober: each variant is converted into a port
/// status and retained as diagnostic detail on the outcome.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("connection timed out")]
    Timeout,

    #[error("connection refused")]
    ConnectionRefused,

    #[error("connect failed: {0}")]
    ConnectFailed(String),
}

/// Result type alias for connection attempts.
pub type ScanResult<T> = Result<T, ScanError>;

/// Failure to turn a target string into a usable address.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to resolve hostname '{host}': {reason}")]
    LookupFailed { host: String, reason: String },

    #[error("no IP addresses found for hostname '{0}'")]
    NoAddresses(String),
}
