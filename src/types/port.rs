//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortRange` and `PortSpec` handle complex port specifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Well-known ports expanded by the `common` keyword in a port spec.
///
/// Covers the usual quick-scan set: remote access, mail, web, Windows
/// networking, and the popular databases.
pub const COMMON_PORTS: &[u16] = &[
    21, 22, 23, 25, 53, 80, 110, 135, 139, 143, 443, 445, 993, 995, 1723, 3306, 3389, 5432, 5900,
    8080, 8443, 9200, 27017,
];

/// A validated network port number (1-65535).
///
/// Using a newtype prevents accidental misuse of raw u16 values
/// and ensures port numbers are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Create a Port without validation. Use only when the value is known valid.
    #[inline]
    pub const fn new_unchecked(port: u16) -> Self {
        Self(port)
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::OutOfRange(value as u32))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(u32),
    #[error("invalid port number: {0}")]
    InvalidFormat(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
    #[error("empty port specification")]
    Empty,
}

/// A range of ports (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a new port range.
    pub fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start.0 > end.0 {
            Err(PortError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        (self.end.0 - self.start.0 + 1) as usize
    }

    /// Check if the range is empty (never true for valid ranges).
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all ports in this range.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        let start = self.start.0;
        let end = self.end.0;
        (start..=end).map(Port::new_unchecked)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A complete port specification that can contain multiple ranges.
///
/// Supports formats like:
/// - Single port: "80"
/// - Comma-separated: "80,443,8080"
/// - Range: "1-1000"
/// - Keyword: "common" (a fixed well-known-port list, see [`COMMON_PORTS`])
/// - Mixed: "22,80,443,8000-9000,common"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortSpec {
    ranges: Vec<PortRange>,
}

impl PortSpec {
    /// Create an empty port specification.
    pub const fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Add a port range to the specification.
    pub fn add_range(&mut self, range: PortRange) {
        self.ranges.push(range);
    }

    /// Add a single port to the specification.
    pub fn add_port(&mut self, port: Port) {
        self.ranges.push(PortRange::single(port));
    }

    /// Get all ports as a sorted, deduplicated vector.
    ///
    /// The order is ascending regardless of the order tokens appeared in the
    /// input, so downstream scanning and reporting are deterministic.
    pub fn to_ports(&self) -> Vec<Port> {
        let mut ports: Vec<Port> = self.ranges.iter().flat_map(|r| r.iter()).collect();
        ports.sort_unstable();
        ports.dedup();
        ports
    }

    /// Get the total number of unique ports.
    pub fn count(&self) -> usize {
        self.to_ports().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Parse one numeric token, reporting values that fit no valid port as
/// out-of-range rather than malformed.
fn parse_port_number(token: &str) -> Result<Port, PortError> {
    let value: u32 = token
        .parse()
        .map_err(|_| PortError::InvalidFormat(token.to_string()))?;
    u16::try_from(value)
        .ok()
        .and_then(Port::new)
        .ok_or(PortError::OutOfRange(value))
}

impl FromStr for PortSpec {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PortError::Empty);
        }

        let mut spec = Self::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.eq_ignore_ascii_case("common") {
                for &port in COMMON_PORTS {
                    spec.add_port(Port::new_unchecked(port));
                }
            } else if part.contains('-') {
                let bounds: Vec<&str> = part.split('-').collect();
                if bounds.len() != 2 {
                    return Err(PortError::InvalidFormat(part.to_string()));
                }

                let start = parse_port_number(bounds[0].trim())?;
                let end = parse_port_number(bounds[1].trim())?;
                let range = PortRange::new(start, end)?;
                spec.add_range(range);
            } else {
                spec.add_port(parse_port_number(part)?);
            }
        }

        if spec.is_empty() {
            return Err(PortError::Empty);
        }

        Ok(spec)
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port_numbers(spec: &PortSpec) -> Vec<u16> {
        spec.to_ports().iter().map(|p| p.as_u16()).collect()
    }

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(80).is_some());
        assert!(Port::new(65535).is_some());
    }

    #[test]
    fn test_port_range() {
        let start = Port::new(1).unwrap();
        let end = Port::new(100).unwrap();
        let range = PortRange::new(start, end).unwrap();
        assert_eq!(range.len(), 100);
    }

    #[test]
    fn test_port_spec_parsing() {
        let spec: PortSpec = "80".parse().unwrap();
        assert_eq!(spec.count(), 1);

        let spec: PortSpec = "80,443".parse().unwrap();
        assert_eq!(spec.count(), 2);

        let spec: PortSpec = "1-100".parse().unwrap();
        assert_eq!(spec.count(), 100);

        let spec: PortSpec = "22,80,443,8000-8010".parse().unwrap();
        assert_eq!(spec.count(), 14);
    }

    #[test]
    fn test_port_spec_dedup() {
        let spec: PortSpec = "80,80,443,80".parse().unwrap();
        assert_eq!(spec.count(), 2);
    }

    #[test]
    fn test_to_ports_ascending_regardless_of_token_order() {
        let a: PortSpec = "443,22,80".parse().unwrap();
        let b: PortSpec = "80,443,22".parse().unwrap();
        assert_eq!(port_numbers(&a), vec![22, 80, 443]);
        assert_eq!(port_numbers(&a), port_numbers(&b));
    }

    #[test]
    fn test_common_keyword() {
        let spec: PortSpec = "common".parse().unwrap();
        let ports = port_numbers(&spec);
        assert_eq!(ports.len(), COMMON_PORTS.len());
        assert!(ports.contains(&22));
        assert!(ports.contains(&443));
        assert!(ports.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_common_merges_with_other_tokens() {
        let spec: PortSpec = "8000-8002,common,80".parse().unwrap();
        let ports = port_numbers(&spec);
        // 80 appears in both the literal and the common list
        assert_eq!(ports.iter().filter(|&&p| p == 80).count(), 1);
        assert!(ports.contains(&8001));
        assert!(ports.contains(&3306));
        assert!(ports.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_out_of_range_port_cited() {
        let err = "1-1000,70000".parse::<PortSpec>().unwrap_err();
        assert_eq!(err, PortError::OutOfRange(70000));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = "5-3".parse::<PortSpec>().unwrap_err();
        assert_eq!(err, PortError::InvalidRange(5, 3));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let err = "abc".parse::<PortSpec>().unwrap_err();
        assert_eq!(err, PortError::InvalidFormat("abc".to_string()));
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = "0".parse::<PortSpec>().unwrap_err();
        assert_eq!(err, PortError::OutOfRange(0));
    }

    #[test]
    fn test_empty_spec_rejected() {
        assert_eq!("".parse::<PortSpec>().unwrap_err(), PortError::Empty);
        assert_eq!("   ".parse::<PortSpec>().unwrap_err(), PortError::Empty);
    }
}
