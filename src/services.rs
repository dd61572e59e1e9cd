//! Service detection based on well-known port numbers.
//!
//! Provides mapping from port numbers to likely service names.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Well-known TCP services, keyed by port.
const SERVICES: &[(u16, &'static str)] = &[
    (20, "ftp-data"),
    (21, "ftp"),
    (22, "ssh"),
    (23, "telnet"),
    (25, "smtp"),
    (53, "dns"),
    (80, "http"),
    (110, "pop3"),
    (111, "rpcbind"),
    (123, "ntp"),
    (135, "msrpc"),
    (139, "netbios-ssn"),
    (143, "imap"),
    (389, "ldap"),
    (443, "https"),
    (445, "microsoft-ds"),
    (465, "smtps"),
    (514, "syslog"),
    (587, "submission"),
    (631, "ipp"),
    (873, "rsync"),
    (993, "imaps"),
    (995, "pop3s"),
    (1080, "socks"),
    (1433, "mssql"),
    (1521, "oracle"),
    (1723, "pptp"),
    (1883, "mqtt"),
    (2049, "nfs"),
    (2375, "docker"),
    (3128, "squid"),
    (3306, "mysql"),
    (3389, "rdp"),
    (5432, "postgresql"),
    (5672, "amqp"),
    (5900, "vnc"),
    (6379, "redis"),
    (8000, "http-alt"),
    (8080, "http-proxy"),
    (8443, "https-alt"),
    (8888, "http-alt"),
    (9090, "prometheus"),
    (9200, "elasticsearch"),
    (9418, "git"),
    (11211, "memcached"),
    (27017, "mongodb"),
];

/// Static map of well-known ports to service names.
static PORT_SERVICES: LazyLock<HashMap<u16, &'static str>> =
    LazyLock::new(|| SERVICES.iter().copied().collect());

/// Look up the probable service name for a given port.
///
/// Returns `None` if the port is not in the well-known services database.
pub fn get_service_name(port: u16) -> Option<&'static str> {
    PORT_SERVICES.get(&port).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_ports() {
        assert_eq!(get_service_name(22), Some("ssh"));
        assert_eq!(get_service_name(80), Some("http"));
        assert_eq!(get_service_name(443), Some("https"));
        assert_eq!(get_service_name(3306), Some("mysql"));
    }

    #[test]
    fn test_unknown_port() {
        assert_eq!(get_service_name(12345), None);
    }
}
