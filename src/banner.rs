//! Banner grabbing functionality for TCP connections.
//!
//! Attempts to retrieve service banners by sending a protocol-appropriate
//! greeting (for services that stay quiet until spoken to) and reading the
//! initial data the service sends back.

use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

/// Maximum bytes to read for a banner.
const MAX_BANNER_BYTES: usize = 1024;

/// Deadline for the banner exchange, independent of the connect timeout.
const BANNER_TIMEOUT: Duration = Duration::from_secs(2);

/// Maximum displayed banner length before truncation.
const MAX_DISPLAY_LEN: usize = 100;

/// Greeting payload for services that expect the client to speak first.
///
/// Ports not listed here send nothing and rely on server-initiated banners
/// (SSH, SMTP-like services announce themselves on connect).
fn probe_payload(port: u16) -> Option<&'static [u8]> {
    match port {
        21 => Some(b"HELP\r\n"),
        25 => Some(b"EHLO sounder\r\n"),
        80 | 8080 => Some(b"GET / HTTP/1.0\r\nHost: sounder\r\n\r\n"),
        110 => Some(b"USER sounder\r\n"),
        143 => Some(b"A001 CAPABILITY\r\n"),
        _ => None,
    }
}

/// Grab a banner from an already-open stream.
///
/// Sends the greeting for the port (if one is defined), then reads at most
/// [`MAX_BANNER_BYTES`] under [`BANNER_TIMEOUT`]. Every failure mode -
/// write error, read error, timeout, empty read - yields `None`; the
/// caller's Open classification is never affected.
pub async fn grab_banner<S>(stream: &mut S, port: u16) -> Option<String>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    if let Some(payload) = probe_payload(port) {
        if stream.write_all(payload).await.is_err() {
            return None;
        }
    }

    let mut buffer = vec![0u8; MAX_BANNER_BYTES];
    match timeout(BANNER_TIMEOUT, stream.read(&mut buffer)).await {
        Ok(Ok(n)) if n > 0 => {
            let banner = sanitize_banner(&buffer[..n]);
            if banner.is_empty() {
                None
            } else {
                Some(banner)
            }
        }
        _ => None,
    }
}

/// Make a raw banner printable: lossy UTF-8, trimmed of surrounding
/// whitespace, CR/LF shown as visible two-character escapes, truncated
/// past [`MAX_DISPLAY_LEN`].
fn sanitize_banner(data: &[u8]) -> String {
    let text = String::from_utf8_lossy(data);
    let escaped = text.trim().replace('\r', "\\r").replace('\n', "\\n");
    truncate_display(&escaped, MAX_DISPLAY_LEN)
}

/// Truncate to at most `max_len` characters, appending a marker if cut.
fn truncate_display(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_trims_and_escapes() {
        let data = b"SSH-2.0-OpenSSH_8.9\r\n";
        assert_eq!(sanitize_banner(data), "SSH-2.0-OpenSSH_8.9");

        let data = b"220 mail ready\r\n250 ok";
        assert_eq!(sanitize_banner(data), "220 mail ready\\r\\n250 ok");
    }

    #[test]
    fn test_sanitize_truncates_long_banners() {
        let data = vec![b'x'; 300];
        let banner = sanitize_banner(&data);
        assert!(banner.ends_with("..."));
        assert_eq!(banner.chars().count(), MAX_DISPLAY_LEN + 3);
    }

    #[test]
    fn test_probe_payload_table() {
        assert_eq!(probe_payload(21), Some(b"HELP\r\n".as_slice()));
        assert!(probe_payload(80).is_some());
        assert_eq!(probe_payload(80), probe_payload(8080));
        assert!(probe_payload(22).is_none());
        assert!(probe_payload(9999).is_none());
    }

    #[tokio::test]
    async fn test_server_initiated_banner() {
        let (mut client, mut server) = tokio::io::duplex(4096);
        server.write_all(b"220 test service ready\r\n").await.unwrap();

        let banner = grab_banner(&mut client, 2222).await.expect("banner");
        assert_eq!(banner, "220 test service ready");
    }

    #[tokio::test]
    async fn test_http_probe_sent_then_response_read() {
        let (mut client, mut server) = tokio::io::duplex(4096);
        let responder = tokio::spawn(async move {
            let mut buf = vec![0u8; 256];
            let n = server.read(&mut buf).await.unwrap();
            assert!(String::from_utf8_lossy(&buf[..n]).starts_with("GET / HTTP/1.0"));
            server
                .write_all(b"HTTP/1.0 200 OK\r\nServer: testd\r\n\r\n")
                .await
                .unwrap();
        });

        let banner = grab_banner(&mut client, 80).await.expect("banner");
        assert!(banner.contains("HTTP/1.0 200"));
        responder.await.unwrap();
    }

    #[tokio::test]
    async fn test_mute_server_yields_none() {
        let (mut client, server) = tokio::io::duplex(64);
        drop(server);
        assert_eq!(grab_banner(&mut client, 2222).await, None);
    }
}
