//! Error types for the fetch client.
//!
//! # Design
//! One variant per lifecycle stage (url parsing, name lookup, the TCP
//! connect, the TLS handshake, the send, the read), so a caller can tell
//! where a fetch died without string-matching. Variants carry the host (and
//! port where it matters) plus the underlying detail for debugging. A
//! truncated response is deliberately NOT an error; see
//! [`ResponseBody`](crate::response::ResponseBody).

use std::fmt;

/// Errors returned by [`HttpClient::perform`](crate::client::HttpClient::perform).
#[derive(Debug)]
pub enum Error {
    /// The url has no `://` separator.
    MalformedUrl(String),

    /// Name lookup failed or yielded no IPv4 address.
    Resolution { host: String, detail: String },

    /// The TCP connection could not be established.
    Connection {
        host: String,
        port: u16,
        detail: String,
    },

    /// The TLS session could not be negotiated.
    TlsHandshake { host: String, detail: String },

    /// The request could not be written to the connection.
    Write(String),

    /// The connection closed before any response byte arrived, or reading
    /// from it failed outright.
    Read(String),

    /// The peer kept sending past the accumulation cap.
    ResponseTooLarge { limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedUrl(url) => write!(f, "malformed url: {url}"),
            Error::Resolution { host, detail } => {
                write!(f, "could not resolve {host}: {detail}")
            }
            Error::Connection { host, port, detail } => {
                write!(f, "could not connect to {host}:{port}: {detail}")
            }
            Error::TlsHandshake { host, detail } => {
                write!(f, "TLS handshake with {host} failed: {detail}")
            }
            Error::Write(detail) => write!(f, "request send failed: {detail}"),
            Error::Read(detail) => write!(f, "response read failed: {detail}"),
            Error::ResponseTooLarge { limit } => {
                write!(f, "response exceeded {limit} bytes")
            }
        }
    }
}

impl std::error::Error for Error {}
