//! Connection establishment: name lookup, TCP, and the TLS client layer.
//!
//! # Design
//! `Connector` is the seam between the client and the real network; tests
//! substitute their own implementation to run against loopback servers or
//! in-memory streams. The production `TcpConnector` resolves names to the
//! first IPv4 address, connects blocking, and wraps the socket in a rustls
//! session for https.
//!
//! One `ClientConfig` is built per process, on first https use, and shared
//! by every connection: Mozilla's roots from webpki-roots, protocol
//! versions pinned to TLS 1.3 and 1.2 rather than whatever the library
//! defaults to. The `Connection` value returned for https owns both the
//! session and the socket, so dropping it tears both down, session first.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::{Arc, LazyLock};

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use crate::error::Error;

static TLS_CONFIG: LazyLock<Arc<ClientConfig>> = LazyLock::new(|| {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    let config = ClientConfig::builder_with_protocol_versions(&[
        &rustls::version::TLS13,
        &rustls::version::TLS12,
    ])
    .with_root_certificates(roots)
    .with_no_client_auth();
    Arc::new(config)
});

/// Transport factory used by [`HttpClient`](crate::client::HttpClient).
///
/// `connect` yields a plaintext stream, `connect_tls` one whose bytes are
/// encrypted in transit. The client only requires blocking `Read + Write`;
/// what a stream actually is stays the implementation's business.
pub trait Connector {
    type Stream: Read + Write;

    fn connect(&self, host: &str, port: u16) -> Result<Self::Stream, Error>;
    fn connect_tls(&self, host: &str, port: u16) -> Result<Self::Stream, Error>;
}

/// Production connector: standard-library blocking sockets, rustls for https.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

/// One live connection, plaintext or TLS.
#[derive(Debug)]
pub enum Connection {
    Plain(TcpStream),
    Tls(Box<StreamOwned<ClientConnection, TcpStream>>),
}

impl Read for Connection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Connection::Plain(stream) => stream.read(buf),
            Connection::Tls(stream) => stream.read(buf),
        }
    }
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Connection::Plain(stream) => stream.write(buf),
            Connection::Tls(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Connection::Plain(stream) => stream.flush(),
            Connection::Tls(stream) => stream.flush(),
        }
    }
}

impl TcpConnector {
    /// Resolve `host` to its first IPv4 address and open a TCP connection.
    fn dial(&self, host: &str, port: u16) -> Result<TcpStream, Error> {
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(|e| Error::Resolution {
                host: host.to_string(),
                detail: e.to_string(),
            })?
            .find(|a| a.is_ipv4())
            .ok_or_else(|| Error::Resolution {
                host: host.to_string(),
                detail: "no IPv4 address".to_string(),
            })?;
        log::debug!("connecting to {host} at {addr}");
        TcpStream::connect(addr).map_err(|e| Error::Connection {
            host: host.to_string(),
            port,
            detail: e.to_string(),
        })
    }
}

impl Connector for TcpConnector {
    type Stream = Connection;

    fn connect(&self, host: &str, port: u16) -> Result<Connection, Error> {
        Ok(Connection::Plain(self.dial(host, port)?))
    }

    /// Dial, then negotiate TLS before handing the stream back.
    ///
    /// The handshake is driven to completion here rather than lazily on
    /// first use, so certificate and protocol failures surface as
    /// [`Error::TlsHandshake`]. The socket is dropped, and with it closed,
    /// whenever any step fails.
    fn connect_tls(&self, host: &str, port: u16) -> Result<Connection, Error> {
        let mut tcp = self.dial(host, port)?;

        let name = ServerName::try_from(host.to_string()).map_err(|e| Error::TlsHandshake {
            host: host.to_string(),
            detail: e.to_string(),
        })?;
        let mut session =
            ClientConnection::new(TLS_CONFIG.clone(), name).map_err(|e| Error::TlsHandshake {
                host: host.to_string(),
                detail: e.to_string(),
            })?;

        while session.is_handshaking() {
            session.complete_io(&mut tcp).map_err(|e| Error::TlsHandshake {
                host: host.to_string(),
                detail: e.to_string(),
            })?;
        }
        log::debug!("TLS session established with {host}");

        Ok(Connection::Tls(Box::new(StreamOwned::new(session, tcp))))
    }
}
