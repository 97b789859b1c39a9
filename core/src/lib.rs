//! Minimal blocking HTTP/HTTPS client.
//!
//! # Overview
//! One-shot fetches over plain TCP or rustls-backed TLS: set a url, a
//! method (GET or POST) and an optional POST body on an [`HttpClient`],
//! call [`perform`](client::HttpClient::perform), get the response body
//! back as text. Every call resolves the host, connects, sends a single
//! `Connection: close` request, reads until the peer hangs up, and closes
//! the socket before returning.
//!
//! # Design
//! - `url`, `request` and `response` are pure functions over strings and
//!   bytes; all I/O lives in `connector` and `transport`.
//! - `Connector` is the transport seam. The default `TcpConnector` speaks
//!   to the real network; tests substitute in-memory or loopback
//!   transports.
//! - There is no pooling, redirect following, timeout handling or chunked
//!   decoding: each call makes one request on its own connection.

pub mod client;
pub mod connector;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;
pub mod url;

pub use client::HttpClient;
pub use connector::{Connection, Connector, TcpConnector};
pub use error::Error;
pub use request::Method;
pub use response::ResponseBody;
pub use url::ParsedUrl;
