//! The blocking fetch client and its request lifecycle.
//!
//! # Design
//! `HttpClient` holds the url, the method and the POST body behind setters,
//! and `perform` runs the whole lifecycle in one call: parse the url, open
//! a plaintext or TLS connection, serialize the request, send it, read
//! until the peer closes, split off the body. The connector is a type
//! parameter so tests can substitute transports; the default is the real
//! network.

use crate::connector::{Connector, TcpConnector};
use crate::error::Error;
use crate::request::{build_request, Method};
use crate::response::{extract_body, ResponseBody};
use crate::transport::{read_response, send_request};
use crate::url::ParsedUrl;

/// Blocking HTTP/HTTPS client for one-shot fetches.
///
/// Configure it with the setters, then call [`perform`](HttpClient::perform).
/// Each call opens a fresh connection and closes it before returning; there
/// is no pooling and no reuse. `perform` takes `&mut self`, so one client
/// cannot serve concurrent calls; use one client per thread for parallel
/// fetches.
#[derive(Debug, Clone)]
pub struct HttpClient<C: Connector = TcpConnector> {
    url: String,
    method: Method,
    post_data: String,
    connector: C,
}

impl HttpClient {
    /// Client over the real network.
    pub fn new() -> Self {
        Self::with_connector(TcpConnector)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Connector> HttpClient<C> {
    /// Client over a caller-supplied transport.
    pub fn with_connector(connector: C) -> Self {
        Self {
            url: String::new(),
            method: Method::Get,
            post_data: String::new(),
            connector,
        }
    }

    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Body for POST requests. GET requests never carry it.
    pub fn set_post_data(&mut self, data: &str) {
        self.post_data = data.to_string();
    }

    /// Run one full request: parse, connect, send, read, extract.
    ///
    /// The first failing step aborts with its error. Whatever connection was
    /// opened is closed before this returns, on success and on failure alike.
    pub fn perform(&mut self) -> Result<ResponseBody, Error> {
        let url = ParsedUrl::parse(&self.url)?;

        let mut stream = if url.secure {
            self.connector.connect_tls(&url.host, url.port())?
        } else {
            self.connector.connect(&url.host, url.port())?
        };

        let request = build_request(self.method, &url.host, &url.path, &self.post_data);
        log::debug!("{} {}{}", self.method.as_str(), url.host, url.path);

        send_request(&mut stream, request.as_bytes())?;
        let raw = read_response(&mut stream)?;
        Ok(extract_body(&raw))
    }
}
