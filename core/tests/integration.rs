//! End-to-end fetches against the live stub server.
//!
//! # Design
//! Starts the stub server on a random loopback port, then drives the real
//! client through a connector that routes every host name to that port,
//! standing in for DNS and the fixed scheme ports. The bodies coming back
//! and the request the server saw are both asserted.

use std::net::{SocketAddr, TcpStream};

use minifetch_core::{Connector, Error, HttpClient, Method};

/// Routes every dial to one fixed loopback address.
struct RouteConnector {
    addr: SocketAddr,
}

impl Connector for RouteConnector {
    type Stream = TcpStream;

    fn connect(&self, host: &str, port: u16) -> Result<TcpStream, Error> {
        TcpStream::connect(self.addr).map_err(|e| Error::Connection {
            host: host.to_string(),
            port,
            detail: e.to_string(),
        })
    }

    fn connect_tls(&self, _host: &str, _port: u16) -> Result<TcpStream, Error> {
        unreachable!("the stub server speaks plaintext only")
    }
}

/// Start the stub server on a random port and return its address.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client(addr: SocketAddr) -> HttpClient<RouteConnector> {
    HttpClient::with_connector(RouteConnector { addr })
}

/// Mirror of the stub server's echo payload, defined independently so the
/// tests catch schema drift.
#[derive(Debug, serde::Deserialize)]
struct Echo {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    body: String,
}

fn header<'a>(echo: &'a Echo, name: &str) -> Option<&'a str> {
    echo.headers
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn get_fetches_a_body_end_to_end() {
    let addr = start_server();
    let mut client = client(addr);
    client.set_url("http://example.test/hello");

    let body = client.perform().unwrap();
    assert_eq!(body.text, "hello world");
    assert!(body.complete);
}

#[test]
fn post_sends_exactly_the_configured_request() {
    let addr = start_server();
    let mut client = client(addr);
    client.set_url("http://example.test/echo");
    client.set_method(Method::Post);
    client.set_post_data("a=1&b=2");

    let body = client.perform().unwrap();
    assert!(body.complete);
    let echo: Echo = serde_json::from_str(&body.text).unwrap();

    assert_eq!(echo.method, "POST");
    assert_eq!(echo.path, "/echo");
    assert_eq!(echo.body, "a=1&b=2");
    assert_eq!(header(&echo, "host"), Some("example.test"));
    assert_eq!(
        header(&echo, "content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(header(&echo, "content-length"), Some("7"));
}

#[test]
fn get_carries_no_body_even_when_one_is_set() {
    let addr = start_server();
    let mut client = client(addr);
    client.set_url("http://example.test/echo");
    client.set_method(Method::Post);
    client.set_post_data("a=1&b=2");
    client.set_method(Method::Get);

    let body = client.perform().unwrap();
    let echo: Echo = serde_json::from_str(&body.text).unwrap();

    assert_eq!(echo.method, "GET");
    assert!(echo.body.is_empty());
    assert_eq!(header(&echo, "content-length"), None);
    assert_eq!(header(&echo, "content-type"), None);
}

#[test]
fn large_body_is_accumulated_across_reads() {
    let addr = start_server();
    let mut client = client(addr);
    client.set_url("http://example.test/large");

    let body = client.perform().unwrap();
    assert!(body.complete);
    assert_eq!(body.text.len(), 131072);
    assert!(body.text.starts_with("0123456789abcdef"));
    assert!(body.text.ends_with("0123456789abcdef"));
}

#[test]
fn empty_body_is_complete_not_truncated() {
    let addr = start_server();
    let mut client = client(addr);
    client.set_url("http://example.test/empty");

    let body = client.perform().unwrap();
    assert_eq!(body.text, "");
    assert!(body.complete);
}

#[test]
fn sequential_performs_reuse_nothing() {
    let addr = start_server();
    let mut client = client(addr);

    client.set_url("http://example.test/hello");
    let first = client.perform().unwrap();

    client.set_url("http://example.test/echo");
    client.set_method(Method::Post);
    client.set_post_data("run=2");
    let second = client.perform().unwrap();

    assert_eq!(first.text, "hello world");
    let echo: Echo = serde_json::from_str(&second.text).unwrap();
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.body, "run=2");
}
