//! HTTP/1.1 request serialization.
//!
//! # Design
//! The client speaks one fixed wire shape: request line, `Host`, the two
//! body headers for POST, `Connection: close`, blank line, body. The header
//! set and its order never vary, so the builder is a plain function from
//! (method, host, path, body) to the final `String`, with no header map and
//! no escaping.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Serialize one request.
///
/// `Content-Length` counts the body's bytes (not chars) and is present for
/// POST even when the body is empty. GET never carries a body; `body` is
/// ignored for it entirely.
pub fn build_request(method: Method, host: &str, path: &str, body: &str) -> String {
    let mut request = format!("{} {} HTTP/1.1\r\n", method.as_str(), path);
    request.push_str(&format!("Host: {host}\r\n"));
    if method == Method::Post {
        request.push_str(&format!("Content-Length: {}\r\n", body.len()));
        request.push_str("Content-Type: application/x-www-form-urlencoded\r\n");
    }
    request.push_str("Connection: close\r\n\r\n");
    if method == Method::Post {
        request.push_str(body);
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_has_fixed_header_set() {
        let request = build_request(Method::Get, "example.com", "/index.html", "");
        assert_eq!(
            request,
            "GET /index.html HTTP/1.1\r\n\
             Host: example.com\r\n\
             Connection: close\r\n\r\n"
        );
    }

    #[test]
    fn post_request_carries_length_type_and_body() {
        let request = build_request(Method::Post, "example.com", "/submit", "a=1&b=2");
        assert_eq!(
            request,
            "POST /submit HTTP/1.1\r\n\
             Host: example.com\r\n\
             Content-Length: 7\r\n\
             Content-Type: application/x-www-form-urlencoded\r\n\
             Connection: close\r\n\r\n\
             a=1&b=2"
        );
    }

    #[test]
    fn post_with_empty_body_sends_length_zero() {
        let request = build_request(Method::Post, "example.com", "/ping", "");
        assert!(request.contains("Content-Length: 0\r\n"));
        assert!(request.ends_with("\r\n\r\n"));
    }

    #[test]
    fn get_ignores_a_configured_body() {
        let request = build_request(Method::Get, "example.com", "/", "a=1");
        assert!(!request.contains("a=1"));
        assert!(!request.contains("Content-Length"));
        assert!(!request.contains("Content-Type"));
        assert!(request.ends_with("\r\n\r\n"));
    }

    #[test]
    fn content_length_counts_bytes_not_chars() {
        // "é" is two bytes in UTF-8.
        let request = build_request(Method::Post, "example.com", "/", "é=1");
        assert!(request.contains("Content-Length: 4\r\n"));
    }

    #[test]
    fn method_strings_match_the_wire() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::default(), Method::Get);
    }
}
