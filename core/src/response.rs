//! Response body extraction.
//!
//! # Design
//! The client never interprets the status line or headers; it only wants
//! the body, which starts after the first `\r\n\r\n`. A response where that
//! separator never arrived (the connection died mid-headers) yields an empty
//! body flagged `complete: false`, so callers can tell truncation apart from
//! a genuinely empty body.

/// Body text extracted from one raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBody {
    /// Everything after the first blank line, decoded lossily as UTF-8.
    pub text: String,
    /// False when the header/body separator was never seen.
    pub complete: bool,
}

/// Split `raw` at the first `\r\n\r\n` and return what follows it.
pub fn extract_body(raw: &[u8]) -> ResponseBody {
    match raw.windows(4).position(|w| w == b"\r\n\r\n") {
        Some(i) => ResponseBody {
            text: String::from_utf8_lossy(&raw[i + 4..]).into_owned(),
            complete: true,
        },
        None => ResponseBody {
            text: String::new(),
            complete: false,
        },
    }
}
