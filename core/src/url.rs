//! URL splitting for the fetch client.
//!
//! # Design
//! This is not a general URL parser. The client only needs to know whether
//! a url is https, which host to dial and which path to request, so that is
//! all `parse` extracts: a literal scheme prefix test plus a single split at
//! the first `/` after `://`. There is no percent-decoding and no `:port`
//! interpretation, and a query string simply stays inside the path.

use crate::error::Error;

/// A url decomposed into the three pieces the client needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// True when the url starts with the literal bytes `https`.
    pub secure: bool,
    /// Everything between `://` and the first `/` (or the end of the url).
    pub host: String,
    /// From that `/` to the end of the url; `/` when the url has no path.
    pub path: String,
}

impl ParsedUrl {
    /// Split `url` into scheme flag, host and path.
    ///
    /// The scheme test is a case-sensitive `https` prefix check, nothing
    /// more; `HTTPS://…` parses but is treated as plaintext. A url without
    /// `://` is rejected as [`Error::MalformedUrl`]. An explicit `:port`
    /// in the authority is not understood and stays inside `host`, where
    /// name resolution will refuse it.
    pub fn parse(url: &str) -> Result<Self, Error> {
        let secure = url.as_bytes().starts_with(b"https");

        let after_scheme = url
            .find("://")
            .map(|i| &url[i + 3..])
            .ok_or_else(|| Error::MalformedUrl(url.to_string()))?;

        let (host, path) = match after_scheme.find('/') {
            Some(i) => (&after_scheme[..i], &after_scheme[i..]),
            None => (after_scheme, "/"),
        };

        Ok(Self {
            secure,
            host: host.to_string(),
            path: path.to_string(),
        })
    }

    /// Destination port implied by the scheme: 443 for https, 80 otherwise.
    pub fn port(&self) -> u16 {
        if self.secure {
            443
        } else {
            80
        }
    }
}
