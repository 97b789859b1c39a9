//! Blocking wire I/O: send one request, read one response.
//!
//! # Design
//! Every request goes out with `Connection: close`, so the response is
//! delimited by the peer hanging up: the read loop accumulates 8 KiB chunks
//! until end-of-stream. The loop is bounded by [`MAX_RESPONSE_BYTES`] so a
//! peer that never closes cannot grow the buffer without limit. These
//! functions only see `Read + Write`; whether the bytes cross a plaintext
//! socket or a TLS session is the connector's business.

use std::io::{ErrorKind, Read, Write};

use crate::error::Error;

/// Read granularity for the response loop.
const CHUNK_SIZE: usize = 8192;

/// Hard cap on accumulated response bytes.
pub const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Write the whole request, then flush.
pub fn send_request<W: Write>(stream: &mut W, request: &[u8]) -> Result<(), Error> {
    stream
        .write_all(request)
        .map_err(|e| Error::Write(e.to_string()))?;
    stream.flush().map_err(|e| Error::Write(e.to_string()))?;
    log::trace!("> {} bytes", request.len());
    Ok(())
}

/// Accumulate response bytes until the peer closes the connection.
///
/// `Interrupted` reads retry. An `UnexpectedEof` after data has already
/// arrived counts as a close; TLS peers that skip close_notify surface
/// this way. A connection that closes before yielding a single byte is
/// [`Error::Read`].
pub fn read_response<R: Read>(stream: &mut R) -> Result<Vec<u8>, Error> {
    let mut response = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                response.extend_from_slice(&chunk[..n]);
                if response.len() > MAX_RESPONSE_BYTES {
                    return Err(Error::ResponseTooLarge {
                        limit: MAX_RESPONSE_BYTES,
                    });
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof && !response.is_empty() => break,
            Err(e) => return Err(Error::Read(e.to_string())),
        }
    }
    if response.is_empty() {
        return Err(Error::Read(
            "connection closed before any data arrived".to_string(),
        ));
    }
    log::trace!("< {} bytes", response.len());
    Ok(response)
}
