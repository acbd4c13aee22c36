//! Gzip decompression of the downloaded catalog.

use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::StarmapError;

/// Inflate gzip bytes into catalog text.
///
/// Decoding is best-effort UTF-8: undecodable byte sequences are replaced
/// rather than failing, so no row-level encoding errors ever surface. A
/// malformed gzip stream is fatal.
pub fn decompress_text(compressed: &[u8]) -> Result<String, StarmapError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw).map_err(StarmapError::Gzip)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}
