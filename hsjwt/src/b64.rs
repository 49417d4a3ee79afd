//! Segment encoding for the compact token format
//!
//! Every segment of a compact JWT is URL-safe base64 with no padding.
//! Decoding is strict: padding, characters outside of the URL-safe
//! alphabet, and non-canonical trailing bits are all rejected.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::MalformedSegment;

/// Encodes raw bytes as an unpadded base64url segment
#[must_use]
pub fn encode_segment(raw: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(raw)
}

/// Decodes an unpadded base64url segment into raw bytes
///
/// # Errors
///
/// Returns an error if the segment contains characters outside of the
/// base64url alphabet, contains padding, or is otherwise not a valid
/// encoding.
pub fn decode_segment(enc: impl AsRef<[u8]>) -> Result<Vec<u8>, MalformedSegment> {
    Ok(URL_SAFE_NO_PAD.decode(enc)?)
}

/// Calculates the expected length of the unpadded encoding of `len` bytes
#[inline]
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    let d = len / 3 * 4;
    let m = len % 3;
    if m > 0 {
        d + m + 1
    } else {
        d
    }
}

/// Serializes a value as compact JSON and encodes it as a segment
///
/// Output is deterministic for a given value: struct fields are emitted
/// in declaration order and maps in their own iteration order.
pub(crate) fn to_segment<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec(value)?;
    Ok(encode_segment(json))
}

/// Decodes a segment and parses it as JSON
pub(crate) fn from_segment<T>(
    enc: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>
where
    T: DeserializeOwned,
{
    let raw = decode_segment(enc)?;
    Ok(serde_json::from_slice(&raw)?)
}
