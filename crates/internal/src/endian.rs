//! Byte-order helpers for fixed-width integer encodings
//!
//! Domain parameters arrive as big-endian buffers while digests and
//! signature halves are little-endian. Both are fitted to a fixed width
//! of `keySize/8` bytes before they leave the library.

/// Fit a little-endian encoding to exactly `width` bytes
///
/// Shorter input is zero-padded at the most significant end. Longer input
/// is truncated: the most significant excess bytes are dropped.
pub fn fit_le(bytes: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    let n = bytes.len().min(width);
    out[..n].copy_from_slice(&bytes[..n]);
    out
}

/// Fit a big-endian encoding to exactly `width` bytes
///
/// Shorter input is zero-padded at the front. Longer input loses its
/// leading (most significant) excess bytes.
pub fn fit_be(bytes: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    if bytes.len() >= width {
        out.copy_from_slice(&bytes[bytes.len() - width..]);
    } else {
        out[width - bytes.len()..].copy_from_slice(bytes);
    }
    out
}

/// Length of a big-endian encoding once leading zero bytes are removed
pub fn significant_len_be(bytes: &[u8]) -> usize {
    bytes.len() - bytes.iter().take_while(|&&b| b == 0).count()
}
