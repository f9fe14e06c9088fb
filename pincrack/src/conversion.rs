use crate::error::{Error, Result};

/// Lowercase hex lookup table.
pub const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Convert hex ASCII character to nibble value (0-15)
#[inline]
pub fn hex_to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Encode bytes as a lowercase hex string.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_CHARS[(b >> 4) as usize] as char);
        out.push(HEX_CHARS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode a hex string (either case) into bytes.
///
/// Surrounding whitespace is ignored so digests pasted from `sha256sum`
/// output or a file with a trailing newline parse cleanly.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim().as_bytes();
    if s.is_empty() {
        return Err(Error::InvalidDigest("empty hex string".to_string()));
    }
    if s.len() % 2 != 0 {
        return Err(Error::InvalidDigest(format!("odd number of hex digits ({})", s.len())));
    }

    s.chunks_exact(2)
        .map(|pair| match (hex_to_nibble(pair[0]), hex_to_nibble(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(Error::InvalidDigest(format!(
                "invalid hex character in '{}'",
                String::from_utf8_lossy(pair)
            ))),
        })
        .collect()
}
