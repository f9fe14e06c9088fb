//! Digest oracle: the one-way hash primitive and the equality check built on it.

use std::fmt;
use std::str::FromStr;

use sha1::Sha1;
use sha2::Digest as _;
use sha2::Sha256;

use crate::conversion::{decode_hex, encode_hex};
use crate::error::{Error, Result};

/// Largest digest the oracle can hold inline (SHA-256 output).
pub const MAX_DIGEST_LEN: usize = 32;

/// A hash digest, stored inline so computing one per candidate does not allocate.
///
/// Unused trailing bytes are always zero, so the derived equality matches
/// equality of the canonical hex form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_LEN],
    len: u8,
}

impl Digest {
    /// Builds a digest from raw bytes. Fails if longer than [`MAX_DIGEST_LEN`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() > MAX_DIGEST_LEN {
            return Err(Error::InvalidDigest(format!(
                "{} bytes does not fit a digest (1..={MAX_DIGEST_LEN})",
                bytes.len()
            )));
        }
        let mut buf = [0u8; MAX_DIGEST_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { bytes: buf, len: bytes.len() as u8 })
    }

    /// Parses a hex digest, accepting either case.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_slice(&decode_hex(hex)?)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for a constructed digest.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Canonical lowercase hex form.
    pub fn to_hex(&self) -> String {
        encode_hex(self.as_bytes())
    }

    #[inline]
    fn from_array<const N: usize>(arr: [u8; N]) -> Self {
        let mut buf = [0u8; MAX_DIGEST_LEN];
        buf[..N].copy_from_slice(&arr);
        Self { bytes: buf, len: N as u8 }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Computes digests of candidate passwords.
///
/// Implementations must be deterministic: the same input always yields the
/// same digest. A failure is fatal to the whole search.
pub trait Oracle: Send + Sync {
    fn compute_digest(&self, password: &str) -> Result<Digest>;

    /// Returns true iff `candidate` hashes to `target`.
    ///
    /// Plain equality is fine here: in a brute-force search the caller already
    /// controls both sides of the comparison.
    #[inline]
    fn matches(&self, target: &Digest, candidate: &str) -> Result<bool> {
        Ok(self.compute_digest(candidate)? == *target)
    }

    /// Output length in bytes, if fixed. Used to reject a mismatched target up front.
    fn digest_len(&self) -> Option<usize> {
        None
    }
}

/// Built-in hash primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Sha256,
    Sha1,
}

impl Algorithm {
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Sha256 => 32,
            Algorithm::Sha1 => 20,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha1 => "sha1",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            "sha1" | "sha-1" => Ok(Algorithm::Sha1),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Oracle for Algorithm {
    #[inline]
    fn compute_digest(&self, password: &str) -> Result<Digest> {
        Ok(compute_digest(*self, password))
    }

    fn digest_len(&self) -> Option<usize> {
        Some(self.output_len())
    }
}

/// Hashes `password` with the given built-in algorithm.
#[inline]
pub fn compute_digest(algorithm: Algorithm, password: &str) -> Digest {
    match algorithm {
        Algorithm::Sha256 => {
            let hash: [u8; 32] = Sha256::digest(password.as_bytes()).into();
            Digest::from_array(hash)
        }
        Algorithm::Sha1 => {
            let hash: [u8; 20] = Sha1::digest(password.as_bytes()).into();
            Digest::from_array(hash)
        }
    }
}
