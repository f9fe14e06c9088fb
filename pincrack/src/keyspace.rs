use std::fmt;

use crate::error::{Error, Result};

/// Longest supported password. 10^18 is the largest power of ten whose chunk
/// arithmetic stays inside `u64`.
pub const MAX_LENGTH: u32 = 18;

/// Number of decimal digits in every candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordLength(u32);

impl PasswordLength {
    pub fn new(length: u32) -> Result<Self> {
        if length == 0 || length > MAX_LENGTH {
            return Err(Error::InvalidLength { length });
        }
        Ok(Self(length))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn width(self) -> usize {
        self.0 as usize
    }

    /// Number of candidates: 10^L.
    #[inline]
    pub const fn keyspace_size(self) -> u64 {
        10u64.pow(self.0)
    }

    /// Largest candidate value: 10^L - 1.
    #[inline]
    pub const fn max_number(self) -> u64 {
        self.keyspace_size() - 1
    }
}

impl TryFrom<u32> for PasswordLength {
    type Error = Error;

    fn try_from(length: u32) -> Result<Self> {
        Self::new(length)
    }
}

impl fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
