//! Lazy enumeration of zero-padded decimal candidates.
//!
//! Candidates are produced by incrementing a stack buffer of ASCII digits in
//! place, so enumerating a chunk never materialises the keyspace and costs one
//! `String` allocation per yielded candidate.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::keyspace::{MAX_LENGTH, PasswordLength};

/// Iterator over the candidates of one inclusive numeric range.
///
/// Cloning yields an independent iterator at the same position.
#[derive(Debug, Clone)]
pub struct Candidates {
    digits: [u8; MAX_LENGTH as usize],
    width: usize,
    remaining: u64,
}

/// Enumerates `start..=end` as zero-padded strings of `length` digits, in
/// ascending order.
///
/// Calling it again with the same arguments reproduces the same sequence.
pub fn enumerate(length: PasswordLength, start: u64, end: u64) -> Result<Candidates> {
    if start > end || end > length.max_number() {
        return Err(Error::InvalidRange { start, end, length: length.get() });
    }

    let width = length.width();
    let mut digits = [b'0'; MAX_LENGTH as usize];
    write_digits(&mut digits[..width], start);

    Ok(Candidates { digits, width, remaining: end - start + 1 })
}

/// Zero-padded decimal form of `n`. `n` must fit in `length` digits.
pub fn format_candidate(n: u64, length: PasswordLength) -> String {
    format!("{n:0width$}", width = length.width())
}

/// Inverse of [`format_candidate`]: returns `None` unless `s` is exactly
/// `length` ASCII digits.
pub fn parse_candidate(s: &str, length: PasswordLength) -> Option<u64> {
    if s.len() != length.width() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// Build the digits from right to left; leading positions stay '0'.
#[inline]
fn write_digits(buf: &mut [u8], mut n: u64) {
    let mut pos = buf.len();
    while pos > 0 {
        pos -= 1;
        buf[pos] = (n % 10) as u8 + b'0';
        n /= 10;
    }
}

impl Candidates {
    #[inline]
    fn current(&self) -> String {
        let digits = &self.digits[..self.width];
        // SAFETY: the buffer only ever holds ASCII digits.
        unsafe { std::str::from_utf8_unchecked(digits) }.to_owned()
    }

    #[inline]
    fn advance(&mut self) {
        for d in self.digits[..self.width].iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                return;
            }
        }
    }
}

impl Iterator for Candidates {
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        let candidate = self.current();
        self.remaining -= 1;
        // Skip the increment after the last value so `end` = 10^L - 1 never wraps.
        if self.remaining > 0 {
            self.advance();
        }
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Candidates {}

impl FusedIterator for Candidates {}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(l: u32) -> PasswordLength {
        PasswordLength::new(l).unwrap()
    }

    #[test]
    fn test_enumerate_basic() {
        let got: Vec<String> = enumerate(len(3), 98, 102).unwrap().collect();
        assert_eq!(got, ["098", "099", "100", "101", "102"]);
    }

    #[test]
    fn test_enumerate_count_width_and_order() {
        let l = len(4);
        let (a, b) = (1_234, 5_678);
        let got: Vec<String> = enumerate(l, a, b).unwrap().collect();

        assert_eq!(got.len() as u64, b - a + 1);
        assert!(got.iter().all(|s| s.len() == 4));

        let values: Vec<u64> = got.iter().map(|s| parse_candidate(s, l).unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values.first(), Some(&a));
        assert_eq!(values.last(), Some(&b));
    }

    #[test]
    fn test_enumerate_single_and_full_keyspace() {
        let got: Vec<String> = enumerate(len(2), 7, 7).unwrap().collect();
        assert_eq!(got, ["07"]);

        let all: Vec<String> = enumerate(len(1), 0, 9).unwrap().collect();
        assert_eq!(all, ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_enumerate_top_of_keyspace_does_not_wrap() {
        let l = len(MAX_LENGTH);
        let max = l.max_number();
        let got: Vec<String> = enumerate(l, max - 1, max).unwrap().collect();
        assert_eq!(got, ["999999999999999998", "999999999999999999"]);
    }

    #[test]
    fn test_enumerate_is_restartable() {
        let first: Vec<String> = enumerate(len(5), 300, 420).unwrap().collect();
        let second: Vec<String> = enumerate(len(5), 300, 420).unwrap().collect();
        assert_eq!(first, second);

        let mut it = enumerate(len(5), 300, 420).unwrap();
        it.next();
        let fork = it.clone();
        assert_eq!(it.collect::<Vec<_>>(), fork.collect::<Vec<_>>());
    }

    #[test]
    fn test_enumerate_exact_size() {
        let mut it = enumerate(len(3), 0, 999).unwrap();
        assert_eq!(it.len(), 1000);
        it.next();
        assert_eq!(it.len(), 999);
        let mut it = it.skip(998);
        assert_eq!(it.next().as_deref(), Some("999"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_enumerate_invalid_range() {
        assert!(matches!(
            enumerate(len(8), 5, 3),
            Err(Error::InvalidRange { start: 5, end: 3, length: 8 })
        ));
        // 1000 needs four digits.
        assert!(matches!(enumerate(len(3), 0, 1_000), Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_round_trip_full_keyspace() {
        let l = len(4);
        for n in 0..l.keyspace_size() {
            let s = format_candidate(n, l);
            assert_eq!(s.len(), 4);
            assert_eq!(parse_candidate(&s, l), Some(n));
        }
    }

    #[test]
    fn test_parse_candidate_rejects_malformed() {
        let l = len(4);
        assert_eq!(parse_candidate("042", l), None);
        assert_eq!(parse_candidate("00042", l), None);
        assert_eq!(parse_candidate("+042", l), None);
        assert_eq!(parse_candidate("00a2", l), None);
        assert_eq!(parse_candidate("0042", l), Some(42));
    }
}
