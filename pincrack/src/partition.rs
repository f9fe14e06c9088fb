use std::fmt;

use crate::error::{Error, Result};
use crate::keyspace::PasswordLength;

/// An inclusive, non-empty sub-range of the keyspace assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    pub start: u64,
    pub end: u64,
}

impl Chunk {
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of candidates in the chunk; zero if `start > end`.
    #[inline]
    pub const fn len(&self) -> u64 {
        if self.is_empty() { 0 } else { self.end - self.start + 1 }
    }

    /// A well-formed chunk always holds at least one candidate.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    #[inline]
    pub const fn contains(&self, n: u64) -> bool {
        self.start <= n && n <= self.end
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Splits `[0, 10^L - 1]` into `worker_count` contiguous chunks.
///
/// Every chunk gets `10^L / worker_count` candidates; the last chunk also
/// absorbs the remainder. More workers than candidates would leave chunks
/// empty, so that is rejected along with zero workers.
pub fn partition(worker_count: usize, length: PasswordLength) -> Result<Vec<Chunk>> {
    let max_number = length.max_number();
    let workers = worker_count as u64;

    if workers == 0 || workers > length.keyspace_size() {
        return Err(Error::InvalidWorkerCount { workers: worker_count });
    }

    let chunk_size = (max_number + 1) / workers;

    let chunks: Vec<Chunk> = (0..workers)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i < workers - 1 { (i + 1) * chunk_size - 1 } else { max_number };
            Chunk::new(start, end)
        })
        .collect();

    tracing::debug!(
        workers = worker_count,
        length = length.get(),
        chunk_size,
        last_chunk = %chunks[chunks.len() - 1],
        "partitioned keyspace"
    );

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(l: u32) -> PasswordLength {
        PasswordLength::new(l).unwrap()
    }

    fn assert_exact_cover(chunks: &[Chunk], length: PasswordLength) {
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[chunks.len() - 1].end, length.max_number());
        for c in chunks {
            assert!(!c.is_empty(), "empty chunk {c}");
            assert!(c.contains(c.start) && c.contains(c.end));
        }
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end + 1, pair[1].start, "gap or overlap at {}", pair[0]);
        }
        let total: u64 = chunks.iter().map(Chunk::len).sum();
        assert_eq!(total, length.keyspace_size());
    }

    #[test]
    fn test_partition_even_split() {
        let chunks = partition(4, len(8)).unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk::new(0, 24_999_999),
                Chunk::new(25_000_000, 49_999_999),
                Chunk::new(50_000_000, 74_999_999),
                Chunk::new(75_000_000, 99_999_999),
            ]
        );
    }

    #[test]
    fn test_partition_remainder_goes_to_last_chunk() {
        let chunks = partition(3, len(1)).unwrap();
        assert_eq!(chunks, vec![Chunk::new(0, 2), Chunk::new(3, 5), Chunk::new(6, 9)]);
    }

    #[test]
    fn test_partition_coverage() {
        for l in 1..=6 {
            let length = len(l);
            let max_workers = length.keyspace_size().min(64) as usize;
            for w in 1..=max_workers {
                let chunks = partition(w, length).unwrap();
                assert_eq!(chunks.len(), w);
                assert_exact_cover(&chunks, length);
            }
        }
    }

    #[test]
    fn test_partition_coverage_large_keyspace() {
        let length = len(18);
        for w in [1, 7, 12, 64, 1_000] {
            let chunks = partition(w, length).unwrap();
            assert_eq!(chunks.len(), w);
            assert_exact_cover(&chunks, length);
        }
    }

    #[test]
    fn test_partition_one_candidate_per_worker() {
        let chunks = partition(10, len(1)).unwrap();
        assert!(chunks.iter().enumerate().all(|(i, c)| c.start == i as u64 && c.len() == 1));
    }

    #[test]
    fn test_chunk_len_and_contains() {
        let chunk = Chunk::new(25, 49);
        assert_eq!(chunk.len(), 25);
        assert!(chunk.contains(25) && chunk.contains(49));
        assert!(!chunk.contains(24) && !chunk.contains(50));

        let inverted = Chunk::new(5, 3);
        assert!(inverted.is_empty());
        assert_eq!(inverted.len(), 0);
        assert!(!inverted.contains(4));
    }

    #[test]
    fn test_partition_is_deterministic() {
        assert_eq!(partition(7, len(6)).unwrap(), partition(7, len(6)).unwrap());
    }

    #[test]
    fn test_partition_invalid_worker_count() {
        assert!(matches!(partition(0, len(8)), Err(Error::InvalidWorkerCount { workers: 0 })));
        assert!(matches!(partition(11, len(1)), Err(Error::InvalidWorkerCount { workers: 11 })));
    }
}
