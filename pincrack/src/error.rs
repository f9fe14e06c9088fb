#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("password length {length} is out of range (1..={max})", max = crate::MAX_LENGTH)]
    InvalidLength { length: u32 },

    #[error("invalid worker count {workers}")]
    InvalidWorkerCount { workers: usize },

    #[error("invalid range {start}..={end} for {length}-digit keyspace")]
    InvalidRange { start: u64, end: u64, length: u32 },

    #[error("oracle failed on candidate {candidate}: {reason}")]
    OracleFailure { candidate: String, reason: String },

    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    #[error("digest is {actual} bytes, expected {expected}")]
    DigestLengthMismatch { expected: usize, actual: usize },

    #[error("unknown hash algorithm '{0}' (expected sha256 or sha1)")]
    UnknownAlgorithm(String),

    #[error("search task failed: {0}")]
    TaskFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
