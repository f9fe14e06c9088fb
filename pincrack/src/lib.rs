//! Parallel brute-force recovery of fixed-length numeric passwords.
//!
//! Given the digest of an `L`-digit PIN (zero-padded, so `"00000042"` is a
//! distinct password from `"42"`), this library searches the whole keyspace
//! `[0, 10^L - 1]` for the preimage. The keyspace is split into one contiguous
//! chunk per worker; each worker walks its chunk in ascending order and stops
//! at its own first match. Workers share nothing mutable and are never
//! cancelled, so once one finds the password the others still finish their
//! chunks. The lowest chunk's match wins.
//!
//! ```no_run
//! use pincrack::{Algorithm, Cracker, PasswordLength, RunConfig, compute_digest};
//!
//! let target = compute_digest(Algorithm::Sha256, "00000042");
//! let length = PasswordLength::new(8)?;
//! let outcome = Cracker::new(RunConfig::new(target, length).with_workers(4)).run()?;
//!
//! assert_eq!(outcome.password(), Some("00000042"));
//! println!("took {:.2}s", outcome.elapsed_secs());
//! # Ok::<(), pincrack::Error>(())
//! ```
//!
//! Enable the `tokio` feature for [`Cracker::run_async`], which moves the
//! blocking search onto tokio's blocking thread pool.

pub mod conversion;
pub mod coordinator;
pub mod dispatch;
pub mod enumerator;
pub mod error;
pub mod keyspace;
pub mod oracle;
pub mod partition;
pub mod worker;

pub use coordinator::{Cracker, Outcome, RunConfig, crack};
pub use dispatch::{DEFAULT_WORKERS, available_workers, dispatch};
pub use enumerator::{Candidates, enumerate, format_candidate, parse_candidate};
pub use error::{Error, Result};
pub use keyspace::{MAX_LENGTH, PasswordLength};
pub use oracle::{Algorithm, Digest, MAX_DIGEST_LEN, Oracle, compute_digest};
pub use partition::{Chunk, partition};
pub use worker::{SearchResult, search};
