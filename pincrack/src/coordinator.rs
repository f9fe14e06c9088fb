use std::time::{Duration, Instant};

use crate::dispatch::{available_workers, dispatch};
use crate::error::{Error, Result};
use crate::keyspace::PasswordLength;
use crate::oracle::{Algorithm, Digest, Oracle};
use crate::partition::partition;
use crate::worker::{SearchResult, search};

/// Everything a single run needs. Read-only for the run's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub target: Digest,
    pub length: PasswordLength,
    /// `None` uses one worker per available CPU.
    pub workers: Option<usize>,
    pub algorithm: Algorithm,
}

impl RunConfig {
    pub fn new(target: Digest, length: PasswordLength) -> Self {
        Self { target, length, workers: None, algorithm: Algorithm::default() }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// The reduced result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: SearchResult,
    /// Wall-clock time from dispatch to reduction.
    pub elapsed: Duration,
    /// Worker count actually used after clamping to the keyspace.
    pub workers: usize,
    /// Size of the keyspace that was searched.
    pub candidates: u64,
}

impl Outcome {
    pub fn password(&self) -> Option<&str> {
        self.result.password()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Partitions the keyspace, searches every chunk in parallel and reduces the results.
///
/// Chunks are always searched to completion: a match in one chunk does not
/// stop its siblings.
pub struct Cracker<O = Algorithm> {
    config: RunConfig,
    oracle: O,
}

impl Cracker<Algorithm> {
    /// Uses the built-in primitive named by `config.algorithm`.
    pub fn new(config: RunConfig) -> Self {
        Self { oracle: config.algorithm, config }
    }
}

impl<O: Oracle> Cracker<O> {
    /// Uses a caller-supplied oracle; `config.algorithm` is ignored.
    pub fn with_oracle(config: RunConfig, oracle: O) -> Self {
        Self { config, oracle }
    }

    /// Worker count for this run: the configured or detected count, clamped so
    /// that no chunk is empty.
    pub fn resolve_workers(&self) -> Result<usize> {
        let requested = match self.config.workers {
            Some(0) => return Err(Error::InvalidWorkerCount { workers: 0 }),
            Some(n) => n,
            None => available_workers(),
        };
        let keyspace = self.config.length.keyspace_size();
        Ok(usize::try_from(keyspace).map_or(requested, |k| requested.min(k)))
    }

    pub fn run(&self) -> Result<Outcome> {
        let RunConfig { target, length, .. } = self.config;

        if let Some(expected) = self.oracle.digest_len()
            && expected != target.len()
        {
            return Err(Error::DigestLengthMismatch { expected, actual: target.len() });
        }

        let workers = self.resolve_workers()?;
        let chunks = partition(workers, length)?;

        tracing::info!(workers, length = length.get(), %target, "starting search");
        let start = Instant::now();

        let results = dispatch(&chunks, workers, |&chunk| {
            search(&self.oracle, &target, length, chunk)
        })?;

        // Chunk order decides ties; any failure sinks the whole run.
        let mut result = SearchResult::NotFound;
        for chunk_result in results {
            let chunk_result = chunk_result?;
            if !result.is_found() {
                result = chunk_result;
            }
        }

        let elapsed = start.elapsed();
        tracing::info!(found = result.is_found(), elapsed_secs = elapsed.as_secs_f64(), "search finished");

        Ok(Outcome { result, elapsed, workers, candidates: length.keyspace_size() })
    }
}

#[cfg(feature = "tokio")]
impl<O: Oracle + 'static> Cracker<O> {
    /// Runs the search on tokio's blocking pool so an async caller is not stalled.
    pub async fn run_async(self) -> Result<Outcome> {
        tokio::task::spawn_blocking(move || self.run())
            .await
            .map_err(|e| Error::TaskFailed(e.to_string()))?
    }
}

/// Recovers the `length`-digit password behind a SHA-256 `target`, using every available CPU.
pub fn crack(target: Digest, length: PasswordLength) -> Result<Outcome> {
    Cracker::new(RunConfig::new(target, length)).run()
}
