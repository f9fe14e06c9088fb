use crate::enumerator::enumerate;
use crate::error::Result;
use crate::keyspace::PasswordLength;
use crate::oracle::{Digest, Oracle};
use crate::partition::Chunk;

/// Outcome of searching one chunk, or of a whole run once reduced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchResult {
    Found(String),
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            SearchResult::Found(p) => Some(p),
            SearchResult::NotFound => None,
        }
    }
}

/// Tests every candidate in `chunk` against `target`, stopping at the first match.
///
/// Knows nothing about other chunks; cancellation is the caller's business.
pub fn search<O>(
    oracle: &O,
    target: &Digest,
    length: PasswordLength,
    chunk: Chunk,
) -> Result<SearchResult>
where
    O: Oracle + ?Sized,
{
    tracing::info!("processing range {} to {}", chunk.start, chunk.end);

    for candidate in enumerate(length, chunk.start, chunk.end)? {
        if oracle.matches(target, &candidate)? {
            tracing::debug!(%chunk, "match found");
            return Ok(SearchResult::Found(candidate));
        }
    }

    tracing::debug!(%chunk, "chunk exhausted");
    Ok(SearchResult::NotFound)
}
