use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};

/// Worker count used when the platform cannot report its parallelism.
pub const DEFAULT_WORKERS: usize = 4;

/// Number of parallel execution contexts available to this process.
pub fn available_workers() -> usize {
    std::thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(DEFAULT_WORKERS)
}

/// Runs `f` over every item on a fixed pool of `worker_count` scoped threads.
///
/// Threads pull the next item index from a shared cursor until the list is
/// drained, so a pool smaller than the item list still makes progress on all
/// of it. Results come back in input order regardless of completion order. A
/// panic in `f` is re-raised on the calling thread once the pool has stopped.
pub fn dispatch<T, R, F>(items: &[T], worker_count: usize, f: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    if worker_count == 0 {
        return Err(Error::InvalidWorkerCount { workers: worker_count });
    }

    let threads = worker_count.min(items.len());
    let next = AtomicUsize::new(0);
    let mut slots: Vec<Option<R>> = (0..items.len()).map(|_| None).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    let mut done = Vec::new();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(item) = items.get(i) else { break };
                        done.push((i, f(item)));
                    }
                    done
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(done) => {
                    for (i, r) in done {
                        slots[i] = Some(r);
                    }
                }
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });

    Ok(slots.into_iter().flatten().collect())
}
