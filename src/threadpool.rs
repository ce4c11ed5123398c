//! Fixed-size worker pool for the batch orchestrator's measured phase.
//!
//! Unlike `rayon`'s own work-stealing `par_iter` (used elsewhere in this
//! crate, e.g. `blur::blur_inplace`), the orchestrator's Phase 2 must satisfy
//! a specific contract: a fixed number of OS threads, no job queue, and the
//! only cross-worker synchronization a single shared atomic counter that
//! each worker fetch-adds to claim its next task index. `WorkerPool` is that
//! contract, built the same way `lz4r::threadpool::TPool` wraps a bounded
//! number of OS threads behind a small API.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A pool of exactly `nb_threads` workers that race to claim indices
/// `0..total` from a shared atomic counter, each running `job(index)` once
/// per claimed index. Blocks until every index has been claimed and every
/// worker has returned.
pub struct WorkerPool {
    nb_threads: usize,
}

impl WorkerPool {
    /// `nb_threads` is clamped to at least 1.
    pub fn new(nb_threads: usize) -> Self {
        WorkerPool {
            nb_threads: nb_threads.max(1),
        }
    }

    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }

    /// Runs `job(i)` once for every `i` in `0..total`, distributed across
    /// this pool's worker threads purely by atomic fetch-add contention —
    /// no work-stealing, no queue. `job` must be safe to call concurrently
    /// from any thread for any index.
    pub fn dispatch_each<F>(&self, total: usize, job: F)
    where
        F: Fn(usize) + Sync,
    {
        if total == 0 {
            return;
        }
        let next = AtomicUsize::new(0);
        let workers = self.nb_threads.min(total);
        std::thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= total {
                        break;
                    }
                    job(i);
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn visits_every_index_exactly_once() {
        let pool = WorkerPool::new(4);
        let seen = Mutex::new(vec![false; 37]);
        pool.dispatch_each(37, |i| {
            seen.lock().unwrap()[i] = true;
        });
        assert!(seen.into_inner().unwrap().into_iter().all(|v| v));
    }

    #[test]
    fn zero_tasks_is_a_no_op() {
        let pool = WorkerPool::new(4);
        pool.dispatch_each(0, |_| panic!("job must not run"));
    }

    #[test]
    fn clamps_thread_count_to_at_least_one() {
        let pool = WorkerPool::new(0);
        assert_eq!(pool.nb_threads(), 1);
    }
}
