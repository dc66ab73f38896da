//! Worker threads and the termination-detection protocol
//!
//! Each worker loops over the shared queue: pull one directory, expand
//! it, accumulate discovered subdirectories in a private buffer, and
//! flush that buffer back to the shared queue at the top of the next
//! iteration. Expansion happens outside the lock; only the queue
//! decision holds it.
//!
//! Termination is detected without a coordinator. A worker is in one of
//! three states:
//!
//! - **active**: holds or is about to take an item;
//! - **starved**: saw an empty queue while others were still active;
//! - **done**: saw an empty queue with no active workers left.
//!
//! The active count equals the number of workers that may still produce
//! work. Because a worker flushes its local buffer and decrements the
//! count in the same critical section as the emptiness check, "queue
//! empty and count zero" can only be observed when no undischarged work
//! exists anywhere: no premature termination. And because starved
//! workers release the lock and yield between retries, every worker
//! keeps reaching the decision point: no deadlock.

use crate::error::WorkerError;
use crate::walker::expand::Expand;
use crate::walker::queue::WorkQueue;
use crate::walker::stack::PathStack;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Outcome of one queue decision, computed under the lock.
enum Step {
    /// Took a path; expand it outside the lock.
    Expand(std::path::PathBuf),
    /// Queue empty but others are still active; yield and retry.
    Starve,
    /// Queue empty and nobody can produce more; exit.
    Done,
}

/// A spawned worker thread.
pub struct Worker {
    id: usize,
    handle: Option<JoinHandle<u64>>,
}

impl Worker {
    /// Spawn a worker over the shared queue.
    ///
    /// `local_capacity` pre-sizes the worker's private discovery
    /// buffer, mirroring the shared queue's initial capacity.
    pub fn spawn(
        id: usize,
        queue: Arc<WorkQueue>,
        expander: Arc<dyn Expand>,
        local_capacity: usize,
    ) -> Result<Self, WorkerError> {
        let handle = thread::Builder::new()
            .name(format!("warm-{id}"))
            .spawn(move || worker_loop(id, &queue, expander.as_ref(), local_capacity))
            .map_err(|e| WorkerError::SpawnFailed {
                id,
                reason: e.to_string(),
            })?;

        Ok(Self {
            id,
            handle: Some(handle),
        })
    }

    /// Worker ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Wait for the worker and return its entry count.
    pub fn join(mut self) -> Result<u64, WorkerError> {
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| WorkerError::Panicked { id: self.id }),
            None => Ok(0),
        }
    }
}

/// Main worker loop. Returns the number of entries this worker
/// processed.
fn worker_loop(
    id: usize,
    queue: &WorkQueue,
    expander: &dyn Expand,
    local_capacity: usize,
) -> u64 {
    let mut local = PathStack::with_capacity(local_capacity);
    let mut starved = false;
    let mut count: u64 = 0;

    debug!(worker = id, "worker starting");

    loop {
        // The whole decision happens in one critical section: flush,
        // count transition, emptiness check, pop. Splitting any of
        // these across acquisitions would let termination race hidden
        // work in another worker's buffer.
        let step = queue.with(|state| {
            if !local.is_empty() {
                local.drain_into(&mut state.stack);
            }

            // Leaving the active set to decide; a starved worker
            // already left on an earlier iteration and must not be
            // double-counted.
            if !starved {
                state.active -= 1;
            }

            match state.stack.pop() {
                Some(path) => {
                    state.active += 1;
                    Step::Expand(path)
                }
                None if state.active <= 0 => Step::Done,
                None => Step::Starve,
            }
        });

        match step {
            Step::Expand(path) => {
                starved = false;
                count += expander.expand(&path, &mut local) as u64;
            }
            Step::Starve => {
                starved = true;
                // Others are still producing; don't burn the core
                // while waiting for them.
                thread::yield_now();
            }
            Step::Done => break,
        }
    }

    debug!(worker = id, entries = count, "worker finished");
    count
}
