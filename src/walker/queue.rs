//! Shared work queue and its synchronization strategy
//!
//! The queue is the single point of coordination between workers: a
//! [`PathStack`] of pending directories plus the active-worker count,
//! both guarded by one mutual-exclusion strategy chosen at startup.
//!
//! Two strategies are supported with identical mutual-exclusion and
//! visibility guarantees:
//!
//! - **Spin**: a test-and-set flag, busy-waiting on acquisition. No
//!   blocking syscalls; lowest latency under light contention.
//! - **Mutex**: a kernel-level mutex that suspends contended threads.
//!
//! The active-worker count is mutated only inside the same critical
//! section as the queue itself, so count transitions and emptiness
//! checks are atomic with respect to each other. That pairing is what
//! the termination protocol in [`worker`](crate::walker::worker) relies
//! on.

use crate::walker::stack::PathStack;
use clap::ValueEnum;
use parking_lot::lock_api::{self, GuardSend, RawMutex};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Mutual-exclusion strategy for the shared work queue.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockStrategy {
    /// Busy-wait on a test-and-set flag (no blocking syscalls).
    #[default]
    Spin,
    /// Suspend contended threads on a kernel mutex.
    Mutex,
}

/// Raw test-and-set spin lock.
///
/// Acquisition spins with a test-and-test-and-set loop; release is a
/// plain store. Acquire/release ordering makes writes made under the
/// lock visible to the next holder, matching the mutex variant.
pub struct RawSpinLock {
    locked: AtomicBool,
}

unsafe impl RawMutex for RawSpinLock {
    const INIT: RawSpinLock = RawSpinLock {
        locked: AtomicBool::new(false),
    };

    type GuardMarker = GuardSend;

    fn lock(&self) {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            while self.locked.load(Ordering::Relaxed) {
                std::hint::spin_loop();
            }
        }
    }

    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }
}

type SpinMutex<T> = lock_api::Mutex<RawSpinLock, T>;

/// State guarded by the queue's critical section.
///
/// Invariant: every read or mutation of either field happens while the
/// queue's lock is held.
#[derive(Debug)]
pub struct QueueState {
    /// Pending directories, served LIFO.
    pub stack: PathStack,

    /// Workers currently able to make progress (holding or about to
    /// process an item). Ranges over `0..=worker_count`; it is the sole
    /// termination signal.
    pub active: isize,
}

enum Guarded {
    Spin(SpinMutex<QueueState>),
    Mutex(Mutex<QueueState>),
}

/// The shared work queue: pending paths plus the active-worker count
/// behind a single injected synchronization strategy.
pub struct WorkQueue {
    inner: Guarded,
}

impl WorkQueue {
    /// Create a queue with the given strategy and initial capacity,
    /// with the active count primed to `worker_count`.
    ///
    /// The count is set before any worker exists so that seeding the
    /// queue cannot race a worker's first termination check.
    pub fn new(strategy: LockStrategy, capacity: usize, worker_count: usize) -> Self {
        let state = QueueState {
            stack: PathStack::with_capacity(capacity),
            active: worker_count as isize,
        };

        let inner = match strategy {
            LockStrategy::Spin => Guarded::Spin(SpinMutex::new(state)),
            LockStrategy::Mutex => Guarded::Mutex(Mutex::new(state)),
        };

        Self { inner }
    }

    /// Run `f` inside the queue's critical section.
    ///
    /// This is the only way to touch the queue state; holding the whole
    /// worker decision (flush, count transition, emptiness check, pop)
    /// in one call keeps the termination protocol race-free.
    pub fn with<R>(&self, f: impl FnOnce(&mut QueueState) -> R) -> R {
        match &self.inner {
            Guarded::Spin(m) => f(&mut *m.lock()),
            Guarded::Mutex(m) => f(&mut *m.lock()),
        }
    }

    /// Number of pending paths.
    pub fn len(&self) -> usize {
        self.with(|state| state.stack.len())
    }

    /// True when no paths are pending.
    pub fn is_empty(&self) -> bool {
        self.with(|state| state.stack.is_empty())
    }
}
