//! Parallel cache-warming engine
//!
//! A single shared stack of pending directories feeds a fixed pool of
//! worker threads that both consume and produce work. Workers batch
//! their own discoveries in private buffers to avoid contending for
//! the shared lock on every entry, and agree that the traversal is
//! complete through the active-worker count checked in the same
//! critical section as the queue itself.
//!
//! # Architecture
//!
//! ```text
//!                  ┌────────────────────────────┐
//!                  │      WarmCoordinator       │
//!                  │  - seeds roots (1 thread)  │
//!                  │  - spawns/joins workers    │
//!                  └─────────────┬──────────────┘
//!                                │
//!                                ▼
//!                  ┌────────────────────────────┐
//!                  │         WorkQueue          │
//!                  │  PathStack + active count  │
//!                  │  (spin or mutex guarded)   │
//!                  └─────────────┬──────────────┘
//!                                │ pop / flush
//!        ┌───────────────────────┼───────────────────────┐
//!        │                       │                       │
//!  ┌─────▼─────┐           ┌─────▼─────┐           ┌─────▼─────┐
//!  │  Worker 1 │           │  Worker 2 │    ...    │  Worker N │
//!  │  expand   │           │  expand   │           │  expand   │
//!  │  + local  │           │  + local  │           │  + local  │
//!  │   buffer  │           │   buffer  │           │   buffer  │
//!  └───────────┘           └───────────┘           └───────────┘
//! ```

pub mod coordinator;
pub mod expand;
pub mod queue;
pub mod stack;
pub mod worker;

pub use coordinator::{WarmCoordinator, WarmResult};
pub use expand::{Expand, FsExpander, MAX_PATH_BYTES};
pub use queue::{LockStrategy, WorkQueue};
pub use stack::PathStack;
pub use worker::Worker;
