//! warmdents - Concurrent dentry/inode cache warmer
//!
//! Walks one or more directory trees in parallel for the sole purpose
//! of forcing the kernel to populate its directory-entry and inode
//! metadata caches ahead of real workloads. Nothing is stored; the
//! only output is the count of entries touched.
//!
//! # Features
//!
//! - **Shared work stack**: all workers take from and add to a single
//!   LIFO queue, which keeps traversal cache-friendly and the queue
//!   small under deep trees.
//!
//! - **Coordinator-free termination**: workers agree the traversal is
//!   done through an active-worker count checked atomically with queue
//!   emptiness, with no central authority polling them.
//!
//! - **Pluggable locking**: the shared queue is guarded by either a
//!   test-and-set spin lock or a kernel mutex, selected at startup.
//!
//! - **Best-effort by design**: unreadable subtrees are skipped
//!   silently; warming is advisory, not correctness-critical.
//!
//! # Example
//!
//! ```bash
//! # Warm a tree with one worker per core
//! warmdents /data
//!
//! # 16 workers, mutex locking, print every path
//! warmdents -j 16 --lock mutex -p /data /home
//! ```

pub mod config;
pub mod error;
pub mod progress;
pub mod walker;

pub use config::{CliArgs, WarmConfig};
pub use error::{Result, WarmError};
pub use walker::{LockStrategy, WarmCoordinator, WarmResult};
