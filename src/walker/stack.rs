//! Growable LIFO container for pending directory paths
//!
//! `PathStack` is the leaf data structure of the walker: an owned,
//! append-only-until-popped sequence of paths with explicit doubling
//! growth. It carries no locking of its own; the shared instance is
//! guarded by the work queue's critical section and local instances are
//! owned by exactly one worker.

use std::path::PathBuf;

/// A growable stack of owned filesystem paths.
///
/// Capacity only grows, by doubling, and never shrinks during the
/// stack's lifetime. Service order is LIFO: the most recently pushed
/// path is popped first, which keeps traversal depth-first-ish and the
/// queue small under deep trees.
#[derive(Debug, Default)]
pub struct PathStack {
    items: Vec<PathBuf>,
}

impl PathStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` paths.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Grow capacity by doubling until it is at least `need`.
    ///
    /// No-op when current capacity is already sufficient.
    pub fn ensure_capacity(&mut self, need: usize) {
        let mut cap = self.items.capacity().max(1);
        if cap >= need {
            return;
        }
        while cap < need {
            cap *= 2;
        }
        self.items.reserve_exact(cap - self.items.len());
    }

    /// Append a path at the top of the stack.
    pub fn push(&mut self, path: PathBuf) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push(path);
    }

    /// Remove and return the most recently pushed path.
    pub fn pop(&mut self) -> Option<PathBuf> {
        self.items.pop()
    }

    /// Bulk-move every path into `other`, appended after its existing
    /// items, leaving `self` empty but with its capacity intact.
    pub fn drain_into(&mut self, other: &mut PathStack) {
        other.ensure_capacity(other.items.len() + self.items.len());
        other.items.append(&mut self.items);
    }

    /// Number of paths currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no paths are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current capacity in paths.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}
