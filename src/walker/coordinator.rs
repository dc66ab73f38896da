//! Warm coordinator - orchestrates the parallel cache-warming run
//!
//! The coordinator owns the run lifecycle:
//! - builds the shared work queue with the selected lock strategy
//! - seeds it by expanding every root itself, single-threaded, before
//!   any worker exists (so the active count can be primed to the worker
//!   count without racing the seed step)
//! - spawns and joins the workers
//! - sums per-worker counts with its own seeding count into the total

use crate::config::WarmConfig;
use crate::error::{Result, WorkerError};
use crate::walker::expand::{Expand, FsExpander};
use crate::walker::queue::WorkQueue;
use crate::walker::stack::PathStack;
use crate::walker::worker::Worker;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of a completed warming run.
#[derive(Debug)]
pub struct WarmResult {
    /// Total entries processed: each root itself plus every entry
    /// discovered beneath the roots.
    pub total_entries: u64,

    /// Portion of the total contributed by the seeding pass.
    pub seeded: u64,

    /// Per-worker entry counts, indexed by worker ID.
    pub worker_counts: Vec<u64>,

    /// Wall-clock duration of the run.
    pub duration: Duration,
}

/// Coordinates the parallel warming run.
pub struct WarmCoordinator {
    config: Arc<WarmConfig>,
    queue: Arc<WorkQueue>,
    expander: Arc<dyn Expand>,
}

impl WarmCoordinator {
    /// Create a coordinator from a validated configuration.
    pub fn new(config: WarmConfig) -> Self {
        let queue = Arc::new(WorkQueue::new(
            config.lock_strategy,
            config.queue_capacity,
            config.worker_count,
        ));
        let expander: Arc<dyn Expand> = Arc::new(FsExpander::new(config.print));

        Self {
            config: Arc::new(config),
            queue,
            expander,
        }
    }

    /// Run the warming pass to completion.
    pub fn run(self) -> Result<WarmResult> {
        let start = Instant::now();

        info!(
            roots = self.config.roots.len(),
            workers = self.config.worker_count,
            strategy = ?self.config.lock_strategy,
            "starting warming run"
        );

        let seeded = self.seed();
        debug!(
            seeded = seeded,
            pending = self.queue.len(),
            "queue seeded"
        );

        // Spawn workers
        let mut workers = Vec::with_capacity(self.config.worker_count);
        for id in 0..self.config.worker_count {
            workers.push(Worker::spawn(
                id,
                Arc::clone(&self.queue),
                Arc::clone(&self.expander),
                self.config.queue_capacity,
            )?);
        }
        debug!(count = workers.len(), "workers spawned");

        // Join all workers before surfacing any failure, so a single
        // panic doesn't leave threads running detached
        let mut worker_counts = Vec::with_capacity(workers.len());
        let mut failure: Option<WorkerError> = None;
        for worker in workers {
            match worker.join() {
                Ok(count) => worker_counts.push(count),
                Err(e) => {
                    warn!(error = %e, "worker failed");
                    failure = Some(e);
                }
            }
        }
        if let Some(e) = failure {
            return Err(e.into());
        }

        let total_entries = seeded + worker_counts.iter().sum::<u64>();
        let duration = start.elapsed();

        info!(
            total = total_entries,
            duration_ms = duration.as_millis() as u64,
            "warming run complete"
        );

        Ok(WarmResult {
            total_entries,
            seeded,
            worker_counts,
            duration,
        })
    }

    /// Expand every root once, single-threaded, pushing discovered
    /// directories into the shared queue.
    ///
    /// Each root counts 1 for itself plus its direct entries; a root
    /// that does not exist still counts itself and contributes nothing
    /// else, per the best-effort skip policy.
    fn seed(&self) -> u64 {
        let mut seeded: u64 = 0;
        let mut discovered = PathStack::with_capacity(self.config.queue_capacity);

        for root in &self.config.roots {
            if !root.exists() {
                warn!(root = %root.display(), "root does not exist");
            }
            seeded += 1;
            seeded += self.expander.expand(root, &mut discovered) as u64;
        }

        self.queue.with(|state| discovered.drain_into(&mut state.stack));
        seeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::queue::LockStrategy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config_for(roots: Vec<PathBuf>, workers: usize, strategy: LockStrategy) -> WarmConfig {
        WarmConfig {
            roots,
            worker_count: workers,
            queue_capacity: 16,
            lock_strategy: strategy,
            print: false,
            show_summary: false,
            verbose: false,
        }
    }

    #[test]
    fn test_pinned_scenario_counts_five() {
        // R contains dirs A, B and file f; A contains g; B is empty.
        // Total = R itself (1) + R's children (3) + A's child (1) = 5.
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("a")).unwrap();
        fs::create_dir(root.join("b")).unwrap();
        fs::write(root.join("f"), "").unwrap();
        fs::write(root.join("a/g"), "").unwrap();

        let config = config_for(vec![root.to_path_buf()], 1, LockStrategy::Spin);
        let result = WarmCoordinator::new(config).run().unwrap();

        assert_eq!(result.total_entries, 5);
        assert_eq!(result.seeded, 4);
    }

    #[test]
    fn test_empty_root_counts_itself() {
        let dir = tempdir().unwrap();
        let config = config_for(vec![dir.path().to_path_buf()], 2, LockStrategy::Mutex);
        let result = WarmCoordinator::new(config).run().unwrap();

        assert_eq!(result.total_entries, 1);
    }

    #[test]
    fn test_missing_root_counts_itself_only() {
        let config = config_for(
            vec![PathBuf::from("/no/such/warmdents/root")],
            2,
            LockStrategy::Spin,
        );
        let result = WarmCoordinator::new(config).run().unwrap();

        assert_eq!(result.total_entries, 1);
    }

    #[test]
    fn test_worker_counts_sum_into_total() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for i in 0..4 {
            let sub = root.join(format!("sub{i}"));
            fs::create_dir(&sub).unwrap();
            fs::write(sub.join("file"), "").unwrap();
        }

        let config = config_for(vec![root.to_path_buf()], 3, LockStrategy::Spin);
        let result = WarmCoordinator::new(config).run().unwrap();

        let worker_sum: u64 = result.worker_counts.iter().sum();
        assert_eq!(result.total_entries, result.seeded + worker_sum);
        // root (1) + 4 subdirs (4) + 4 files (4)
        assert_eq!(result.total_entries, 9);
    }
}
