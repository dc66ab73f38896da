//! Configuration types for warmdents
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation

use crate::error::ConfigError;
use crate::walker::queue::LockStrategy;
use clap::Parser;
use std::path::PathBuf;

/// Maximum reasonable worker count
const MAX_WORKERS: usize = 512;

/// Minimum initial queue capacity
const MIN_QUEUE_SIZE: usize = 1;

/// Concurrently warm dentry and inode caches of directory trees
#[derive(Parser, Debug, Clone)]
#[command(
    name = "warmdents",
    version,
    about = "Concurrently warm dentry and inode caches of PATH(s)",
    long_about = "Walks one or more directory trees in parallel, listing every directory\n\
                  and touching every entry's metadata so the kernel populates its\n\
                  dentry and inode caches ahead of real workloads.\n\n\
                  Prints the total number of processed entries to standard error.",
    after_help = "EXAMPLES:\n    \
        warmdents /data\n    \
        warmdents -j 16 /data /home\n    \
        warmdents --lock mutex -s 4096 /mnt/share\n    \
        warmdents -p /data | wc -l"
)]
pub struct CliArgs {
    /// Directory trees to warm
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Number of worker threads
    #[arg(
        short = 'j',
        long = "num-threads",
        default_value_t = default_workers(),
        value_name = "NUM"
    )]
    pub num_threads: usize,

    /// Initial capacity of the shared queue and per-worker buffers
    #[arg(
        short = 's',
        long = "init-queue-size",
        default_value = "1024",
        value_name = "NUM"
    )]
    pub init_queue_size: usize,

    /// Synchronization strategy for the shared queue
    #[arg(long = "lock", value_enum, default_value_t = LockStrategy::Spin, value_name = "STRATEGY")]
    pub lock: LockStrategy,

    /// Print every visited path to stdout
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Quiet mode - suppress the summary (the bare total still goes to stderr)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (per-worker debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn default_workers() -> usize {
    num_cpus::get()
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct WarmConfig {
    /// Root paths to warm
    pub roots: Vec<PathBuf>,

    /// Number of worker threads
    pub worker_count: usize,

    /// Initial queue capacity (shared queue and per-worker buffers)
    pub queue_capacity: usize,

    /// Synchronization strategy for the shared queue
    pub lock_strategy: LockStrategy,

    /// Echo every visited path to stdout
    pub print: bool,

    /// Show the styled header and summary
    pub show_summary: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl WarmConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.num_threads == 0 || args.num_threads > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount {
                count: args.num_threads,
                max: MAX_WORKERS,
            });
        }

        if args.init_queue_size < MIN_QUEUE_SIZE {
            return Err(ConfigError::InvalidQueueSize {
                size: args.init_queue_size,
                min: MIN_QUEUE_SIZE,
            });
        }

        // Roots are not validated for existence: warming is best-effort
        // and a missing root simply expands to nothing.
        Ok(Self {
            roots: args.paths,
            worker_count: args.num_threads,
            queue_capacity: args.init_queue_size,
            lock_strategy: args.lock,
            print: args.print,
            show_summary: !args.quiet,
            verbose: args.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(paths: &[&str]) -> CliArgs {
        CliArgs {
            paths: paths.iter().map(PathBuf::from).collect(),
            num_threads: 4,
            init_queue_size: 1024,
            lock: LockStrategy::Spin,
            print: false,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = WarmConfig::from_args(args_for(&["/data"])).unwrap();
        assert_eq!(config.worker_count, 4);
        assert_eq!(config.queue_capacity, 1024);
        assert_eq!(config.lock_strategy, LockStrategy::Spin);
        assert!(config.show_summary);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut args = args_for(&["/data"]);
        args.num_threads = 0;
        assert!(matches!(
            WarmConfig::from_args(args),
            Err(ConfigError::InvalidWorkerCount { .. })
        ));
    }

    #[test]
    fn test_excessive_workers_rejected() {
        let mut args = args_for(&["/data"]);
        args.num_threads = MAX_WORKERS + 1;
        assert!(WarmConfig::from_args(args).is_err());
    }

    #[test]
    fn test_zero_queue_size_rejected() {
        let mut args = args_for(&["/data"]);
        args.init_queue_size = 0;
        assert!(matches!(
            WarmConfig::from_args(args),
            Err(ConfigError::InvalidQueueSize { .. })
        ));
    }

    #[test]
    fn test_cli_parsing_defaults() {
        let args = CliArgs::try_parse_from(["warmdents", "/data"]).unwrap();
        assert_eq!(args.paths, vec![PathBuf::from("/data")]);
        assert_eq!(args.init_queue_size, 1024);
        assert_eq!(args.lock, LockStrategy::Spin);
        assert!(!args.print);
    }

    #[test]
    fn test_cli_requires_a_path() {
        assert!(CliArgs::try_parse_from(["warmdents"]).is_err());
    }

    #[test]
    fn test_cli_lock_strategy_values() {
        let args = CliArgs::try_parse_from(["warmdents", "--lock", "mutex", "/data"]).unwrap();
        assert_eq!(args.lock, LockStrategy::Mutex);
    }
}
