//! Error types for warmdents
//!
//! Warming is best-effort by design, so per-path failures never show up
//! here - unreadable subtrees are skipped inside the expander. What
//! remains are the conditions the core cannot recover from:
//! configuration the user must fix, and resource exhaustion (a worker
//! thread that cannot be created, or one that died).

use thiserror::Error;

/// Top-level error type for the warmdents application
#[derive(Error, Debug)]
pub enum WarmError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Worker/concurrency errors
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid worker count
    #[error("Invalid worker count {count}: must be between 1 and {max}")]
    InvalidWorkerCount { count: usize, max: usize },

    /// Invalid queue capacity
    #[error("Invalid queue size {size}: must be at least {min}")]
    InvalidQueueSize { size: usize, min: usize },
}

/// Worker thread errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Thread creation failed
    #[error("Failed to spawn worker {id}: {reason}")]
    SpawnFailed { id: usize, reason: String },

    /// Worker panicked
    #[error("Worker {id} panicked")]
    Panicked { id: usize },
}

/// Result type alias for WarmError
pub type Result<T> = std::result::Result<T, WarmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let worker_err = WorkerError::Panicked { id: 3 };
        let warm_err: WarmError = worker_err.into();
        assert!(matches!(warm_err, WarmError::Worker(_)));
    }

    #[test]
    fn test_error_messages_name_the_limit() {
        let err = ConfigError::InvalidWorkerCount { count: 0, max: 512 };
        assert!(err.to_string().contains("between 1 and 512"));
    }
}
