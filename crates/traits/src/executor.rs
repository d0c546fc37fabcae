//! Executor trait for fanning analysis work out over independent jobs.
//!
//! Call sites and documents are analysed independently of each other, so the
//! analyzer hands them to an `Executor` instead of picking a threading model
//! itself.

use std::fmt::Debug;
use thiserror::Error;

/// Error raised when an executor cannot be provided.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Executor error: {message}")]
pub struct ExecutorError {
    pub message: String,
}

impl ExecutorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Runs a batch of independent work items, potentially in parallel.
///
/// # Implementations
///
/// - `SyncExecutor`: sequential, always available
/// - `RayonExecutor`: work-stealing thread pool (`bindpath-executor`, feature `rayon`)
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. Results come back in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Like `execute_all`, for work that may fail. One failure does not stop
    /// the other items.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// Human-readable name, for logging.
    fn name(&self) -> &'static str;
}

/// Processes items one after another on the calling thread.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}
