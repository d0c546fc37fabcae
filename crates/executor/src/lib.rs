//! Executor implementations for binding-expression analysis.
//!
//! ## Available Executors
//!
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)
//! - [`SyncExecutor`]: Sequential execution (re-exported from bindpath-traits)
//!
//! ## Usage
//!
//! ```ignore
//! use bindpath_executor::ExecutorImpl;
//! use bindpath_traits::Executor;
//!
//! let executor = ExecutorImpl::for_parallelism(true);
//! let lengths = executor.execute_all(vec!["a.cs", "b.cs"], |name| name.len());
//! ```

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use bindpath_traits::{Executor, ExecutorError, SyncExecutor};

/// Holds one of the concrete executors.
///
/// `Executor` has generic methods and cannot be a trait object, so callers
/// that pick the executor at runtime go through this enum.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),

    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// The parallel executor, or an error when it was compiled out.
    pub fn parallel() -> Result<Self, ExecutorError> {
        #[cfg(feature = "rayon")]
        {
            Ok(ExecutorImpl::Rayon(RayonExecutor::new()))
        }
        #[cfg(not(feature = "rayon"))]
        {
            Err(ExecutorError::new(
                "parallel execution requires the `rayon` feature",
            ))
        }
    }

    /// Picks the parallel executor when asked for and available, the
    /// sequential one otherwise.
    pub fn for_parallelism(parallel: bool) -> Self {
        if !parallel {
            return ExecutorImpl::Sync(SyncExecutor::new());
        }
        match Self::parallel() {
            Ok(executor) => executor,
            Err(err) => {
                log::warn!("{}; falling back to sequential analysis", err);
                ExecutorImpl::Sync(SyncExecutor::new())
            }
        }
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        Self::for_parallelism(true)
    }
}
