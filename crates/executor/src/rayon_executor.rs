//! Rayon-based parallel executor.

use bindpath_traits::Executor;
use rayon::prelude::*;

/// Runs work items on rayon's global work-stealing pool.
///
/// Results are collected in input order, so callers that sort or compare
/// outputs see the same list as with `SyncExecutor`.
#[derive(Debug, Clone, Default)]
pub struct RayonExecutor;

impl RayonExecutor {
    pub fn new() -> Self {
        log::debug!(
            "rayon pool has {} thread(s)",
            rayon::current_num_threads()
        );
        Self
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
