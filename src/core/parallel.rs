//! Parallel processing utilities

use crate::error::{DocError, Result};
use parking_lot::Mutex;
use rayon::prelude::*;
use rayon::ThreadPool;

/// Progress update information for batch operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }
}

/// Build a dedicated pool when a thread count is requested
pub fn build_pool(jobs: Option<usize>) -> Result<Option<ThreadPool>> {
    let Some(jobs) = jobs else {
        return Ok(None);
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map(Some)
        .map_err(|e| DocError::ParallelExecution {
            message: format!("Failed to build a pool of {} threads: {}", jobs, e),
        })
}

/// Map items in parallel, reporting each completion
///
/// Results keep the input order. The callback sees a running count, so
/// updates arrive in completion order.
pub fn parallel_process_with_progress<T, F, R, P>(items: &[T], f: F, progress_callback: P) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> (R, String) + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let total = items.len();
    let counter = Mutex::new(0usize);

    items
        .par_iter()
        .map(|item| {
            let (result, message) = f(item);

            let current = {
                let mut done = counter.lock();
                *done += 1;
                *done
            };
            progress_callback(ProgressUpdate::new(current, total, message));

            result
        })
        .collect()
}
