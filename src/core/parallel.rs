//! Thin wrappers over rayon for mapping a function across many inputs.

use rayon::ThreadPool;
use rayon::prelude::*;

use crate::utils::error::{Error, Result};

/// Applies `func` to every item on the global rayon pool.
///
/// Results come back in input order.
pub fn par_map<T, R, F>(items: Vec<T>, func: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    items.into_par_iter().map(func).collect()
}

/// Builds a dedicated pool of `threads` workers.
///
/// # Errors
///
/// Returns an `Error` if `threads` is zero or the pool cannot be built.
pub fn thread_pool(threads: usize) -> Result<ThreadPool> {
    if threads == 0 {
        return Err(Error::new("thread count must be a positive integer"));
    }

    Ok(rayon::ThreadPoolBuilder::new().num_threads(threads).build()?)
}

/// Like [`par_map`], but on an existing `pool`.
pub fn par_map_in<T, R, F>(pool: &ThreadPool, items: Vec<T>, func: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    debug!(
        "mapping {} items on {} threads",
        items.len(),
        pool.current_num_threads()
    );

    pool.install(|| items.into_par_iter().map(func).collect())
}

/// Like [`par_map`], but on a fresh pool of `threads` workers.
///
/// `None` falls back to the global pool.
///
/// # Errors
///
/// Returns an `Error` if `threads` is `Some(0)` or the pool cannot be built.
pub fn par_map_with_threads<T, R, F>(items: Vec<T>, func: F, threads: Option<usize>) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    match threads {
        None => Ok(par_map(items, func)),
        Some(n) => Ok(par_map_in(&thread_pool(n)?, items, func)),
    }
}
