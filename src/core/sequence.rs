//! # Sequence Helpers
//!
//! Small, stateless operations over slices and iterators:
//!
//! - Membership tests across two collections (`contains`).
//! - Fixed-size chunking (`chunk_seq`, `chunk_slices`) and splitting into
//!   a fixed number of balanced parts (`even_split`).
//! - Reverse search (`find_last_index`).
//! - Flattening of arbitrarily nested containers (`flatten`).
//! - Order-preserving deduplication (`ordered_unique`).

use std::collections::HashSet;
use std::hash::Hash;

use super::types::Nested;
use crate::utils::error::{Error, Result};

/// Returns `true` if `source` holds at least one element of `query`.
///
/// An empty `query` never matches.
pub fn contains<T: PartialEq>(source: &[T], query: &[T]) -> bool {
    query.iter().any(|elem| source.contains(elem))
}

/// Splits `seq` into owned chunks of `n` items.
///
/// The last chunk holds the remaining `len % n` items, or a full `n` when the
/// length divides evenly.
///
/// # Errors
///
/// Returns an `Error` if `n` is zero.
pub fn chunk_seq<T: Clone>(seq: &[T], n: usize) -> Result<Vec<Vec<T>>> {
    Ok(chunk_slices(seq, n)?
        .into_iter()
        .map(<[T]>::to_vec)
        .collect())
}

/// Borrowing variant of [`chunk_seq`].
pub fn chunk_slices<T>(seq: &[T], n: usize) -> Result<Vec<&[T]>> {
    if n == 0 {
        return Err(Error::new("chunk size must be a positive integer"));
    }

    Ok(seq.chunks(n).collect())
}

/// Breaks `seq` into exactly `n` contiguous parts of nearly equal size.
///
/// Part sizes differ by at most one, with the longer parts first. When `n`
/// exceeds the length of `seq`, the trailing parts are empty.
///
/// # Errors
///
/// Returns an `Error` if `n` is zero.
pub fn even_split<T: Clone>(seq: &[T], n: usize) -> Result<Vec<Vec<T>>> {
    if n == 0 {
        return Err(Error::new("n must be an integer greater than 0"));
    }

    let (k, m) = (seq.len() / n, seq.len() % n);

    Ok((0..n)
        .map(|i| {
            let start = i * k + i.min(m);
            let end = (i + 1) * k + (i + 1).min(m);
            seq[start..end].to_vec()
        })
        .collect())
}

/// Index of the last element equal to `target`.
pub fn find_last_index<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().rposition(|elem| elem == target)
}

/// Flattens a nested container into its leaves, depth first, left to right.
pub fn flatten<T>(container: Vec<Nested<T>>) -> Vec<T> {
    fn walk<T>(items: Vec<Nested<T>>, out: &mut Vec<T>) {
        for item in items {
            match item {
                Nested::Item(value) => out.push(value),
                Nested::List(inner) => walk(inner, out),
            }
        }
    }

    let mut out = Vec::new();
    walk(container, &mut out);
    out
}

/// Unique elements of `iter`, kept in order of first occurrence.
pub fn ordered_unique<T, I>(iter: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();

    iter.into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
