//! # Numeric Helpers
//!
//! Trial-division factorization, bounded clamping and a remainder search.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::utils::error::{Error, Result};

/// Returns every positive divisor of `n`.
///
/// Trial division runs up to `isqrt(n)`, recording both `i` and `n / i` for
/// each hit. Zero has no divisors in this scheme and yields an empty set.
pub fn get_factors(n: u64) -> BTreeSet<u64> {
    let mut factors = BTreeSet::new();

    for i in 1..=n.isqrt() {
        if n % i == 0 {
            factors.insert(i);
            factors.insert(n / i);
        }
    }

    factors
}

/// Constrains `value` to the closed range `[low, high]`.
///
/// # Errors
///
/// Returns an `Error` when `low > high` or when the bounds are unordered
/// (e.g. a NaN bound).
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> Result<T> {
    match low.partial_cmp(&high) {
        Some(Ordering::Less | Ordering::Equal) => {}
        _ => return Err(Error::new("lower bound must not exceed upper bound")),
    }

    if value < low {
        Ok(low)
    } else if value > high {
        Ok(high)
    } else {
        Ok(value)
    }
}

/// Largest `n mod i` over all divisors `i` in `1..=k`.
pub fn max_remainder(n: u64, k: u64) -> u64 {
    let mut best = 0;

    for i in (1..=k).rev() {
        // n mod i is at most i - 1; nothing at or below this divisor can win
        if i - 1 <= best {
            break;
        }
        best = best.max(n % i);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_factors() {
        let factors: Vec<u64> = get_factors(36).into_iter().collect();
        assert_eq!(factors, vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
    }

    #[test]
    fn test_get_factors_edges() {
        assert!(get_factors(0).is_empty());
        assert_eq!(get_factors(1).into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(get_factors(97).into_iter().collect::<Vec<_>>(), vec![1, 97]);
    }

    #[test]
    fn test_get_factors_large() {
        let factors = get_factors(500_000);
        assert_eq!(factors.len(), 42);
        assert!(factors.iter().all(|f| 500_000 % f == 0));
        assert_eq!(factors.iter().next_back(), Some(&500_000));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 1, 10).unwrap(), 5);
        assert_eq!(clamp(-3, 1, 10).unwrap(), 1);
        assert_eq!(clamp(42, 1, 10).unwrap(), 10);
        assert_eq!(clamp(2.5, 0.0, 1.0).unwrap(), 1.0);
        assert_eq!(clamp(7, 7, 7).unwrap(), 7);
    }

    #[test]
    fn test_clamp_invalid_bounds() {
        assert!(clamp(1, 10, 0).is_err());
        assert!(clamp(0.5, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_max_remainder_matches_brute_force() {
        for n in 0..60 {
            for k in 0..20 {
                let expected = (1..=k).map(|i| n % i).max().unwrap_or(0);
                assert_eq!(max_remainder(n, k), expected, "n={} k={}", n, k);
            }
        }
    }
}
