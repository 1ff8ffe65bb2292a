use crate::core::numeric::{clamp, get_factors, max_remainder};
use crate::core::types::OutputFormat;
use crate::core::display::join_items;
use crate::utils::error::Result;

use super::emit;

/// Print all divisors of `n` in ascending order
pub fn factors(n: u64, format: OutputFormat) -> Result<()> {
    let factors: Vec<u64> = get_factors(n).into_iter().collect();

    emit(format, &factors, || join_items(&factors))
}

/// Print `value` clamped to `[low, high]`
pub fn clamp_value(value: f64, low: f64, high: f64, format: OutputFormat) -> Result<()> {
    let clamped = clamp(value, low, high)?;

    emit(format, &clamped, || clamped.to_string())
}

/// Print the largest remainder of `n` over divisors up to `k`
pub fn max_rem(n: u64, k: u64, format: OutputFormat) -> Result<()> {
    let best = max_remainder(n, k);

    emit(format, &best, || best.to_string())
}
