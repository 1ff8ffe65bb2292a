use crate::core::text::{display_time, strip_blanks};
use crate::core::types::OutputFormat;
use crate::utils::error::Result;

use super::emit;

/// Print `input` with every blank removed
pub fn strip(input: &str, format: OutputFormat) -> Result<()> {
    let stripped = strip_blanks(input);

    emit(format, &stripped, || stripped.clone())
}

/// Print a duration in seconds as hours, minutes and seconds
pub fn duration(seconds: f64, format: OutputFormat) -> Result<()> {
    let rendered = display_time(seconds);

    emit(format, &rendered, || rendered.clone())
}
