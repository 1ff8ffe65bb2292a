use serde::Serialize;

use crate::core::display::stats_table;
use crate::core::numeric::get_factors;
use crate::core::parallel::{par_map, par_map_in, thread_pool};
use crate::core::timing::{TimingOptions, time_func};
use crate::core::types::{OutputFormat, TimingStats};
use crate::utils::app_config::AppConfig;
use crate::utils::error::Result;

/// Run-time knobs shared by the bench subcommands. Unset values come from config.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchArgs {
    pub iterations: Option<usize>,
    pub warmups: Option<usize>,
    pub quiet: bool,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct BenchReport<'a> {
    function: &'a str,
    stats: &'a TimingStats,
}

fn options(args: &BenchArgs) -> Result<TimingOptions> {
    let config = AppConfig::fetch()?;

    Ok(TimingOptions::new(args.iterations.unwrap_or(config.iterations))
        .warmups(args.warmups.unwrap_or(config.warmups))
        // the summary line would corrupt JSON output
        .quiet(args.quiet || args.format == OutputFormat::Json))
}

fn report(label: &str, stats: &TimingStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", stats_table(label, stats)),
        OutputFormat::Json => {
            let report = BenchReport {
                function: label,
                stats,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Time `get_factors(n)` across repeated calls
pub fn factors(n: u64, args: &BenchArgs) -> Result<()> {
    let options = options(args)?;
    info!("benchmarking get_factors({}) with {:?}", n, options);

    let stats = time_func(|| get_factors(n), &options)?;

    report(&format!("get_factors({})", n), &stats, args.format)
}

/// Time a parallel batch of `get_factors` calls over `numbers`
pub fn par_factors(numbers: &[u64], threads: Option<usize>, args: &BenchArgs) -> Result<()> {
    let options = options(args)?;
    let threads = match threads {
        Some(t) => Some(t),
        None => match AppConfig::fetch()?.threads {
            0 => None,
            t => Some(t),
        },
    };
    info!(
        "benchmarking par_map(get_factors) over {} inputs on {:?} threads",
        numbers.len(),
        threads
    );

    // Build the pool outside the timed closure so only the mapping is measured
    let pool = threads.map(thread_pool).transpose()?;

    let stats = time_func(
        || match &pool {
            Some(pool) => par_map_in(pool, numbers.to_vec(), get_factors),
            None => par_map(numbers.to_vec(), get_factors),
        },
        &options,
    )?;

    report(
        &format!("par_map(get_factors) x{}", numbers.len()),
        &stats,
        args.format,
    )
}
