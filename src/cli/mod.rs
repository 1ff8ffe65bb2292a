//! # Command-Line Interface Module
//!
//! This module defines the command-line interface (CLI) for the application.
//! It uses the `clap` crate to parse arguments and subcommands, and then
//! dispatches to the appropriate handlers in the `core::commands` module.
//!
//! The main components are:
//! - `Cli`: The top-level struct representing the CLI arguments.
//! - `Commands`: An enum of the utility subcommands (e.g., `factors`, `chunk`, `strip`).
//! - `BenchSubcommand`: An enum for the timing subcommands.
//! - `CompletionSubcommand`: An enum for generating shell completion scripts.
//! - `cli_match()`: The main function that parses CLI input and executes the matched command.

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::{
    generate,
    shells::{Bash, Fish, Zsh},
};
use std::path::PathBuf;

use crate::core::{
    commands::{self, bench::BenchArgs},
    types::OutputFormat,
};
use crate::utils::app_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::logger;
use crate::utils::types::LogLevel;

/// Represents the command-line interface arguments for the application.
#[derive(Parser, Debug)]
#[command(
    name = "cutils",
    author,
    about,
    long_about = "Sequence, numeric and string helpers with a micro-benchmarking harness",
    version
)]
pub struct Cli {
    /// Specifies a custom configuration file path.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enables debug mode.
    #[arg(short, long)]
    pub debug: bool,

    /// Sets the logging level for the application.
    #[arg(short, long = "log-level", value_name = "LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// The output format: `text` or `json`.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text", value_parser = parse_output_format)]
    pub format: OutputFormat,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every divisor of a number.
    #[clap(name = "factors", about = "List all factors of an integer")]
    Factors { n: u64 },

    /// Constrain a value to a closed range.
    #[clap(name = "clamp", about = "Clamp a value to [low, high]")]
    Clamp {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long, allow_negative_numbers = true)]
        low: f64,
        #[arg(long, allow_negative_numbers = true)]
        high: f64,
    },

    #[clap(
        name = "max-rem",
        about = "Largest remainder of N over divisors 1..=K"
    )]
    MaxRem { n: u64, k: u64 },

    #[clap(name = "chunk", about = "Split items into fixed-size chunks")]
    Chunk {
        /// Number of items per chunk.
        #[arg(long, short)]
        size: usize,
        items: Vec<String>,
    },

    #[clap(name = "split", about = "Split items into N balanced parts")]
    Split {
        /// Number of parts.
        #[arg(long, short)]
        parts: usize,
        items: Vec<String>,
    },

    #[clap(name = "unique", about = "Remove duplicates, keeping first occurrences")]
    Unique { items: Vec<String> },

    #[clap(name = "contains", about = "Check whether any query item is present")]
    Contains {
        /// Items to look for (comma-separated).
        #[arg(long, short, value_delimiter = ',', required = true)]
        query: Vec<String>,
        items: Vec<String>,
    },

    #[clap(name = "last-index", about = "Find the last position of an item")]
    LastIndex {
        #[arg(long, short)]
        target: String,
        items: Vec<String>,
    },

    #[clap(name = "flatten", about = "Flatten a JSON document of nested arrays")]
    Flatten { json: String },

    #[clap(name = "strip", about = "Remove all whitespace from text")]
    Strip { text: String },

    #[clap(name = "duration", about = "Render seconds as hours, minutes and seconds")]
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },

    /// Micro-benchmarks built on the timing helpers.
    #[clap(name = "bench", about = "Time library functions")]
    Bench {
        #[clap(subcommand)]
        subcommand: BenchSubcommand,
    },

    /// Subcommands for generating shell completion scripts.
    #[clap(
        name = "completion",
        about = "Generate completion scripts",
        long_about = None,
        )]
    Completion {
        #[clap(subcommand)]
        subcommand: CompletionSubcommand,
    },

    /// Displays the current application configuration.
    #[clap(
        name = "config",
        about = "Show Configuration",
        long_about = None,
    )]
    Config,
}

/// Defines subcommands for shell completion script generation.
#[derive(Subcommand, PartialEq, Debug)]
enum CompletionSubcommand {
    #[clap(about = "generate the autocompletion script for bash")]
    Bash,
    #[clap(about = "generate the autocompletion script for zsh")]
    Zsh,
    #[clap(about = "generate the autocompletion script for fish")]
    Fish,
}

#[derive(Subcommand, PartialEq, Debug)]
enum BenchSubcommand {
    /// Times `get_factors(N)` over repeated calls.
    #[clap(name = "factors", about = "Time factorization of N")]
    Factors {
        n: u64,

        /// Timed calls. Defaults to the `iterations` config value.
        #[arg(long, short)]
        iterations: Option<usize>,

        /// Untimed calls before measuring. Defaults to the `warmups` config value.
        #[arg(long, short)]
        warmups: Option<usize>,

        /// Do not print the summary line.
        #[arg(long, short)]
        quiet: bool,
    },

    /// Times a parallel batch of factorizations.
    #[clap(
        name = "par-factors",
        about = "Time parallel factorization of many inputs"
    )]
    ParFactors {
        #[arg(required = true)]
        numbers: Vec<u64>,

        /// Worker threads. Defaults to the `threads` config value.
        #[arg(long, short)]
        threads: Option<usize>,

        #[arg(long, short)]
        iterations: Option<usize>,

        #[arg(long, short)]
        warmups: Option<usize>,

        #[arg(long, short)]
        quiet: bool,
    },
}

/// Parses command-line arguments, merges configurations, and executes the appropriate command.
///
/// 1. Parses the raw command-line arguments.
/// 2. Merges any configuration file given via `--config` into `AppConfig`.
/// 3. Merges the global flags (which override config file settings) into `AppConfig`.
/// 4. Applies the resulting log level.
/// 5. Dispatches the matched subcommand.
pub fn cli_match() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Merge clap config file if the value is set
    AppConfig::merge_config(cli.config.as_deref())?;
    AppConfig::merge_args(&matches)?;

    let config = AppConfig::fetch()?;
    logger::set_level(if config.debug {
        LogLevel::Debug
    } else {
        config.log_level
    });

    let format = cli.format;

    // Execute the subcommand
    match &cli.command {
        Commands::Factors { n } => commands::numeric::factors(*n, format)?,
        Commands::Clamp { value, low, high } => {
            commands::numeric::clamp_value(*value, *low, *high, format)?
        }
        Commands::MaxRem { n, k } => commands::numeric::max_rem(*n, *k, format)?,
        Commands::Chunk { size, items } => commands::sequence::chunk(items, *size, format)?,
        Commands::Split { parts, items } => commands::sequence::split(items, *parts, format)?,
        Commands::Unique { items } => commands::sequence::unique(items, format)?,
        Commands::Contains { query, items } => {
            commands::sequence::contains_any(items, query, format)?
        }
        Commands::LastIndex { target, items } => {
            commands::sequence::last_index(items, target, format)?
        }
        Commands::Flatten { json } => commands::sequence::flatten_json(json, format)?,
        Commands::Strip { text } => commands::text::strip(text, format)?,
        Commands::Duration { seconds } => commands::text::duration(*seconds, format)?,
        Commands::Bench { subcommand } => bench(subcommand, format)?,
        Commands::Completion { subcommand } => {
            let mut app = Cli::command();
            match subcommand {
                CompletionSubcommand::Bash => {
                    generate(Bash, &mut app, "cutils", &mut std::io::stdout());
                }
                CompletionSubcommand::Zsh => {
                    generate(Zsh, &mut app, "cutils", &mut std::io::stdout());
                }
                CompletionSubcommand::Fish => {
                    generate(Fish, &mut app, "cutils", &mut std::io::stdout());
                }
            }
        }
        Commands::Config => commands::config::run()?,
    }

    Ok(())
}

/// Handles the dispatch of `BenchSubcommand` variants to their respective command functions.
fn bench(subcommand: &BenchSubcommand, format: OutputFormat) -> Result<()> {
    match subcommand {
        BenchSubcommand::Factors {
            n,
            iterations,
            warmups,
            quiet,
        } => commands::bench::factors(
            *n,
            &BenchArgs {
                iterations: *iterations,
                warmups: *warmups,
                quiet: *quiet,
                format,
            },
        ),
        BenchSubcommand::ParFactors {
            numbers,
            threads,
            iterations,
            warmups,
            quiet,
        } => commands::bench::par_factors(
            numbers,
            *threads,
            &BenchArgs {
                iterations: *iterations,
                warmups: *warmups,
                quiet: *quiet,
                format,
            },
        ),
    }
}

/// Parses a string slice into an `OutputFormat` enum.
///
/// Used by `clap` as a value parser; accepts "text" or "json" case-insensitively.
fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("text"), Ok(OutputFormat::Text));
        assert!(parse_output_format("bincode").is_err());
    }

    #[test]
    fn test_parse_bench_defaults() {
        let cli = Cli::try_parse_from(["cutils", "bench", "factors", "120"]).unwrap();

        match cli.command {
            Commands::Bench {
                subcommand:
                    BenchSubcommand::Factors {
                        n,
                        iterations,
                        warmups,
                        quiet,
                    },
            } => {
                assert_eq!(n, 120);
                assert_eq!(iterations, None);
                assert_eq!(warmups, None);
                assert!(!quiet);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_contains_query_list() {
        let cli = Cli::try_parse_from([
            "cutils", "contains", "--query", "x,b", "a", "b", "c", "--format", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Contains { query, items } => {
                assert_eq!(query, vec!["x", "b"]);
                assert_eq!(items, vec!["a", "b", "c"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_negative_duration() {
        let cli = Cli::try_parse_from(["cutils", "duration", "-5"]).unwrap();

        match cli.command {
            Commands::Duration { seconds } => assert_eq!(seconds, -5.0),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
