//! # Main Entry Point
//!
//! This file serves as the main entry point for the application. It is responsible for:
//! - Setting up panic handlers for improved error reporting.
//! - Loading and initializing application configuration.
//! - Initializing the logging system.
//! - Parsing and matching command-line arguments to execute corresponding commands.

#[cfg(not(debug_assertions))]
use human_panic::setup_panic;

#[cfg(debug_assertions)]
extern crate better_panic;

use cutils::utils::app_config::AppConfig;
use cutils::utils::error::Result;

fn main() -> Result<()> {
    // Human Panic. Only enabled when *not* debugging.
    #[cfg(not(debug_assertions))]
    {
        setup_panic!();
    }

    // Better Panic. Only enabled *when* debugging.
    #[cfg(debug_assertions)]
    {
        better_panic::Settings::debug()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .install();
    }

    // Initialize Configuration
    let config_contents = include_str!("resources/default_config.toml");
    AppConfig::init(Some(config_contents))?;

    let _guard = cutils::utils::logger::setup_logging()?;

    // Match Commands
    cutils::cli::cli_match()?;

    Ok(())
}
