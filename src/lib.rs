//! # Library Crate Root
//!
//! Declares the module structure of `cutils`:
//! - `core`: the utility functions (sequence, numeric, text), the timing harness,
//!   the rate limiter, the parallel map, and the CLI command handlers.
//! - `cli`: the `clap` command-line front end.
//! - `utils`: errors, configuration and logging.

#[macro_use]
extern crate log;

pub mod cli;
pub mod core;
pub mod utils;
