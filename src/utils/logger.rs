//! # Logging
//!
//! Builds the `slog` root logger and installs it globally through `slog-scope`.
//! The `log` facade is bridged with `slog-stdlog`, so library code only ever
//! uses the `log` macros. Output drains are selected by cargo features:
//! `termlog` (stderr), `syslog` and `journald` (Linux only).

use slog::{Drain, o};

use super::error::Result;
use super::types::LogLevel;

/// Install the global logger. Keep the returned guard alive for the lifetime
/// of the program; dropping it resets the global logger.
pub fn setup_logging() -> Result<slog_scope::GlobalLoggerGuard> {
    let logger = default_root_logger()?;
    let guard = slog_scope::set_global_logger(logger);

    slog_stdlog::init()?;

    Ok(guard)
}

/// Narrow the `log` facade to the configured verbosity.
pub fn set_level(level: LogLevel) {
    log::set_max_level(level.into());
}

pub fn default_root_logger() -> Result<slog::Logger> {
    let drain = slog::Duplicate(default_discard()?, default_discard()?).fuse();

    #[cfg(feature = "termlog")]
    let drain = slog::Duplicate(default_term_drain().unwrap_or(default_discard()?), drain).fuse();

    #[cfg(feature = "syslog")]
    let drain =
        slog::Duplicate(default_syslog_drain().unwrap_or(default_discard()?), drain).fuse();

    #[cfg(all(feature = "journald", target_os = "linux"))]
    let drain =
        slog::Duplicate(default_journald_drain().unwrap_or(default_discard()?), drain).fuse();

    Ok(slog::Logger::root(drain, o!("who" => "cutils")))
}

fn default_discard() -> Result<slog_async::Async> {
    Ok(slog_async::Async::default(slog::Discard))
}

#[cfg(feature = "termlog")]
fn default_term_drain() -> Result<slog_async::Async> {
    // stderr keeps stdout free for command output
    let plain = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let term = slog_term::FullFormat::new(plain);

    Ok(slog_async::Async::default(term.build().fuse()))
}

#[cfg(feature = "syslog")]
fn default_syslog_drain() -> Result<slog_async::Async> {
    let syslog = slog_syslog::unix_3164(slog_syslog::Facility::LOG_USER)?;

    Ok(slog_async::Async::default(syslog.fuse()))
}

#[cfg(all(feature = "journald", target_os = "linux"))]
fn default_journald_drain() -> Result<slog_async::Async> {
    let journald = slog_journald::JournaldDrain.ignore_res();

    Ok(slog_async::Async::default(journald))
}
