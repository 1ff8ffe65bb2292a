//! # Application Configuration
//!
//! Configuration is layered: the embedded defaults (`resources/default_config.toml`),
//! then `CUTILS_*` environment variables, then an optional user file passed via
//! `--config`, and finally overrides taken from command-line arguments.
//! The builder lives behind a global `RwLock` so any part of the binary can
//! fetch the merged view.

use std::path::Path;
use std::sync::RwLock;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};
use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::types::LogLevel;

lazy_static! {
    static ref BUILDER: RwLock<ConfigBuilder<DefaultState>> =
        RwLock::new(config::Config::builder());
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub debug: bool,
    pub log_level: LogLevel,
    pub iterations: usize,
    pub warmups: usize,
    pub threads: usize,
}

impl AppConfig {
    /// Initialize the configuration from the embedded defaults and the environment.
    pub fn init(default_config: Option<&str>) -> Result<()> {
        let mut builder = config::Config::builder();

        if let Some(contents) = default_config {
            builder = builder.add_source(config::File::from_str(
                contents,
                config::FileFormat::Toml,
            ));
        }

        builder = builder.add_source(Environment::with_prefix("CUTILS"));

        let mut w = BUILDER.write()?;
        *w = builder;

        Ok(())
    }

    /// Layer a user supplied configuration file on top of the current sources.
    pub fn merge_config(config_file: Option<&Path>) -> Result<()> {
        if let Some(path) = config_file {
            let mut w = BUILDER.write()?;
            let merged = w.clone().add_source(config::File::from(path));
            *w = merged;
        }

        Ok(())
    }

    /// Apply the global command-line flags as overrides.
    pub fn merge_args(matches: &clap::ArgMatches) -> Result<()> {
        if matches.get_flag("debug") {
            AppConfig::set("debug", true)?;
        }

        if let Some(level) = matches.get_one::<LogLevel>("log_level") {
            AppConfig::set("log_level", level.to_string())?;
        }

        Ok(())
    }

    pub fn set<T: Into<config::Value>>(key: &str, value: T) -> Result<()> {
        let mut w = BUILDER.write()?;
        let updated = w.clone().set_override(key, value)?;
        *w = updated;

        Ok(())
    }

    pub fn get<T: DeserializeOwned>(key: &str) -> Result<T> {
        Ok(BUILDER.read()?.build_cloned()?.get::<T>(key)?)
    }

    /// Build the merged configuration and deserialize it.
    pub fn fetch() -> Result<AppConfig> {
        let app_config: AppConfig = BUILDER.read()?.build_cloned()?.try_deserialize()?;

        Ok(app_config)
    }
}
