//! # Error Handling
//!
//! A single crate-wide `Error` type. Foreign errors from the I/O layer, the
//! configuration loader, serialization, logging setup and the rayon pool are
//! wrapped transparently; everything else is a `Generic` message built with
//! [`Error::new`].

use std::sync::PoisonError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{0}")]
    Generic(String),
}

impl Error {
    pub fn new(message: &str) -> Self {
        Error::Generic(message.to_string())
    }
}

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Error::Generic(format!("lock poisoned: {}", err))
    }
}
