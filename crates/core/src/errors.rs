//! Core error types for traderfx.
//!
//! The normalizer pass itself never fails: unresolvable rates and unknown
//! identifiers degrade to identity behavior and are logged. These types cover
//! the fallible edges around it (configuration and trader-table files).

use std::path::PathBuf;
use thiserror::Error;

use crate::fx::{Currency, FxError};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the traderfx library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while validating a [`crate::config::NormalizerConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("Missing configuration key: {0}")]
    MissingKey(&'static str),

    #[error("Item template '{tpl}' is configured for both {first} and {second}")]
    DuplicateTemplateId {
        tpl: String,
        first: Currency,
        second: Currency,
    },
}
