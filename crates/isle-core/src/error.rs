//! Core error type.
//!
//! Nothing inside the running simulation fails in the `Result` sense:
//! capacity rejection, death and stranding are domain outcomes.  The errors
//! here cover loading and validating configuration.

use thiserror::Error;

/// The top-level error type for `isle-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum IsleError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `isle-*` crates.
pub type IsleResult<T> = Result<T, IsleError>;
