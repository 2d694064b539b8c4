//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MascotError` where they
//! need to surface a core failure.

use thiserror::Error;

/// The top-level error type for `mascot-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MascotError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `mascot-*` crates.
pub type MascotResult<T> = Result<T, MascotError>;
