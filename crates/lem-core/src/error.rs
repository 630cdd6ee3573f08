//! Core error type.
//!
//! Each `lem-*` crate defines its own error enum for its own failure modes;
//! this one only covers what `lem-core` itself validates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lem-core`.
pub type CoreResult<T> = Result<T, CoreError>;
