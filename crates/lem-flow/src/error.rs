//! Flow-subsystem error type.
//!
//! Neither variant occurs on a correctly maintained residual graph; they
//! exist so a broken invariant ends the run instead of looping forever.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("iteration count exceeded the bound of {cap}")]
    IterationCap { cap: u32 },

    #[error("flow decomposition found {found} of {expected} lanes")]
    Decomposition { found: u32, expected: u32 },
}

pub type FlowResult<T> = Result<T, FlowError>;
