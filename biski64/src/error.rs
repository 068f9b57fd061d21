//! Seeding errors
//!
//! The step function has no error domain. Only construction of a state can
//! fail, when the supplied entropy cannot produce a non-degenerate state or a
//! stream request is out of range.

use thiserror::Error;

/// Errors raised while building an initial generator state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("Invalid seed: {reason}")]
    InvalidSeed { reason: String },

    #[error("Stream count must be at least 1")]
    ZeroStreamCount,

    #[error("Stream index {index} out of range for {count} streams")]
    StreamIndexOutOfRange { index: u64, count: u64 },
}

impl SeedError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SeedError::InvalidSeed {
            reason: reason.into(),
        }
    }
}
