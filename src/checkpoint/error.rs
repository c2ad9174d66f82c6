//! Checkpoint error types.

use crate::core::MachineError;
use thiserror::Error;

/// Errors raised while saving or restoring a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Could not encode checkpoint: {0}")]
    SerializationFailed(String),

    #[error("Could not decode checkpoint: {0}")]
    DeserializationFailed(String),

    /// Written by a newer or older checkpoint format
    #[error("Checkpoint format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A recorded state is missing from the configuration
    #[error("Checkpoint {role} state '{state}' is not configured")]
    UnknownState { role: &'static str, state: String },

    /// The history cursor points past the recorded entries
    #[error("Checkpoint cursor {cursor} out of range for {len} history entries")]
    CursorOutOfRange { cursor: usize, len: usize },

    /// The configuration itself was rejected
    #[error(transparent)]
    Machine(#[from] MachineError),
}
