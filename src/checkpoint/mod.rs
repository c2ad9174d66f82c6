//! Checkpoint and restore of a machine's runtime state.
//!
//! A checkpoint captures the current state and the undo/redo history. It
//! does NOT include the configuration: a checkpoint is restored against a
//! configuration supplied by the caller, and every state it mentions must
//! be configured there.

use crate::core::{History, MachineConfig};
use crate::machine::StateMachine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's state and history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current state of the machine
    pub state: String,

    /// Undo/redo history, including the cursor
    pub history: History,
}

impl Checkpoint {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to the compact bincode format.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    fn validate_against(&self, config: &MachineConfig) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if !config.contains_state(&self.state) {
            return Err(CheckpointError::UnknownState {
                role: "current",
                state: self.state.clone(),
            });
        }

        if let Some(unknown) = self
            .history
            .entries()
            .iter()
            .find(|s| !config.contains_state(s))
        {
            return Err(CheckpointError::UnknownState {
                role: "history",
                state: unknown.clone(),
            });
        }

        Ok(())
    }
}

impl StateMachine {
    /// Capture the current state and history.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state: self.state().to_string(),
            history: self.history().clone(),
        }
    }

    /// Rebuild a machine from `config` and a checkpoint taken earlier.
    ///
    /// The configuration is validated as in [`StateMachine::new`], then the
    /// checkpoint is checked against it.
    pub fn restore(config: MachineConfig, checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        let machine = StateMachine::new(config)?;
        checkpoint.validate_against(machine.config())?;

        debug!(
            id = %checkpoint.id,
            state = %checkpoint.state,
            entries = checkpoint.history.len(),
            "restoring from checkpoint"
        );

        // Deserialization skips the cursor range check
        let (entries, cursor) = checkpoint.history.into_parts();
        let len = entries.len();
        let history = History::from_parts(entries, cursor).ok_or(
            CheckpointError::CursorOutOfRange {
                cursor: cursor.unwrap_or_default(),
                len,
            },
        )?;

        Ok(StateMachine::from_parts(
            machine.into_config(),
            checkpoint.state,
            history,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDef;

    fn toggle() -> MachineConfig {
        MachineConfig::new("idle")
            .with_state("idle", StateDef::new().on("go", "running"))
            .with_state("running", StateDef::new().on("stop", "idle"))
    }

    fn driven_machine() -> StateMachine {
        let mut machine = StateMachine::new(toggle()).unwrap();
        machine.trigger("go").unwrap();
        machine.trigger("stop").unwrap();
        machine.undo();
        machine
    }

    #[test]
    fn checkpoint_captures_state_and_history() {
        let machine = driven_machine();
        let checkpoint = machine.checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.state, "running");
        assert_eq!(&checkpoint.history, machine.history());
    }

    #[test]
    fn json_checkpoint_restores_machine() {
        let machine = driven_machine();
        let json = machine.checkpoint().to_json().unwrap();

        let checkpoint = Checkpoint::from_json(&json).unwrap();
        let mut restored = StateMachine::restore(toggle(), checkpoint).unwrap();

        assert_eq!(restored.state(), "running");
        assert_eq!(restored.history(), machine.history());

        // Undo/redo continue where they left off
        assert!(restored.redo());
        assert_eq!(restored.state(), "idle");
    }

    #[test]
    fn binary_checkpoint_restores_machine() {
        let machine = driven_machine();
        let bytes = machine.checkpoint().to_binary().unwrap();

        let checkpoint = Checkpoint::from_binary(&bytes).unwrap();
        let restored = StateMachine::restore(toggle(), checkpoint).unwrap();

        assert_eq!(restored.state(), machine.state());
        assert_eq!(restored.history(), machine.history());
    }

    #[test]
    fn restore_rejects_unknown_version() {
        let mut checkpoint = driven_machine().checkpoint();
        checkpoint.version = 99;

        let result = StateMachine::restore(toggle(), checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            })
        ));
    }

    #[test]
    fn restore_rejects_unconfigured_states() {
        let checkpoint = driven_machine().checkpoint();
        let smaller = MachineConfig::new("idle").with_state("idle", StateDef::new());

        let result = StateMachine::restore(smaller, checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnknownState { role: "current", ref state }) if state == "running"
        ));
    }

    #[test]
    fn restore_rejects_out_of_range_cursor() {
        let mut checkpoint = driven_machine().checkpoint();
        let json = serde_json::json!({
            "entries": ["idle"],
            "cursor": 4
        });
        checkpoint.history = serde_json::from_value(json).unwrap();

        let result = StateMachine::restore(toggle(), checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::CursorOutOfRange { cursor: 4, len: 1 })
        ));
    }

    #[test]
    fn restore_rejects_unconfigured_history_entry() {
        let mut checkpoint = driven_machine().checkpoint();
        checkpoint.history = History::from_parts(vec!["warp".to_string()], Some(0)).unwrap();

        let result = StateMachine::restore(toggle(), checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnknownState { role: "history", ref state }) if state == "warp"
        ));
    }

    #[test]
    fn restore_rejects_invalid_config() {
        let checkpoint = driven_machine().checkpoint();
        let broken = MachineConfig::new("ghost");

        let result = StateMachine::restore(broken, checkpoint);
        assert!(matches!(result, Err(CheckpointError::Machine(_))));
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = Checkpoint::from_json("{ not json");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }
}
