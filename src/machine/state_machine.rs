//! State machine that tracks the current state and its undo/redo history.

use crate::core::{History, MachineConfig, MachineError};
use stillwater::validation::Validation;
use tracing::{debug, trace};

/// Finite-state machine driven by a [`MachineConfig`].
///
/// The configuration is validated once at construction; after that every
/// state identifier held by the machine is a configured state.
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// Fails with [`MachineError::InvalidConfig`] if the initial state or
    /// any transition target is not a configured state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::core::{MachineConfig, StateDef};
    /// use fsmkit::machine::StateMachine;
    ///
    /// let config = MachineConfig::new("idle")
    ///     .with_state("idle", StateDef::new().on("go", "running"))
    ///     .with_state("running", StateDef::new().on("stop", "idle"));
    ///
    /// let mut machine = StateMachine::new(config).unwrap();
    /// machine.trigger("go").unwrap();
    /// assert_eq!(machine.state(), "running");
    /// ```
    pub fn new(config: MachineConfig) -> Result<Self, MachineError> {
        if let Validation::Failure(issues) = config.validate() {
            return Err(MachineError::InvalidConfig {
                issues: issues.iter().cloned().collect(),
            });
        }

        let current = config.initial.clone();
        Ok(Self::from_parts(config, current, History::new()))
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`MachineError::ConfigMissing`] when `config` is `None`.
    pub fn try_from_config(config: Option<MachineConfig>) -> Result<Self, MachineError> {
        config.ok_or(MachineError::ConfigMissing).and_then(Self::new)
    }

    pub(crate) fn from_parts(config: MachineConfig, current: String, history: History) -> Self {
        Self {
            config,
            current,
            history,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn initial(&self) -> &str {
        &self.config.initial
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Consume the machine, returning its configuration.
    pub fn into_config(self) -> MachineConfig {
        self.config
    }

    /// Jump directly to `target`, recording the current state in history.
    ///
    /// No transition edge is required between the current state and
    /// `target`. On failure the machine is left untouched.
    pub fn change_state(&mut self, target: &str) -> Result<&mut Self, MachineError> {
        if !self.config.contains_state(target) {
            return Err(MachineError::UnknownState {
                state: target.to_string(),
            });
        }

        debug!(from = %self.current, to = target, "changing state");
        let previous = std::mem::replace(&mut self.current, target.to_string());
        self.history.record(previous);
        Ok(self)
    }

    /// Fire `event` from the current state.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let Some(target) = self.config.target(&self.current, event) else {
            return Err(MachineError::UnknownEvent {
                event: event.to_string(),
                state: self.current.clone(),
            });
        };

        let target = target.to_string();
        debug!(from = %self.current, event, to = %target, "event triggered");
        self.change_state(&target)?;
        Ok(())
    }

    /// Return to the initial state as a recorded transition.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        let initial = self.config.initial.clone();
        self.change_state(&initial)?;
        Ok(())
    }

    /// Configured states, in configuration order.
    ///
    /// With `Some(event)`, only the states that have a transition for
    /// that event are returned; an unmatched event yields an empty list.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| event.is_none_or(|e| def.handles(e)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Events that have a transition from the current state.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(&self.current)
            .map(|def| def.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn can_trigger(&self, event: &str) -> bool {
        self.config.target(&self.current, event).is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Go back to the previous state.
    ///
    /// Returns `false`, changing nothing, when no undo is available.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.current.as_str()) {
            Some(restored) => {
                trace!(from = %self.current, to = %restored, "undo");
                self.current = restored;
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone state change.
    ///
    /// Returns `false`, changing nothing, when no redo is available.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(restored) => {
                trace!(from = %self.current, to = %restored, "redo");
                self.current = restored;
                true
            }
            None => false,
        }
    }

    /// Forget all history. The current state is kept.
    pub fn clear_history(&mut self) {
        trace!(entries = self.history.len(), "clearing history");
        self.history.clear();
    }
}
