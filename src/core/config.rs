//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the
//! events it reacts to and where each event leads. It is supplied once
//! and never mutated by the engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Definition of a single state: its outgoing transitions keyed by event.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::StateDef;
///
/// let idle = StateDef::new().on("go", "running").on("pause", "paused");
/// assert_eq!(idle.target("go"), Some("running"));
/// assert_eq!(idle.target("stop"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event identifier -> target state identifier
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDef {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target reached by `event` from this state, if any.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Problems found while validating a [`MachineConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Initial state '{initial}' is not a configured state")]
    InitialNotDefined { initial: String },

    #[error("Transition '{state}' --{event}--> '{target}' targets an unknown state")]
    DanglingTarget {
        state: String,
        event: String,
        target: String,
    },
}

/// Static transition table plus the initial state.
///
/// State iteration order is the order in which states were inserted,
/// which is the order reported by
/// [`StateMachine::states`](crate::machine::StateMachine::states).
///
/// # Example
///
/// ```rust
/// use fsmkit::core::{MachineConfig, StateDef};
///
/// let config = MachineConfig::new("idle")
///     .with_state("idle", StateDef::new().on("go", "running"))
///     .with_state("running", StateDef::new().on("stop", "idle"));
///
/// assert!(config.contains_state("running"));
/// assert_eq!(config.target("idle", "go"), Some("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in (and returns to on reset)
    pub initial: String,
    /// State identifier -> definition
    pub states: IndexMap<String, StateDef>,
}

impl MachineConfig {
    /// Create a configuration with the given initial state and no states yet.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Add (or replace) a state definition.
    pub fn with_state(mut self, name: impl Into<String>, def: StateDef) -> Self {
        self.states.insert(name.into(), def);
        self
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }

    /// Target of `event` when fired from `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state).and_then(|def| def.target(event))
    }

    /// Validate the configuration, accumulating ALL issues.
    ///
    /// Returns `Validation::Success(())` when the initial state and every
    /// transition target are configured states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmkit::core::{ConfigIssue, MachineConfig, StateDef};
    /// use stillwater::validation::Validation;
    ///
    /// let config = MachineConfig::new("missing")
    ///     .with_state("idle", StateDef::new().on("go", "nowhere"));
    ///
    /// match config.validate() {
    ///     Validation::Failure(issues) => assert_eq!(issues.len(), 2),
    ///     Validation::Success(_) => panic!("expected issues"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        if !self.contains_state(&self.initial) {
            checks.push(Validation::fail(ConfigIssue::InitialNotDefined {
                initial: self.initial.clone(),
            }));
        }

        for (state, def) in &self.states {
            for (event, target) in &def.transitions {
                if !self.contains_state(target) {
                    checks.push(Validation::fail(ConfigIssue::DanglingTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> MachineConfig {
        MachineConfig::new("idle")
            .with_state("idle", StateDef::new().on("go", "running"))
            .with_state("running", StateDef::new().on("stop", "idle"))
    }

    #[test]
    fn target_looks_up_transition() {
        let config = toggle();
        assert_eq!(config.target("idle", "go"), Some("running"));
        assert_eq!(config.target("idle", "stop"), None);
        assert_eq!(config.target("nowhere", "go"), None);
    }

    #[test]
    fn states_keep_insertion_order() {
        let config = MachineConfig::new("c")
            .with_state("c", StateDef::new())
            .with_state("a", StateDef::new())
            .with_state("b", StateDef::new());

        let names: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(matches!(toggle().validate(), Validation::Success(())));
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let config = MachineConfig::new("ghost")
            .with_state("idle", StateDef::new().on("go", "running"))
            .with_state("paused", StateDef::new().on("resume", "running"));

        match config.validate() {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 3);
                assert!(issues
                    .iter()
                    .any(|i| matches!(i, ConfigIssue::InitialNotDefined { .. })));
                assert_eq!(
                    issues
                        .iter()
                        .filter(|i| matches!(i, ConfigIssue::DanglingTarget { .. }))
                        .count(),
                    2
                );
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_states_reject_initial() {
        let config = MachineConfig::new("idle");
        assert!(matches!(config.validate(), Validation::Failure(_)));
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{
            "initial": "idle",
            "states": {
                "idle": { "transitions": { "go": "running" } },
                "running": { "transitions": { "stop": "idle" } },
                "done": {}
            }
        }"#;

        let config: MachineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.initial, "idle");
        let names: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["idle", "running", "done"]);
        assert!(config.state("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn issue_messages_name_the_problem() {
        let issue = ConfigIssue::DanglingTarget {
            state: "idle".to_string(),
            event: "go".to_string(),
            target: "nowhere".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "Transition 'idle' --go--> 'nowhere' targets an unknown state"
        );
    }
}
