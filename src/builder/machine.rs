//! Builder for constructing state machines.

use crate::core::{MachineConfig, MachineError, StateDef};
use crate::machine::StateMachine;
use indexmap::IndexMap;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use fsmkit::builder::StateMachineBuilder;
///
/// let mut machine = StateMachineBuilder::new()
///     .initial("idle")
///     .transition("idle", "go", "running")
///     .transition("running", "stop", "idle")
///     .build()
///     .unwrap();
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDef>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring an existing state keeps its transitions.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Declare a state with a full definition, replacing any earlier one.
    pub fn state_def(mut self, name: impl Into<String>, def: StateDef) -> Self {
        self.states.insert(name.into(), def);
        self
    }

    /// Add a transition, declaring `from` if needed.
    ///
    /// `to` must be declared as well (as a state or as the source of some
    /// transition) or `build()` reports it as a dangling target.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Add multiple `(from, event, to)` transitions at once.
    pub fn transitions<I, F, E, T>(self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (F, E, T)>,
        F: Into<String>,
        E: Into<String>,
        T: Into<String>,
    {
        transitions
            .into_iter()
            .fold(self, |builder, (from, event, to)| {
                builder.transition(from, event, to)
            })
    }

    /// Produce the configuration without building a machine.
    /// Returns an error if no initial state was given.
    pub fn into_config(self) -> Result<MachineConfig, MachineError> {
        let initial = self.initial.ok_or(MachineError::ConfigMissing)?;
        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or the
    /// configuration does not validate.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        StateMachine::new(self.into_config()?)
    }
}
