//! fsmkit: a synchronous finite-state machine engine with undo/redo
//!
//! A machine is described declaratively by a [`MachineConfig`]: an initial
//! state plus, for every state, the events it reacts to and the state each
//! event leads to. The [`StateMachine`] engine tracks the current state,
//! validates transitions, and keeps a linear history of visited states
//! that supports undo and redo.
//!
//! # Core Concepts
//!
//! - **Configuration**: an immutable transition table, validated once
//! - **Transitions**: `trigger` follows a configured edge, `change_state`
//!   jumps directly to any configured state
//! - **History**: every transition is recorded and can be undone/redone
//! - **Checkpoints**: the runtime state can be captured and restored
//!
//! # Example
//!
//! ```rust
//! use fsmkit::{machine_config, StateMachine};
//!
//! let config = machine_config! {
//!     initial: "idle",
//!     "idle" => { "go" => "running" },
//!     "running" => { "stop" => "idle" },
//! };
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! machine.trigger("go").unwrap();
//! machine.trigger("stop").unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "idle");
//! assert!(!machine.undo());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{ConfigIssue, History, MachineConfig, MachineError, StateDef};
pub use machine::StateMachine;
