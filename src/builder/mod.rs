//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for creating state
//! machines with minimal boilerplate. Both produce a [`MachineConfig`]
//! that is validated the same way as a hand-written one.
//!
//! [`MachineConfig`]: crate::core::MachineConfig

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
