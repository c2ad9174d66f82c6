//! Core configuration, history, and error types.
//!
//! Everything here is plain data with no knowledge of the running engine:
//! - `MachineConfig` / `StateDef`: the static transition table
//! - `History`: the undo/redo buffer and its cursor
//! - `MachineError`: failures reported by the engine

mod config;
mod error;
mod history;

pub use config::{ConfigIssue, MachineConfig, StateDef};
pub use error::MachineError;
pub use history::History;
