//! The state machine engine.
//!
//! `StateMachine` owns a validated configuration, the current state, and
//! the undo/redo history. It is synchronous and does no locking; callers
//! that share one machine across threads wrap it in their own `Mutex`.

mod state_machine;

pub use state_machine::StateMachine;
