//! Errors returned by state machine operations.

use crate::core::config::ConfigIssue;
use thiserror::Error;

/// Errors that can occur when constructing or driving a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Configuration not supplied")]
    ConfigMissing,

    #[error("Invalid configuration: {}", format_issues(.issues))]
    InvalidConfig { issues: Vec<ConfigIssue> },

    #[error("State '{state}' does not exist")]
    UnknownState { state: String },

    #[error("Event '{event}' has no transition from state '{state}'")]
    UnknownEvent { event: String, state: String },
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_lists_every_issue() {
        let error = MachineError::InvalidConfig {
            issues: vec![
                ConfigIssue::InitialNotDefined {
                    initial: "ghost".to_string(),
                },
                ConfigIssue::DanglingTarget {
                    state: "idle".to_string(),
                    event: "go".to_string(),
                    target: "nowhere".to_string(),
                },
            ],
        };

        let message = error.to_string();
        assert!(message.contains("'ghost'"));
        assert!(message.contains("'nowhere'"));
    }

    #[test]
    fn unknown_event_names_state_and_event() {
        let error = MachineError::UnknownEvent {
            event: "fly".to_string(),
            state: "idle".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Event 'fly' has no transition from state 'idle'"
        );
    }
}
