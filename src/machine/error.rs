//! Machine operation errors.

use thiserror::Error;

/// Errors returned by state-changing operations.
///
/// Running out of undo or redo steps is not an error; those operations
/// report it through their `bool` result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// `change_state` was given a state that is not configured.
    #[error("Unknown state '{state}'")]
    InvalidState { state: String },

    /// `trigger` was given an event the current state does not declare.
    #[error("State '{state}' has no transition for event '{event}'")]
    InvalidTransition { state: String, event: String },
}
