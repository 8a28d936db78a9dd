//! State machine that applies transitions and navigates history.

pub mod error;

pub use error::MachineError;

use crate::core::{ConfigError, Configuration, History};
use std::sync::Arc;
use tracing::{debug, trace};

/// String-keyed state machine with linear undo/redo.
///
/// The machine shares its [`Configuration`] read-only and owns the current
/// state plus a [`History`] log. It is meant for a single owner; wrap it in
/// a mutex if several threads need it.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::{Configuration, StateDefinition};
/// use undo_fsm::StateMachine;
///
/// let config = Configuration::new("a")
///     .with_state("a", StateDefinition::new().with_transition("toB", "b"))
///     .with_state("b", StateDefinition::new().with_transition("toA", "a"));
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("toB").unwrap();
/// assert_eq!(machine.state(), "b");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "a");
///
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "b");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<Configuration>,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is not validated; an unknown initial state simply
    /// becomes the current state.
    pub fn new(config: impl Into<Arc<Configuration>>) -> Self {
        let config = config.into();
        let current = config.initial.clone();
        Self {
            history: History::new(current.clone()),
            current,
            config,
        }
    }

    /// Create a machine after checking that the initial state is configured.
    pub fn try_new(config: impl Into<Arc<Configuration>>) -> Result<Self, ConfigError> {
        let config = config.into();
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Current state (pure).
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Jump directly to a configured state.
    ///
    /// Records the state being left, not the one entered.
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        if !self.config.contains(state) {
            return Err(MachineError::InvalidState {
                state: state.to_string(),
            });
        }

        let previous = std::mem::replace(&mut self.current, state.to_string());
        debug!(from = %previous, to = %state, "changed state");
        self.history.record(previous);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// The target does not have to be a configured state. Records the state
    /// entered.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let Some(target) = self.config.target(&self.current, event) else {
            return Err(MachineError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        let target = target.to_string();
        debug!(from = %self.current, to = %target, event, "triggered transition");
        self.current = target.clone();
        self.history.record(target);
        Ok(())
    }

    /// Go back to the initial state without touching history.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "reset");
        self.current = self.config.initial.clone();
    }

    /// Configured states, or only those declaring `event` when given.
    ///
    /// Sorted by identifier.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            Some(event) => self.config.states_handling(event),
            None => self.config.state_ids(),
        }
    }

    /// Step one entry back through history.
    ///
    /// Returns `false` and changes nothing when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back() {
            Some(state) => {
                self.current = state.to_string();
                debug!(to = %self.current, cursor = self.history.cursor(), "undo");
                true
            }
            None => {
                trace!(cursor = self.history.cursor(), "undo unavailable");
                false
            }
        }
    }

    /// Step one entry forward after an undo.
    ///
    /// Returns `false` and changes nothing when redo is unavailable, which
    /// includes any point after `change_state` or `trigger`.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(state) => {
                self.current = state.to_string();
                debug!(to = %self.current, cursor = self.history.cursor(), "redo");
                true
            }
            None => {
                trace!(cursor = self.history.cursor(), "redo unavailable");
                false
            }
        }
    }

    /// Empty the history log. Current state, cursor and redo flag stay.
    pub fn clear_history(&mut self) {
        debug!(dropped = self.history.len(), "cleared history");
        self.history.clear();
    }

    /// Whether [`undo`](Self::undo) would succeed (pure).
    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    /// Whether [`redo`](Self::redo) would succeed (pure).
    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Events declared on the current state, sorted.
    ///
    /// Empty when the current state is not configured.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .state(&self.current)
            .map(|definition| definition.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Recorded states, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Steps back from the end of history.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }
}
