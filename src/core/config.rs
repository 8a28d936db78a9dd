//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and the state each event leads to. It is plain data: it can
//! be deserialized from JSON, built with [`crate::builder::ConfigurationBuilder`],
//! or assembled by hand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Initial state '{initial}' is not a configured state")]
    UnknownInitialState { initial: String },

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Transitions declared on a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier -> target state identifier.
    ///
    /// Targets are not required to be configured states.
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDefinition {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn with_transition(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target of `event`, if this state declares it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state declares `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Immutable description of a state machine.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::Configuration;
///
/// let config = Configuration::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Identifier of the starting state.
    pub initial: String,
    /// State identifier -> definition.
    pub states: BTreeMap<String, StateDefinition>,
}

impl Configuration {
    /// Create a configuration with no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: BTreeMap::new(),
        }
    }

    /// Add a state, returning the updated configuration.
    ///
    /// A state added twice keeps the last definition.
    pub fn with_state(mut self, id: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(id.into(), definition);
        self
    }

    /// Parse a configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the configuration as JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check that the initial state is configured.
    ///
    /// Machines never call this on their own; see [`crate::StateMachine::try_new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contains(&self.initial) {
            Ok(())
        } else {
            Err(ConfigError::UnknownInitialState {
                initial: self.initial.clone(),
            })
        }
    }

    /// Whether `state` is a configured state.
    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Definition of `state`, if configured.
    pub fn state(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// Target reached from `state` on `event`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state).and_then(|definition| definition.target(event))
    }

    /// All configured state identifiers, sorted.
    pub fn state_ids(&self) -> Vec<&str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// Identifiers of the states that declare `event`, sorted.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Transitions whose target is not a configured state, as
    /// `(state, event, target)`.
    pub fn dangling_targets(&self) -> Vec<(&str, &str, &str)> {
        self.states
            .iter()
            .flat_map(|(id, definition)| {
                definition
                    .transitions
                    .iter()
                    .map(move |(event, target)| (id.as_str(), event.as_str(), target.as_str()))
            })
            .filter(|(_, _, target)| !self.contains(target))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> Configuration {
        Configuration::new("closed")
            .with_state(
                "closed",
                StateDefinition::new()
                    .with_transition("open", "opened")
                    .with_transition("lock", "locked"),
            )
            .with_state("opened", StateDefinition::new().with_transition("close", "closed"))
            .with_state("locked", StateDefinition::new().with_transition("unlock", "closed"))
    }

    #[test]
    fn state_ids_lists_every_state() {
        assert_eq!(door().state_ids(), vec!["closed", "locked", "opened"]);
    }

    #[test]
    fn states_handling_filters_by_event() {
        let config = door();
        assert_eq!(config.states_handling("open"), vec!["closed"]);
        assert_eq!(config.states_handling("unlock"), vec!["locked"]);
        assert!(config.states_handling("kick").is_empty());
    }

    #[test]
    fn target_resolves_declared_transition() {
        let config = door();
        assert_eq!(config.target("closed", "lock"), Some("locked"));
        assert_eq!(config.target("opened", "lock"), None);
        assert_eq!(config.target("missing", "lock"), None);
    }

    #[test]
    fn validate_rejects_unknown_initial() {
        let config = Configuration::new("nowhere").with_state("somewhere", StateDefinition::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownInitialState { initial }) if initial == "nowhere"
        ));
        assert!(door().validate().is_ok());
    }

    #[test]
    fn dangling_targets_reports_virtual_states() {
        let config = door().with_state(
            "opened",
            StateDefinition::new()
                .with_transition("close", "closed")
                .with_transition("break", "broken"),
        );
        assert_eq!(config.dangling_targets(), vec![("opened", "break", "broken")]);
        assert!(door().dangling_targets().is_empty());
    }

    #[test]
    fn json_shape_matches_external_format() {
        let json = r#"{
            "initial": "a",
            "states": {
                "a": { "transitions": { "go": "b" } },
                "b": {}
            }
        }"#;
        let config = Configuration::from_json(json).unwrap();

        assert_eq!(config.initial, "a");
        assert_eq!(config.target("a", "go"), Some("b"));
        assert!(config.state("b").unwrap().transitions.is_empty());

        let reparsed = Configuration::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = Configuration::from_json(r#"{ "states": {} }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
