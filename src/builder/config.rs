//! Builders for configurations and their states.

use crate::builder::error::BuildError;
use crate::core::{Configuration, StateDefinition};
use std::collections::BTreeMap;

/// Builder for a single state's transitions.
#[derive(Debug, Default)]
pub struct StateBuilder {
    definition: StateDefinition,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `target` on `event`. A repeated event keeps the last target.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.definition.transitions.insert(event.into(), target.into());
        self
    }

    pub fn build(self) -> StateDefinition {
        self.definition
    }
}

/// Builder for constructing configurations with a fluent API.
///
/// Unlike deserialized or hand-built configurations, a built configuration
/// is always validated.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    initial: Option<String>,
    states: BTreeMap<String, StateDefinition>,
    duplicate: Option<String>,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, describing its transitions with a closure.
    pub fn state<F>(self, id: impl Into<String>, describe: F) -> Self
    where
        F: FnOnce(StateBuilder) -> StateBuilder,
    {
        let definition = describe(StateBuilder::new()).build();
        self.add_state(id, definition)
    }

    /// Declare a state from a ready definition.
    pub fn add_state(mut self, id: impl Into<String>, definition: StateDefinition) -> Self {
        let id = id.into();
        if self.states.contains_key(&id) {
            self.duplicate.get_or_insert_with(|| id.clone());
        }
        self.states.insert(id, definition);
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing or unknown, or a
    /// state was declared twice.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if let Some(state) = self.duplicate {
            return Err(BuildError::DuplicateState { state });
        }

        let config = Configuration {
            initial,
            states: self.states,
        };
        config.validate()?;

        Ok(config)
    }
}
