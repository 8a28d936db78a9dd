//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and the [`fsm_config!`](crate::fsm_config)
//! macro for creating validated configurations with minimal boilerplate.

pub mod config;
pub mod error;
pub mod macros;

pub use config::{ConfigurationBuilder, StateBuilder};
pub use error::BuildError;

use crate::core::Configuration;

/// Create a configuration from `(state, event, target)` triples.
///
/// Every source becomes a configured state; targets that never appear as a
/// source stay virtual. The configuration is validated.
///
/// # Example
///
/// ```
/// use undo_fsm::builder::from_transitions;
///
/// let config = from_transitions("a", [("a", "go", "b"), ("b", "back", "a")]).unwrap();
/// assert_eq!(config.target("b", "back"), Some("a"));
/// ```
pub fn from_transitions<'a, I>(initial: &str, transitions: I) -> Result<Configuration, BuildError>
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    let mut config = Configuration::new(initial);
    for (state, event, target) in transitions {
        config
            .states
            .entry(state.to_string())
            .or_default()
            .transitions
            .insert(event.to_string(), target.to_string());
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;

    #[test]
    fn from_transitions_groups_by_source() {
        let config = from_transitions(
            "a",
            [("a", "go", "b"), ("a", "skip", "c"), ("b", "back", "a")],
        )
        .unwrap();

        assert_eq!(config.state_ids(), vec!["a", "b"]);
        assert_eq!(config.states_handling("go"), vec!["a"]);
        assert_eq!(config.dangling_targets(), vec![("a", "skip", "c")]);
    }

    #[test]
    fn from_transitions_validates_initial() {
        let result = from_transitions("z", [("a", "go", "b")]);
        assert!(matches!(
            result,
            Err(BuildError::Config(ConfigError::UnknownInitialState { .. }))
        ));
    }
}
