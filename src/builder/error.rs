//! Build errors for configuration builders.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State '{state}' declared more than once")]
    DuplicateState { state: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
