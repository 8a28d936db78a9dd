//! Core data types.
//!
//! This module contains the plain data behind a machine:
//! - The declarative `Configuration` of states and transitions
//! - The append-only `History` log with its undo cursor
//!
//! Nothing here knows about the current state; that lives in
//! [`crate::machine::StateMachine`].

mod config;
mod history;

pub use config::{ConfigError, Configuration, StateDefinition};
pub use history::History;
