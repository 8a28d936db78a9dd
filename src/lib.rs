//! Undo FSM: a minimal string-keyed state machine with undo/redo
//!
//! A machine is created from a declarative [`Configuration`] naming the
//! initial state and the event-triggered transitions of every state. It
//! tracks the current state and keeps a linear, append-only history that
//! can be walked back with [`StateMachine::undo`] and forward again with
//! [`StateMachine::redo`].
//!
//! # Core Concepts
//!
//! - **Configuration**: Immutable states and transitions, loadable from JSON
//! - **History**: Append-only log of visited states with an undo cursor
//! - **StateMachine**: Applies transitions and navigates history
//!
//! # Example
//!
//! ```rust
//! use undo_fsm::{fsm_config, MachineError, StateMachine};
//!
//! let config = fsm_config! {
//!     initial: normal,
//!     states: {
//!         normal => { study => busy, get_tired => sleeping },
//!         busy => { get_tired => sleeping, get_hungry => hungry },
//!         hungry => { eat => normal },
//!         sleeping => { get_hungry => hungry, get_up => normal },
//!     }
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("study").unwrap();
//! assert_eq!(machine.state(), "busy");
//!
//! assert!(matches!(
//!     machine.trigger("eat"),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "normal");
//! assert_eq!(machine.states(Some("get_hungry")), vec!["busy", "sleeping"]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigurationBuilder};
pub use crate::core::{ConfigError, Configuration, History, StateDefinition};
pub use machine::{MachineError, StateMachine};
