//! Structural problems found in a built graph.

use thiserror::Error;

/// A well-formedness problem reported by
/// [`validate_graph`](crate::validation::validate_graph).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphViolation {
    #[error("No initial state defined")]
    MissingInitialState,

    #[error("Multiple initial states: {states:?}")]
    MultipleInitialStates { states: Vec<String> },

    #[error("State name '{state}' is used more than once")]
    DuplicateStateName { state: String },

    #[error("Transition '{transition}' from '{state}' targets unknown state '{target}'")]
    DanglingTarget {
        state: String,
        transition: String,
        target: String,
    },

    #[error("Initial state '{state}' has incoming transitions")]
    InitialStateWithIncoming { state: String },

    #[error("Transition '{transition}' from '{state}' is missing from its target's incoming list")]
    UnmatchedIncoming { state: String, transition: String },
}
