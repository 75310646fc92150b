//! Errors raised while assembling transitions, states and graphs.

use thiserror::Error;

/// A structural invariant was violated during construction.
///
/// Each variant names the entity that was being built. The offending
/// entity is not created or modified.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Illegal transition '{transition}': tau has no parameters list")]
    InternalTransitionWithParams { transition: String },

    #[error("Initial state '{state}' does not have incoming transitions")]
    InitialStateWithIncoming { state: String },

    #[error("Final state '{state}' does not have outgoing transitions (rejected '{transition}')")]
    FinalStateWithOutgoing { state: String, transition: String },
}
