//! Core transition system types.
//!
//! This module contains the read-side data model consumed by analysis code:
//! - `Transition` edges with typed parameters
//! - `State` nodes classified by role
//! - `Graph` containers with name-based lookup
//!
//! Everything here is immutable. Construction goes through the
//! [`builder`](crate::builder) module.

mod graph;
mod kind;
mod parameter;
mod state;
mod transition;

pub use graph::Graph;
pub use kind::{StateRole, TransitionKind};
pub use parameter::Parameter;
pub use state::State;
pub use transition::Transition;
