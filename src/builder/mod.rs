//! Construction-phase API used by protocol loaders.
//!
//! Builders are the only place where the model can be mutated. Once a
//! loader has wired every transition into its origin's outgoing list and its
//! target's incoming list, `build()` freezes the result into the read-only
//! types from [`core`](crate::core).
//!
//! # Example
//!
//! ```
//! use protocol_lts::builder::{GraphBuilder, StateBuilder};
//! use protocol_lts::core::{StateRole, TransitionKind};
//!
//! let mut graph = GraphBuilder::new("ping");
//! let mut idle = StateBuilder::new("Idle", StateRole::Initial);
//! let mut done = StateBuilder::new("Done", StateRole::Final);
//!
//! protocol_lts::builder::connect(
//!     &mut idle,
//!     &mut done,
//!     "ping",
//!     TransitionKind::Emission,
//!     vec!["seq:int".into()],
//! )
//! .unwrap();
//!
//! graph.add_state(idle.build()).add_state(done.build());
//! let graph = graph.build();
//! assert_eq!(graph.get_state("Done").unwrap().count_incoming(), 1);
//! ```

pub mod error;
pub mod graph;
pub mod state;

pub use error::ConstructionError;
pub use graph::GraphBuilder;
pub use state::StateBuilder;

use crate::core::{Parameter, Transition, TransitionKind};

/// Create a transition from `origin` to `target` and wire it into both
/// states: `origin`'s outgoing list and `target`'s incoming list.
///
/// Nothing is modified if the transition cannot be constructed or `origin`
/// rejects it.
pub fn connect(
    origin: &mut StateBuilder,
    target: &mut StateBuilder,
    name: &str,
    kind: TransitionKind,
    params: Vec<Parameter>,
) -> Result<Transition, ConstructionError> {
    let transition = Transition::new(name, kind, target.name(), params)?;
    origin.add_outgoing_transition(transition.clone())?;
    target.add_incoming_transition(transition.clone());
    Ok(transition)
}
