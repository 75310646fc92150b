//! Read-only view of a complete transition system.

use super::state::State;
use super::transition::Transition;
use serde::Serialize;

/// A named collection of states, in insertion order.
///
/// State names are expected to be unique but this is not enforced; lookups
/// return the first state with a matching name. Use
/// [`validate_graph`](crate::validation::validate_graph) to detect duplicates.
///
/// # Example
///
/// ```rust
/// use protocol_lts::builder::{GraphBuilder, StateBuilder};
/// use protocol_lts::core::{StateRole, Transition, TransitionKind};
///
/// let hello = Transition::new("hello", TransitionKind::Emission, "Done", vec![]).unwrap();
///
/// let mut start = StateBuilder::new("Start", StateRole::Initial);
/// start.add_outgoing_transition(hello.clone()).unwrap();
///
/// let mut done = StateBuilder::new("Done", StateRole::Final);
/// done.add_incoming_transition(hello.clone());
///
/// let mut graph = GraphBuilder::new("greeter");
/// graph.add_state(start.build());
/// graph.add_state(done.build());
/// let graph = graph.build();
///
/// let target = graph.resolve_target(&hello).unwrap();
/// assert!(target.is_final());
/// assert!(graph.get_state("Missing").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub(crate) name: String,
    pub(crate) states: Vec<State>,
}

impl Graph {
    /// Create a graph from already-built states.
    pub fn new(name: impl Into<String>, states: Vec<State>) -> Self {
        Self {
            name: name.into(),
            states,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First state named `name` in insertion order.
    pub fn get_state(&self, name: &str) -> Option<&State> {
        tracing::debug!(graph = %self.name, state = name, "looking for state");

        let found = self.states.iter().find(|s| s.name() == name);
        match found {
            Some(_) => tracing::debug!(graph = %self.name, state = name, "state found"),
            None => tracing::warn!(graph = %self.name, state = name, "state not found"),
        }
        found
    }

    pub fn get_states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The first state with the initial role.
    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|s| s.is_initial())
    }

    pub fn final_states(&self) -> Vec<&State> {
        self.states.iter().filter(|s| s.is_final()).collect()
    }

    /// Look up the state a transition leads to.
    pub fn resolve_target(&self, transition: &Transition) -> Option<&State> {
        self.get_state(transition.target_state_name())
    }
}
