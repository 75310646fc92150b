//! Construction-phase view of a graph.

use crate::core::{Graph, State};

/// Collects states while a protocol description is being loaded.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    name: String,
    states: Vec<State>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_states(name, Vec::new())
    }

    /// Create a builder pre-seeded with states.
    pub fn with_states(name: impl Into<String>, states: Vec<State>) -> Self {
        Self {
            name: name.into(),
            states,
        }
    }

    /// Append a state. `None` is a no-op. Names are not checked for uniqueness.
    pub fn add_state(&mut self, state: impl Into<Option<State>>) -> &mut Self {
        if let Some(state) = state.into() {
            tracing::debug!(graph = %self.name, state = state.name(), "add state to graph");
            self.states.push(state);
        }
        self
    }

    /// Add multiple states at once.
    pub fn states(&mut self, states: impl IntoIterator<Item = State>) -> &mut Self {
        for state in states {
            self.add_state(state);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Freeze into a read-only [`Graph`].
    pub fn build(self) -> Graph {
        Graph::new(self.name, self.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateBuilder;
    use crate::core::StateRole;

    #[test]
    fn add_state_appends_in_order() {
        let mut builder = GraphBuilder::new("G");
        builder
            .add_state(StateBuilder::new("A", StateRole::Initial).build())
            .add_state(StateBuilder::new("B", StateRole::Final).build());

        let graph = builder.build();
        let names: Vec<&str> = graph.get_states().iter().map(State::name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn absent_state_is_ignored() {
        let mut builder = GraphBuilder::new("G");
        builder.add_state(None);
        assert!(builder.is_empty());
    }

    #[test]
    fn duplicates_are_accepted() {
        let mut builder = GraphBuilder::with_states(
            "G",
            vec![StateBuilder::new("A", StateRole::Normal).build()],
        );
        builder.states(vec![
            StateBuilder::new("A", StateRole::Final).build(),
            StateBuilder::new("B", StateRole::Normal).build(),
        ]);

        assert_eq!(builder.len(), 3);
        let graph = builder.build();
        assert_eq!(graph.get_state("A").map(State::role), Some(StateRole::Normal));
    }
}
