//! Construction-phase view of a state.

use crate::builder::error::ConstructionError;
use crate::core::{State, StateRole, Transition};

/// Mutable state under construction. Freeze it with [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct StateBuilder {
    state: State,
}

impl StateBuilder {
    /// Start a state with no transitions.
    pub fn new(name: impl Into<String>, role: StateRole) -> Self {
        Self {
            state: State {
                name: name.into(),
                role,
                incoming: Vec::new(),
                outgoing: Vec::new(),
            },
        }
    }

    /// Start a state with pre-populated transition lists.
    ///
    /// Fails if an initial state is given incoming transitions or a final
    /// state is given outgoing transitions.
    pub fn with_transitions(
        name: impl Into<String>,
        role: StateRole,
        incoming: Vec<Transition>,
        outgoing: Vec<Transition>,
    ) -> Result<Self, ConstructionError> {
        let name = name.into();

        if !role.accepts_incoming() && !incoming.is_empty() {
            return Err(ConstructionError::InitialStateWithIncoming { state: name });
        }

        if let Some(first) = outgoing.first().filter(|_| !role.accepts_outgoing()) {
            tracing::debug!(state = %name, outgoing = outgoing.len(), "rejecting outgoing list");
            return Err(ConstructionError::FinalStateWithOutgoing {
                transition: first.name().to_string(),
                state: name,
            });
        }

        Ok(Self {
            state: State {
                name,
                role,
                incoming,
                outgoing,
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn role(&self) -> StateRole {
        self.state.role
    }

    /// Append an incoming transition. `None` is a no-op.
    ///
    /// The role is not checked here: an initial state accepts the edge and
    /// a warning is emitted. `validate_graph` reports it later.
    pub fn add_incoming_transition(&mut self, transition: impl Into<Option<Transition>>) {
        let Some(transition) = transition.into() else {
            return;
        };

        if !self.state.role.accepts_incoming() {
            tracing::warn!(
                state = %self.state.name,
                transition = transition.name(),
                "incoming transition added to initial state"
            );
        }

        tracing::debug!(
            state = %self.state.name,
            transition = transition.name(),
            "add new incoming transition"
        );
        self.state.incoming.push(transition);
    }

    /// Append an outgoing transition. `None` is a no-op.
    ///
    /// Fails on a final state, leaving the outgoing list unchanged.
    pub fn add_outgoing_transition(
        &mut self,
        transition: impl Into<Option<Transition>>,
    ) -> Result<(), ConstructionError> {
        let Some(transition) = transition.into() else {
            return Ok(());
        };

        tracing::debug!(
            state = %self.state.name,
            transition = transition.name(),
            "add new outgoing transition"
        );

        if !self.state.role.accepts_outgoing() {
            return Err(ConstructionError::FinalStateWithOutgoing {
                state: self.state.name.clone(),
                transition: transition.name().to_string(),
            });
        }

        self.state.outgoing.push(transition);
        Ok(())
    }

    /// Freeze into a read-only [`State`].
    pub fn build(self) -> State {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransitionKind;

    fn emission(name: &str) -> Transition {
        Transition::new(name, TransitionKind::Emission, "Next", vec![]).unwrap()
    }

    #[test]
    fn initial_with_incoming_is_rejected() {
        let result = StateBuilder::with_transitions(
            "Start",
            StateRole::Initial,
            vec![emission("back")],
            Vec::new(),
        );

        assert!(matches!(
            result,
            Err(ConstructionError::InitialStateWithIncoming { ref state }) if state == "Start"
        ));
    }

    #[test]
    fn final_with_outgoing_is_rejected() {
        let result = StateBuilder::with_transitions(
            "End",
            StateRole::Final,
            Vec::new(),
            vec![emission("again")],
        );

        assert_eq!(
            result.unwrap_err(),
            ConstructionError::FinalStateWithOutgoing {
                state: "End".to_string(),
                transition: "again".to_string(),
            }
        );
    }

    #[test]
    fn legal_lists_are_kept_in_order() {
        let state = StateBuilder::with_transitions(
            "Mid",
            StateRole::Normal,
            vec![emission("in1"), emission("in2")],
            vec![emission("out1")],
        )
        .unwrap()
        .build();

        let incoming: Vec<&str> = state.get_incoming_transitions().iter().map(|t| t.name()).collect();
        assert_eq!(incoming, vec!["in1", "in2"]);
        assert_eq!(state.count_outgoing(), 1);
    }

    #[test]
    fn final_state_outgoing_mutator_fails_without_change() {
        let mut builder = StateBuilder::new("End", StateRole::Final);

        let result = builder.add_outgoing_transition(emission("t3"));

        assert!(matches!(
            result,
            Err(ConstructionError::FinalStateWithOutgoing { .. })
        ));
        assert_eq!(builder.build().count_outgoing(), 0);
    }

    #[test]
    fn absent_transition_is_noop() {
        let mut builder = StateBuilder::new("End", StateRole::Final);

        builder.add_incoming_transition(None);
        assert!(builder.add_outgoing_transition(None).is_ok());

        let state = builder.build();
        assert_eq!(state.count_incoming(), 0);
        assert_eq!(state.count_outgoing(), 0);
    }

    #[test]
    fn incoming_mutator_does_not_check_initial_role() {
        let mut builder = StateBuilder::new("Start", StateRole::Initial);
        builder.add_incoming_transition(emission("loop"));

        assert_eq!(builder.build().count_incoming(), 1);
    }

    #[test]
    fn accessors_reflect_construction() {
        let builder = StateBuilder::new("S", StateRole::Normal);
        assert_eq!(builder.name(), "S");
        assert_eq!(builder.role(), StateRole::Normal);
    }
}
