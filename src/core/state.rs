//! Read-only view of an LTS state.
//!
//! States are assembled with [`StateBuilder`](crate::builder::StateBuilder)
//! and frozen into a [`State`] by `build()`. A frozen state has no mutators.

use super::kind::{StateRole, TransitionKind};
use super::transition::Transition;
use serde::Serialize;

/// A named node with a role and its incident transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct State {
    pub(crate) name: String,
    pub(crate) role: StateRole,
    pub(crate) incoming: Vec<Transition>,
    pub(crate) outgoing: Vec<Transition>,
}

impl State {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> StateRole {
        self.role
    }

    pub fn is_initial(&self) -> bool {
        self.role == StateRole::Initial
    }

    pub fn is_final(&self) -> bool {
        self.role == StateRole::Final
    }

    /// First incoming transition named `name`.
    ///
    /// Always absent for an initial state, whatever its incoming list holds.
    pub fn get_incoming_transition(&self, name: &str) -> Option<&Transition> {
        tracing::debug!(state = %self.name, transition = name, "get incoming transition");

        if !self.role.accepts_incoming() {
            tracing::warn!(state = %self.name, "initial state has no incoming transitions");
            return None;
        }

        let found = self.incoming.iter().find(|t| t.name() == name);
        if found.is_some() {
            tracing::debug!(state = %self.name, transition = name, "transition found");
        }
        found
    }

    /// First outgoing transition named `name`.
    ///
    /// Always absent for a final state.
    pub fn get_outgoing_transition(&self, name: &str) -> Option<&Transition> {
        tracing::debug!(state = %self.name, transition = name, "get outgoing transition");

        if !self.role.accepts_outgoing() {
            tracing::warn!(state = %self.name, "final state has no outgoing transitions");
            return None;
        }

        let found = self.outgoing.iter().find(|t| t.name() == name);
        if found.is_some() {
            tracing::debug!(state = %self.name, transition = name, "transition found");
        }
        found
    }

    pub fn get_incoming_transitions(&self) -> &[Transition] {
        &self.incoming
    }

    pub fn get_outgoing_transitions(&self) -> &[Transition] {
        &self.outgoing
    }

    pub fn get_outgoing_emissions(&self) -> Vec<&Transition> {
        filter_kind(&self.outgoing, TransitionKind::Emission)
    }

    pub fn get_outgoing_receptions(&self) -> Vec<&Transition> {
        filter_kind(&self.outgoing, TransitionKind::Reception)
    }

    pub fn get_outgoing_internal(&self) -> Vec<&Transition> {
        filter_kind(&self.outgoing, TransitionKind::Internal)
    }

    pub fn get_incoming_internal(&self) -> Vec<&Transition> {
        filter_kind(&self.incoming, TransitionKind::Internal)
    }

    pub fn count_incoming(&self) -> usize {
        self.incoming.len()
    }

    pub fn count_outgoing(&self) -> usize {
        self.outgoing.len()
    }
}

fn filter_kind(transitions: &[Transition], kind: TransitionKind) -> Vec<&Transition> {
    transitions.iter().filter(|t| t.kind() == kind).collect()
}
