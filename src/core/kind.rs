//! Closed enumerations classifying transitions and states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a transition does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Unobservable action (tau). Never carries parameters.
    Internal,
    /// The protocol sends a message.
    Emission,
    /// The protocol receives a message.
    Reception,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Internal => "INTERNAL",
            Self::Emission => "EMISSION",
            Self::Reception => "RECEPTION",
        };
        f.write_str(label)
    }
}

/// Position of a state within the LTS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateRole {
    /// Entry point. Has no incoming transitions.
    Initial,
    /// Terminal state. Has no outgoing transitions.
    Final,
    Normal,
}

impl StateRole {
    /// Whether a state with this role may have incoming transitions.
    pub fn accepts_incoming(self) -> bool {
        !matches!(self, Self::Initial)
    }

    /// Whether a state with this role may have outgoing transitions.
    pub fn accepts_outgoing(self) -> bool {
        !matches!(self, Self::Final)
    }
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Initial => "INIT",
            Self::Final => "FINAL",
            Self::Normal => "NORMAL",
        };
        f.write_str(label)
    }
}
