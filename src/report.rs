//! Human-readable and structured dumps of a transition system.
//!
//! These are informational only. The `Display` impls mirror the layout of a
//! console state report; [`GraphReport`] is a compact serializable summary.

use crate::core::{Graph, State, StateRole, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const GRAPH_RULE: &str =
    "####################################################################################";
const STATE_RULE: &str = "*************************************************************";
const TRANSITION_RULE: &str = "    ---------------------------------------";

/// Errors produced while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

fn write_transitions(f: &mut fmt::Formatter<'_>, transitions: &[Transition]) -> fmt::Result {
    for transition in transitions {
        writeln!(f, "{TRANSITION_RULE}")?;
        writeln!(f, "    Name: {}", transition.name())?;
        writeln!(f, "    Type: {}", transition.kind())?;
        writeln!(f, "    num of params: {}", transition.params().len())?;
        writeln!(f, "    params:")?;
        for param in transition.params() {
            writeln!(f, "        {param}")?;
        }
    }
    Ok(())
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{STATE_RULE}")?;
        writeln!(f, "State report")?;
        writeln!(f, "Name: {}", self.name())?;
        writeln!(f, "Type: {}", self.role())?;
        writeln!(f, "Incoming Transitions:")?;
        write_transitions(f, self.get_incoming_transitions())?;
        writeln!(f, "Outgoing Transitions:")?;
        write_transitions(f, self.get_outgoing_transitions())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{GRAPH_RULE}")?;
        writeln!(f, "#")?;
        writeln!(f, "# Graph Name: {}", self.name())?;
        writeln!(f, "# Number of states: {}", self.len())?;
        writeln!(f, "#")?;
        writeln!(f, "{GRAPH_RULE}")?;
        writeln!(f, "#")?;
        for state in self.get_states() {
            write!(f, "{state}")?;
        }
        writeln!(f, "#")?;
        writeln!(f, "{GRAPH_RULE}")
    }
}

/// Per-state counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    pub name: String,
    pub role: StateRole,
    pub incoming: usize,
    pub outgoing: usize,
    pub emissions: usize,
    pub receptions: usize,
    pub internal: usize,
}

impl From<&State> for StateSummary {
    fn from(state: &State) -> Self {
        Self {
            name: state.name().to_string(),
            role: state.role(),
            incoming: state.count_incoming(),
            outgoing: state.count_outgoing(),
            emissions: state.get_outgoing_emissions().len(),
            receptions: state.get_outgoing_receptions().len(),
            internal: state.get_outgoing_internal().len(),
        }
    }
}

/// Serializable overview of a graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphReport {
    pub name: String,
    pub states: Vec<StateSummary>,
}

impl GraphReport {
    pub fn new(graph: &Graph) -> Self {
        Self {
            name: graph.name().to_string(),
            states: graph.get_states().iter().map(StateSummary::from).collect(),
        }
    }

    /// Total number of outgoing transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.outgoing).sum()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }
}
