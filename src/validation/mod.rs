//! Whole-graph structural validation.
//!
//! Construction only enforces local invariants (an internal transition has
//! no parameters, a final state has no outgoing edges). Properties spanning
//! several states, such as name uniqueness or target resolution, are checked
//! here after the graph is built.
//!
//! Validation uses Stillwater's `Validation` type so that every problem is
//! reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use protocol_lts::builder::{GraphBuilder, StateBuilder};
//! use protocol_lts::core::{StateRole, Transition};
//! use protocol_lts::validation::{validate_graph, GraphViolation};
//! use stillwater::validation::Validation;
//!
//! let mut start = StateBuilder::new("Start", StateRole::Initial);
//! start.add_outgoing_transition(Transition::internal("tau", "Nowhere")).unwrap();
//!
//! let mut graph = GraphBuilder::new("broken");
//! graph.add_state(start.build());
//!
//! match validate_graph(&graph.build()) {
//!     Validation::Failure(errors) => {
//!         assert!(errors
//!             .iter()
//!             .any(|e| matches!(e, GraphViolation::DanglingTarget { .. })));
//!     }
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

pub mod violations;

pub use violations::GraphViolation;

use crate::core::Graph;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<GraphViolation>>;

/// Check every structural rule, accumulating ALL violations.
pub fn validate_graph(graph: &Graph) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    checks.push(check_initial_states(graph));
    checks.extend(check_unique_names(graph));

    for state in graph.get_states() {
        if state.is_initial() && state.count_incoming() > 0 {
            checks.push(Validation::fail(GraphViolation::InitialStateWithIncoming {
                state: state.name().to_string(),
            }));
        }

        for transition in state.get_outgoing_transitions() {
            let target = graph
                .get_states()
                .iter()
                .find(|s| s.name() == transition.target_state_name());

            let check = match target {
                None => Validation::fail(GraphViolation::DanglingTarget {
                    state: state.name().to_string(),
                    transition: transition.name().to_string(),
                    target: transition.target_state_name().to_string(),
                }),
                Some(target) if !target.get_incoming_transitions().contains(transition) => {
                    Validation::fail(GraphViolation::UnmatchedIncoming {
                        state: state.name().to_string(),
                        transition: transition.name().to_string(),
                    })
                }
                Some(_) => Validation::success(()),
            };
            checks.push(check);
        }
    }

    let result = Validation::all_vec(checks).map(|_| ());
    if let Validation::Failure(errors) = &result {
        tracing::warn!(graph = graph.name(), violations = errors.len(), "graph is not well formed");
    }
    result
}

/// `true` when [`validate_graph`] finds nothing to report.
pub fn is_well_formed(graph: &Graph) -> bool {
    matches!(validate_graph(graph), Validation::Success(_))
}

fn check_initial_states(graph: &Graph) -> Check {
    let initial: Vec<String> = graph
        .get_states()
        .iter()
        .filter(|s| s.is_initial())
        .map(|s| s.name().to_string())
        .collect();

    match initial.len() {
        0 => Validation::fail(GraphViolation::MissingInitialState),
        1 => Validation::success(()),
        _ => Validation::fail(GraphViolation::MultipleInitialStates { states: initial }),
    }
}

fn check_unique_names(graph: &Graph) -> Vec<Check> {
    let mut seen: Vec<&str> = Vec::new();
    let mut reported: Vec<&str> = Vec::new();
    let mut checks = Vec::new();

    for state in graph.get_states() {
        let name = state.name();
        if !seen.contains(&name) {
            seen.push(name);
        } else if !reported.contains(&name) {
            reported.push(name);
            checks.push(Validation::fail(GraphViolation::DuplicateStateName {
                state: name.to_string(),
            }));
        }
    }
    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{connect, GraphBuilder, StateBuilder};
    use crate::core::{StateRole, Transition, TransitionKind};

    fn violations(graph: &Graph) -> Vec<GraphViolation> {
        match validate_graph(graph) {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    fn well_formed() -> Graph {
        let mut s0 = StateBuilder::new("S0", StateRole::Initial);
        let mut s1 = StateBuilder::new("S1", StateRole::Normal);
        let mut s2 = StateBuilder::new("S2", StateRole::Final);
        connect(&mut s0, &mut s1, "t1", TransitionKind::Reception, vec!["x:int".into()]).unwrap();
        connect(&mut s1, &mut s2, "t2", TransitionKind::Emission, vec![]).unwrap();

        let mut graph = GraphBuilder::new("G");
        graph.states(vec![s0.build(), s1.build(), s2.build()]);
        graph.build()
    }

    #[test]
    fn well_formed_graph_passes() {
        let graph = well_formed();
        assert!(is_well_formed(&graph));
        assert!(violations(&graph).is_empty());
    }

    #[test]
    fn empty_graph_has_no_initial_state() {
        let graph = Graph::new("empty", Vec::new());
        assert_eq!(violations(&graph), vec![GraphViolation::MissingInitialState]);
    }

    #[test]
    fn accumulates_all_violations() {
        let mut a = StateBuilder::new("A", StateRole::Initial);
        a.add_incoming_transition(Transition::internal("loop", "A"));
        a.add_outgoing_transition(Transition::internal("lost", "Z"))
            .unwrap();

        let graph = Graph::new(
            "bad",
            vec![
                a.build(),
                StateBuilder::new("A", StateRole::Initial).build(),
                StateBuilder::new("A", StateRole::Normal).build(),
            ],
        );

        let found = violations(&graph);
        assert_eq!(found.len(), 4);
        assert!(found.contains(&GraphViolation::MultipleInitialStates {
            states: vec!["A".to_string(), "A".to_string()],
        }));
        assert!(found.contains(&GraphViolation::DuplicateStateName {
            state: "A".to_string(),
        }));
        assert!(found.contains(&GraphViolation::InitialStateWithIncoming {
            state: "A".to_string(),
        }));
        assert!(found.contains(&GraphViolation::DanglingTarget {
            state: "A".to_string(),
            transition: "lost".to_string(),
            target: "Z".to_string(),
        }));
    }

    #[test]
    fn detects_one_sided_wiring() {
        let mut s0 = StateBuilder::new("S0", StateRole::Initial);
        s0.add_outgoing_transition(
            Transition::new("t1", TransitionKind::Emission, "S1", vec![]).unwrap(),
        )
        .unwrap();

        let graph = Graph::new(
            "G",
            vec![s0.build(), StateBuilder::new("S1", StateRole::Final).build()],
        );

        assert_eq!(
            violations(&graph),
            vec![GraphViolation::UnmatchedIncoming {
                state: "S0".to_string(),
                transition: "t1".to_string(),
            }]
        );
        assert!(!is_well_formed(&graph));
    }
}
