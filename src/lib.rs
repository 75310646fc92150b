//! Protocol LTS: labeled transition systems for protocol behavior
//!
//! A protocol's behavior is modeled as a directed graph of states connected
//! by typed transitions. Analysis code (for example, checking whether two
//! protocols can interoperate) walks these graphs through a read-only API.
//!
//! # Core Concepts
//!
//! - **Transition**: a named edge that is internal, an emission, or a
//!   reception, with optional `"name:type"` parameters
//! - **State**: a node with a role (initial, final, normal) and its incoming
//!   and outgoing transitions
//! - **Graph**: a named collection of states with lookup by name
//!
//! Loaders assemble the model through [`builder`] types, which enforce the
//! role rules, and then freeze it into the immutable [`core`] types.
//!
//! # Example
//!
//! ```rust
//! use protocol_lts::builder::{connect, GraphBuilder, StateBuilder};
//! use protocol_lts::core::{StateRole, TransitionKind};
//!
//! let mut s0 = StateBuilder::new("S0", StateRole::Initial);
//! let mut s1 = StateBuilder::new("S1", StateRole::Normal);
//! let mut s2 = StateBuilder::new("S2", StateRole::Final);
//!
//! let t1 = connect(&mut s0, &mut s1, "t1", TransitionKind::Reception, vec!["x:int".into()]).unwrap();
//! connect(&mut s1, &mut s2, "t2", TransitionKind::Emission, vec![]).unwrap();
//!
//! let mut graph = GraphBuilder::new("G");
//! graph.add_state(s0.build()).add_state(s1.build()).add_state(s2.build());
//! let graph = graph.build();
//!
//! let s1 = graph.get_state("S1").unwrap();
//! assert!(s1.get_outgoing_receptions().is_empty());
//! assert_eq!(s1.get_outgoing_emissions().len(), 1);
//! assert_eq!(t1.get_param_type("x"), Some("int"));
//! ```

pub mod builder;
pub mod core;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use builder::{ConstructionError, GraphBuilder, StateBuilder};
pub use core::{Graph, Parameter, State, StateRole, Transition, TransitionKind};
pub use validation::{validate_graph, GraphViolation};
