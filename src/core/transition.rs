//! Labeled edges of the transition system.

use super::kind::TransitionKind;
use super::parameter::Parameter;
use crate::builder::ConstructionError;
use serde::Serialize;

/// A labeled edge, immutable once constructed.
///
/// The target is a state *name*, resolved on demand through
/// [`Graph::get_state`](crate::core::Graph::get_state). The same logical edge
/// is stored by value in its origin's outgoing list and its target's
/// incoming list; the two copies compare equal.
///
/// # Example
///
/// ```rust
/// use protocol_lts::core::{Transition, TransitionKind};
///
/// let connect = Transition::new(
///     "connect",
///     TransitionKind::Emission,
///     "Connected",
///     vec!["host:str".into(), "port:int".into()],
/// )
/// .unwrap();
///
/// assert_eq!(connect.get_param_type("port"), Some("int"));
/// assert_eq!(connect.get_data_types(), vec!["str", "int"]);
///
/// // Internal transitions never carry parameters.
/// assert!(Transition::new("tick", TransitionKind::Internal, "Idle", vec!["x:int".into()]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transition {
    name: String,
    kind: TransitionKind,
    target_state_name: String,
    params: Vec<Parameter>,
}

impl Transition {
    /// Create a transition.
    ///
    /// Fails if `kind` is [`TransitionKind::Internal`] and `params` is not
    /// empty. Parameter tokens are not otherwise validated.
    pub fn new(
        name: impl Into<String>,
        kind: TransitionKind,
        target_state_name: impl Into<String>,
        params: Vec<Parameter>,
    ) -> Result<Self, ConstructionError> {
        let name = name.into();
        if kind == TransitionKind::Internal && !params.is_empty() {
            return Err(ConstructionError::InternalTransitionWithParams { transition: name });
        }

        Ok(Self {
            name,
            kind,
            target_state_name: target_state_name.into(),
            params,
        })
    }

    /// Create a parameterless internal transition. Cannot fail.
    pub fn internal(name: impl Into<String>, target_state_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TransitionKind::Internal,
            target_state_name: target_state_name.into(),
            params: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Name of the state this transition leads to.
    pub fn target_state_name(&self) -> &str {
        &self.target_state_name
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn is_internal(&self) -> bool {
        self.kind == TransitionKind::Internal
    }

    pub fn is_emission(&self) -> bool {
        self.kind == TransitionKind::Emission
    }

    pub fn is_reception(&self) -> bool {
        self.kind == TransitionKind::Reception
    }

    /// Type of the first parameter whose token contains `param_name`.
    ///
    /// Matching is substring containment, so `"id"` matches `"session_id:int"`.
    /// Malformed tokens (no `:`) never produce a type.
    pub fn get_param_type(&self, param_name: &str) -> Option<&str> {
        tracing::debug!(transition = %self.name, param = param_name, "looking up parameter type");

        if self.params.is_empty() {
            tracing::warn!(transition = %self.name, "parameters list is empty");
            return None;
        }

        self.params
            .iter()
            .filter(|param| param.matches(param_name))
            .find_map(Parameter::type_name)
    }

    /// Distinct parameter types in first-seen order.
    pub fn get_data_types(&self) -> Vec<&str> {
        if self.params.is_empty() {
            tracing::warn!(transition = %self.name, "parameters list is empty");
            return Vec::new();
        }

        let mut types: Vec<&str> = Vec::with_capacity(self.params.len());
        for data_type in self.params.iter().filter_map(Parameter::type_name) {
            if !types.contains(&data_type) {
                types.push(data_type);
            }
        }
        types
    }
}
