//! Typed transition parameters.
//!
//! Protocol descriptions encode each parameter as a single `"name:type"`
//! token. The token is stored verbatim; malformed tokens are accepted at
//! construction and simply yield no type.

use serde::{Deserialize, Serialize};
use std::fmt;

const SEPARATOR: char = ':';

/// A typed field attached to a transition's payload.
///
/// # Example
///
/// ```rust
/// use protocol_lts::core::Parameter;
///
/// let param = Parameter::new("seq:int");
/// assert_eq!(param.name(), "seq");
/// assert_eq!(param.type_name(), Some("int"));
///
/// let malformed = Parameter::new("seq");
/// assert_eq!(malformed.type_name(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameter(String);

impl Parameter {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw `"name:type"` token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text before the first separator, or the whole token if there is none.
    pub fn name(&self) -> &str {
        self.0.split(SEPARATOR).next().unwrap_or_default()
    }

    /// Text between the first separator and the next one (or the end).
    pub fn type_name(&self) -> Option<&str> {
        self.0.split(SEPARATOR).nth(1)
    }

    /// Permissive match: `query` occurring anywhere in the token counts.
    pub fn matches(&self, query: &str) -> bool {
        self.0.contains(query)
    }
}

impl From<&str> for Parameter {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Parameter {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
