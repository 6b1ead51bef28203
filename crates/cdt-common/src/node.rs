//! Graph endpoint identity.
//!
//! A node is identified purely by its name. Two nodes with the same name are
//! the same endpoint, regardless of where they were constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::fact::INDEPENDENCE_SYMBOL;

/// Named endpoint of a graph, ordered and hashed by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Node(String);

impl Node {
    /// Create a node.
    ///
    /// Names must be non-empty, carry no leading or trailing whitespace, and
    /// must not contain the fact separator, so that a rendered [`Fact`] always
    /// parses back to the same endpoints.
    ///
    /// [`Fact`]: crate::Fact
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "node name must not be empty".to_string(),
            ));
        }
        if name.trim() != name {
            return Err(Error::InvalidArgument(format!(
                "node name {name:?} has surrounding whitespace"
            )));
        }
        if name.contains(INDEPENDENCE_SYMBOL) {
            return Err(Error::InvalidArgument(format!(
                "node name {name:?} contains '{INDEPENDENCE_SYMBOL}'"
            )));
        }
        Ok(Node(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Node {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Node::new(name)
    }
}

impl TryFrom<&str> for Node {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Node::new(name)
    }
}

impl From<Node> for String {
    fn from(node: Node) -> Self {
        node.0
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
