//! Symmetric independence facts over pairs of graph endpoints.
//!
//! A [`Fact`] records that two endpoints are independent (or associated)
//! without regard to argument order: `Fact::new(a, b)` and `Fact::new(b, a)`
//! are the same key in any `HashSet`, `HashMap` or `BTreeSet`.
//!
//! Equality, ordering and hashing all go through [`Fact::canonical`], which
//! orders the two endpoints by the endpoint type's total order. The
//! construction order is kept only for display.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::node::Node;

/// Separator used when rendering a fact, e.g. `X _||_ Y`.
pub const INDEPENDENCE_SYMBOL: &str = "_||_";

/// Unordered pair of endpoints `{first, second}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact<N = Node> {
    first: N,
    second: N,
}

impl<N> Fact<N> {
    pub fn new(first: N, second: N) -> Self {
        Fact { first, second }
    }

    /// First endpoint in construction order.
    pub fn first(&self) -> &N {
        &self.first
    }

    /// Second endpoint in construction order.
    pub fn second(&self) -> &N {
        &self.second
    }

    pub fn into_endpoints(self) -> (N, N) {
        (self.first, self.second)
    }
}

impl<N: PartialEq> Fact<N> {
    /// Whether `node` is one of the two endpoints.
    pub fn involves(&self, node: &N) -> bool {
        self.first == *node || self.second == *node
    }

    /// The endpoint paired with `node`, if `node` is part of this fact.
    pub fn other(&self, node: &N) -> Option<&N> {
        if self.first == *node {
            Some(&self.second)
        } else if self.second == *node {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl<N: Ord> Fact<N> {
    /// Endpoints in ascending order. Two facts are equal iff their canonical
    /// forms are equal.
    pub fn canonical(&self) -> (&N, &N) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl Fact<Node> {
    /// Build a fact from two endpoint names.
    pub fn from_names(first: &str, second: &str) -> Result<Self> {
        Ok(Fact::new(Node::new(first)?, Node::new(second)?))
    }
}

impl<N: Ord> PartialEq for Fact<N> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl<N: Ord> Eq for Fact<N> {}

impl<N: Ord + Hash> Hash for Fact<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl<N: Ord> PartialOrd for Fact<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> Ord for Fact<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl<N: fmt::Display> fmt::Display for Fact<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, INDEPENDENCE_SYMBOL, self.second)
    }
}

impl FromStr for Fact<Node> {
    type Err = Error;

    /// Parse the rendered form `first _||_ second`.
    fn from_str(s: &str) -> Result<Self> {
        let (first, second) = s
            .split_once(INDEPENDENCE_SYMBOL)
            .ok_or_else(|| Error::MalformedFact(format!("missing '{INDEPENDENCE_SYMBOL}' in {s:?}")))?;
        if second.contains(INDEPENDENCE_SYMBOL) {
            return Err(Error::MalformedFact(format!(
                "more than two endpoints in {s:?}"
            )));
        }
        Fact::from_names(first.trim(), second.trim())
    }
}
