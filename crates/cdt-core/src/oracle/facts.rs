//! De-duplicating store of independence facts.
//!
//! Search algorithms record `a _||_ b` once and later ask about `b _||_ a`;
//! the [`Fact`] key makes both questions the same lookup.

use std::collections::hash_set;
use std::collections::HashSet;

use cdt_common::{Fact, Node};
use serde::{Deserialize, Serialize};

/// Set of independence facts keyed by unordered node pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactSet {
    facts: HashSet<Fact>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fact. Returns false if the pair (in either order) was present.
    pub fn insert(&mut self, fact: Fact) -> bool {
        self.facts.insert(fact)
    }

    /// Record that `a` and `b` are independent.
    pub fn record(&mut self, a: Node, b: Node) -> bool {
        self.insert(Fact::new(a, b))
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// Whether `a _||_ b` has been recorded, in either order.
    pub fn is_independent(&self, a: &Node, b: &Node) -> bool {
        self.contains(&Fact::new(a.clone(), b.clone()))
    }

    pub fn remove(&mut self, fact: &Fact) -> bool {
        self.facts.remove(fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Fact> {
        self.facts.iter()
    }

    /// Facts with `node` as one endpoint.
    pub fn involving<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Fact> + 'a {
        self.facts.iter().filter(move |f| f.involves(node))
    }

    /// Facts in canonical order, for stable output.
    pub fn sorted(&self) -> Vec<&Fact> {
        let mut facts: Vec<&Fact> = self.facts.iter().collect();
        facts.sort();
        facts
    }
}

impl FromIterator<Fact> for FactSet {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Fact> for FactSet {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        self.facts.extend(iter);
    }
}

impl IntoIterator for FactSet {
    type Item = Fact;
    type IntoIter = hash_set::IntoIter<Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.into_iter()
    }
}

impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Fact;
    type IntoIter = hash_set::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}
