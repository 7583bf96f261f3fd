use crate::search::Fact;
use itertools::Itertools;
use std::{
    collections::BTreeSet,
    fmt::{Debug, Formatter},
    sync::Arc,
};

/// A [`State`] is the set of facts that hold in some world configuration.
/// States are immutable once created and cheap to clone, so the same state
/// value can live in a frontier, a visited set, and the dead-end cache at the
/// same time. Equality and hashing go through the ordered fact set and are
/// therefore independent of the order facts were inserted in.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct State {
    facts: Arc<BTreeSet<Fact>>,
}

impl State {
    pub fn new(facts: impl IntoIterator<Item = Fact>) -> Self {
        Self {
            facts: Arc::new(facts.into_iter().collect()),
        }
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// True iff every fact in `facts` holds in this state.
    pub fn satisfies(&self, facts: &BTreeSet<Fact>) -> bool {
        facts.is_subset(&self.facts)
    }

    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub(crate) fn fact_set(&self) -> &BTreeSet<Fact> {
        &self.facts
    }
}

impl FromIterator<Fact> for State {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{{}}}", self.facts.iter().join(", "))
    }
}
