use crate::search::{Fact, State};
use std::{
    collections::BTreeSet,
    fmt::{Debug, Formatter},
    hash::{Hash, Hasher},
};

/// A grounded STRIPS operator: a name, the facts that must hold for it to be
/// applicable, and the facts it adds and deletes. Operators are immutable and
/// compare equal iff their names match, so names must be unique within a task
/// (see [`Task::new`](crate::search::Task::new)).
#[derive(Clone)]
pub struct Operator {
    name: String,
    preconditions: BTreeSet<Fact>,
    add_effects: BTreeSet<Fact>,
    del_effects: BTreeSet<Fact>,
}

impl Operator {
    pub fn new(
        name: &str,
        preconditions: impl IntoIterator<Item = Fact>,
        add_effects: impl IntoIterator<Item = Fact>,
        del_effects: impl IntoIterator<Item = Fact>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            preconditions: preconditions.into_iter().collect(),
            add_effects: add_effects.into_iter().collect(),
            del_effects: del_effects.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn applicable(&self, state: &State) -> bool {
        state.satisfies(&self.preconditions)
    }

    /// Apply the operator to `state`, producing the successor state. The
    /// operator must be applicable in `state`.
    pub fn apply(&self, state: &State) -> State {
        debug_assert!(
            self.applicable(state),
            "Operator {} is not applicable",
            self.name
        );
        let mut facts = state.fact_set().clone();
        for fact in &self.del_effects {
            facts.remove(fact);
        }
        for fact in &self.add_effects {
            facts.insert(*fact);
        }
        State::new(facts)
    }

    pub fn preconditions(&self) -> &BTreeSet<Fact> {
        &self.preconditions
    }

    pub fn add_effects(&self) -> &BTreeSet<Fact> {
        &self.add_effects
    }

    pub fn del_effects(&self) -> &BTreeSet<Fact> {
        &self.del_effects
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Operator {}

impl Hash for Operator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Debug for Operator {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name)
            .field("pre", &self.preconditions)
            .field("add", &self.add_effects)
            .field("del", &self.del_effects)
            .finish()
    }
}
