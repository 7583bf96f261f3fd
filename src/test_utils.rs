//! Shared fixtures for the crate's tests: tiny hand-built tasks and
//! deterministic heuristics whose values are fixed by construction.

use crate::search::{Fact, Heuristic, HeuristicValue, Operator, State, Task};
use ordered_float::Float;
use std::{cell::Cell, collections::HashMap, rc::Rc};

pub fn fact(name: &str) -> Fact {
    Fact::new(name)
}

pub fn state(names: &[&str]) -> State {
    State::new(names.iter().map(|name| Fact::new(name)))
}

pub fn op(name: &str, pre: &[&str], add: &[&str], del: &[&str]) -> Operator {
    Operator::new(
        name,
        pre.iter().map(|f| Fact::new(f)),
        add.iter().map(|f| Fact::new(f)),
        del.iter().map(|f| Fact::new(f)),
    )
}

/// A corridor of rooms `0..=length`: operator `move-i-j` walks from room `i`
/// to room `j = i + 1`, the goal is the last room. The state space is a
/// simple chain, which makes expected plans and heuristic values easy to
/// state exactly.
pub fn corridor_task(length: usize) -> Task {
    let operators = (0..length)
        .map(|i| {
            op(
                &format!("move-{}-{}", i, i + 1),
                &[&format!("at room-{}", i)],
                &[&format!("at room-{}", i + 1)],
                &[&format!("at room-{}", i)],
            )
        })
        .collect();
    Task::new(
        &format!("corridor-{}", length),
        operators,
        state(&["at room-0"]),
        [fact(&format!("at room-{}", length))],
    )
    .expect("corridor operators have unique names")
}

/// The true goal distance for [`corridor_task`] states.
pub fn corridor_heuristic(length: usize) -> TableHeuristic {
    let mut table = TableHeuristic::new(f64::INFINITY);
    for i in 0..=length {
        table.set(
            state(&[&format!("at room-{}", i)]),
            (length - i) as f64,
        );
    }
    table
}

/// A task whose only trajectory is `s0 -> s1` followed by a self-loop at
/// `s1`; the goal is unreachable. Every EHC variant must fail on it, and the
/// restarting variants must fail by marking the root a dead end.
pub fn dead_end_task() -> Task {
    Task::new(
        "dead-end",
        vec![
            op("step", &["s0"], &["s1"], &["s0"]),
            op("spin", &["s1"], &["s1"], &[]),
        ],
        state(&["s0"]),
        [fact("g")],
    )
    .expect("dead-end operators have unique names")
}

/// A heuristic backed by an explicit state-to-value table. States absent
/// from the table evaluate to the configured default, so tests control every
/// value the search observes.
#[derive(Debug)]
pub struct TableHeuristic {
    values: HashMap<State, HeuristicValue>,
    default: HeuristicValue,
}

impl TableHeuristic {
    pub fn new(default: f64) -> Self {
        Self {
            values: HashMap::new(),
            default: default.into(),
        }
    }

    pub fn set(&mut self, state: State, value: f64) {
        self.values.insert(state, value.into());
    }

    pub fn with(mut self, state: State, value: f64) -> Self {
        self.set(state, value);
        self
    }
}

impl Heuristic for TableHeuristic {
    fn evaluate(&mut self, state: &State, _task: &Task) -> HeuristicValue {
        self.values.get(state).copied().unwrap_or(self.default)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

/// Wraps another heuristic and counts genuine evaluations; the counter stays
/// readable after the search has consumed the heuristic.
#[derive(Debug)]
pub struct CountingHeuristic<H> {
    inner: H,
    calls: Rc<Cell<u64>>,
}

impl<H: Heuristic> CountingHeuristic<H> {
    pub fn new(inner: H) -> (Self, Rc<Cell<u64>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl<H: Heuristic> Heuristic for CountingHeuristic<H> {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        self.calls.set(self.calls.get() + 1);
        self.inner.evaluate(state, task)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/// A heuristic that is infinite everywhere, for the dead-at-the-root
/// boundary case.
#[derive(Debug)]
pub struct Hopeless;

impl Heuristic for Hopeless {
    fn evaluate(&mut self, _state: &State, _task: &Task) -> HeuristicValue {
        HeuristicValue::infinity()
    }

    fn name(&self) -> &'static str {
        "hopeless"
    }
}
