use crate::search::heuristics::{Blind, GoalCounting};
use crate::search::{State, Task};
use ordered_float::OrderedFloat;

/// Heuristic estimates are totally ordered floats so they can key frontiers
/// directly. Positive infinity means "no plan extractable from here under
/// this heuristic"; the lookaheads prune such successors instead of
/// enqueueing them.
pub type HeuristicValue = OrderedFloat<f64>;

/// A state evaluator. Within one planning run an implementation must be
/// deterministic and pure per state; the driver is free to cache values under
/// that assumption. The heavy planning heuristics live outside this crate and
/// plug in through this trait.
pub trait Heuristic {
    /// Evaluate the given state with respect to the given task.
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue;

    /// Name of the heuristic, for the benchmark record.
    fn name(&self) -> &'static str;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "0 on goal states, 1 everywhere else")]
    Blind,
    #[clap(help = "Number of unsatisfied goal facts")]
    GoalCounting,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Blind => Box::new(Blind::new()),
            HeuristicName::GoalCounting => Box::new(GoalCounting::new()),
        }
    }
}
