mod blind;
mod goal_counting;
mod heuristic;

pub use blind::Blind;
pub use goal_counting::GoalCounting;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
