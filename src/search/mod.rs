pub mod benchmarking;
mod fact;
pub mod heuristics;
mod operator;
pub mod ordering;
mod plan;
mod priority_queue;
pub mod search_engines;
mod search_space;
mod state;
mod task;
mod validate;
mod verbosity;

pub use fact::Fact;
pub use heuristics::{Heuristic, HeuristicValue};
pub use operator::Operator;
pub use plan::Plan;
pub use priority_queue::PriorityQueue;
pub use search_space::{NodeId, SearchNode, SearchSpace, NO_NODE, NO_OPERATOR};
pub use state::State;
pub use task::{Task, TaskError};
pub use validate::validate;
pub use verbosity::Verbosity;
