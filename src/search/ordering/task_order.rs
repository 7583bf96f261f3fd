use crate::search::{ordering::OrderingPolicy, HeuristicValue, State, Task};

/// The ablation policy: successors in task-declared operator order, no
/// learning.
#[derive(Debug)]
pub struct TaskOrder;

impl OrderingPolicy for TaskOrder {
    fn successors(&self, task: &Task, state: &State) -> Vec<(usize, State)> {
        task.successors(state)
    }

    fn record_outcome(
        &mut self,
        _parent_h: HeuristicValue,
        _op_index: usize,
        _successor_h: HeuristicValue,
    ) {
        // Nothing to learn.
    }

    fn name(&self) -> &'static str {
        "None"
    }
}
