use crate::search::{HeuristicValue, State, Task};

/// Strategy for the order in which a lookahead enumerates the successors of
/// a state. Learned policies observe lookahead outcomes through
/// [`OrderingPolicy::record_outcome`] and fold them into later enumeration
/// orders; the enumeration itself must stay deterministic per state.
pub trait OrderingPolicy {
    /// The applicable `(operator index, successor state)` pairs of `state`,
    /// in the order the lookahead should try them.
    fn successors(&self, task: &Task, state: &State) -> Vec<(usize, State)>;

    /// Report the outcome of expanding one successor: the heuristic value of
    /// the expanded node, the operator applied, and the heuristic value of
    /// the successor it produced.
    fn record_outcome(
        &mut self,
        parent_h: HeuristicValue,
        op_index: usize,
        successor_h: HeuristicValue,
    );

    /// Name of the policy, for the benchmark record.
    fn name(&self) -> &'static str;
}
