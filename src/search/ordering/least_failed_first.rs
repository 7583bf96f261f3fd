use crate::search::{ordering::OrderingPolicy, HeuristicValue, State, Task};

/// Least-Failed-First operator ordering.
///
/// Every operator carries a failure weight, starting at 0. Whenever applying
/// an operator failed to improve the heuristic, its weight drops; the more
/// negative the weight, the more the operator has contributed to plateaus in
/// past lookaheads. Successors are then enumerated best-weight-first, so
/// operators that have not failed yet get expanded before the known
/// plateau-makers.
///
/// The update rule, for an expansion of operator `o` from a node with
/// heuristic `h_p` to a successor with heuristic `h_s`:
///
/// - `h_p > h_s` (strict improvement): the weight is unchanged.
/// - otherwise: `weight[o] -= h_s - h_p + 1`, so a plateau (`h_s == h_p`)
///   costs exactly one unit and worse successors cost more.
#[derive(Debug)]
pub struct LeastFailedFirst {
    // Indexed by operator index; operators the task did not declare default
    // to a weight of 0.
    weights: Vec<HeuristicValue>,
}

impl LeastFailedFirst {
    pub fn new(task: &Task) -> Self {
        Self {
            weights: vec![HeuristicValue::from(0.0); task.operators().len()],
        }
    }

    pub fn weight(&self, op_index: usize) -> HeuristicValue {
        self.weights
            .get(op_index)
            .copied()
            .unwrap_or_else(|| HeuristicValue::from(0.0))
    }
}

impl OrderingPolicy for LeastFailedFirst {
    fn successors(&self, task: &Task, state: &State) -> Vec<(usize, State)> {
        let mut successors = task.successors(state);
        successors.sort_by(|(a, _), (b, _)| {
            self.weight(*b)
                .cmp(&self.weight(*a))
                .then_with(|| task.operator(*a).name().cmp(task.operator(*b).name()))
        });
        successors
    }

    fn record_outcome(
        &mut self,
        parent_h: HeuristicValue,
        op_index: usize,
        successor_h: HeuristicValue,
    ) {
        if parent_h > successor_h {
            return;
        }
        if op_index >= self.weights.len() {
            self.weights
                .resize(op_index + 1, HeuristicValue::from(0.0));
        }
        let penalty = successor_h - parent_h + 1.0;
        self.weights[op_index] = self.weights[op_index] - penalty;
    }

    fn name(&self) -> &'static str {
        "LFF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn h(value: f64) -> HeuristicValue {
        HeuristicValue::from(value)
    }

    #[test]
    fn improvement_leaves_the_weight_unchanged() {
        let task = corridor_task(2);
        let mut lff = LeastFailedFirst::new(&task);
        lff.record_outcome(h(3.0), 0, h(2.0));
        assert_eq!(lff.weight(0), h(0.0));
    }

    #[test]
    fn plateau_costs_one_unit() {
        let task = corridor_task(2);
        let mut lff = LeastFailedFirst::new(&task);
        lff.record_outcome(h(2.0), 0, h(2.0));
        assert_eq!(lff.weight(0), h(-1.0));
    }

    #[test]
    fn worse_successors_cost_more_than_plateaus() {
        let task = corridor_task(2);
        let mut lff = LeastFailedFirst::new(&task);
        lff.record_outcome(h(2.0), 0, h(5.0));
        assert_eq!(lff.weight(0), h(-4.0));
        // Penalties accumulate.
        lff.record_outcome(h(2.0), 0, h(2.0));
        assert_eq!(lff.weight(0), h(-5.0));
    }

    #[test]
    fn unknown_operators_default_to_zero() {
        let task = corridor_task(2);
        let mut lff = LeastFailedFirst::new(&task);
        assert_eq!(lff.weight(17), h(0.0));
        lff.record_outcome(h(1.0), 17, h(1.0));
        assert_eq!(lff.weight(17), h(-1.0));
    }

    #[test]
    fn failed_operators_sort_after_untried_ones() {
        // Both operators are applicable at the start; "alpha" only treads
        // water while "omega" makes progress.
        let task = Task::new(
            "fork",
            vec![
                op("alpha", &["at start"], &["waited"], &[]),
                op("omega", &["at start"], &["at end"], &["at start"]),
            ],
            state(&["at start"]),
            [fact("at end")],
        )
        .unwrap();

        let mut lff = LeastFailedFirst::new(&task);

        // With all weights at zero the tie-break is the operator name.
        let order: Vec<usize> = lff
            .successors(&task, task.initial_state())
            .iter()
            .map(|(index, _)| *index)
            .collect();
        assert_eq!(order, vec![0, 1]);

        // "alpha" produced a plateau successor; "omega" improved.
        lff.record_outcome(h(1.0), 0, h(1.0));
        lff.record_outcome(h(1.0), 1, h(0.0));
        assert_eq!(lff.weight(0), h(-1.0));
        assert_eq!(lff.weight(1), h(0.0));

        let order: Vec<usize> = lff
            .successors(&task, task.initial_state())
            .iter()
            .map(|(index, _)| *index)
            .collect();
        assert_eq!(order, vec![1, 0]);
    }
}
