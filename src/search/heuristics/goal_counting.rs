use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    State, Task,
};

/// Counts the goal facts that do not hold in the evaluated state.
#[derive(Debug)]
pub struct GoalCounting {}

impl GoalCounting {
    pub fn new() -> Self {
        GoalCounting {}
    }
}

impl Default for GoalCounting {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for GoalCounting {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        let mut unsatisfied_goal_count = 0;
        for goal in task.goals() {
            if !state.contains(goal) {
                unsatisfied_goal_count += 1;
            }
        }
        f64::from(unsatisfied_goal_count).into()
    }

    fn name(&self) -> &'static str {
        "goal_counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn counts_unsatisfied_goals() {
        let task = Task::new(
            "two-goals",
            vec![
                op("light", &[], &["lit"], &[]),
                op("heat", &[], &["warm"], &[]),
            ],
            state(&[]),
            [fact("lit"), fact("warm")],
        )
        .unwrap();

        let mut heuristic = GoalCounting::new();
        assert_eq!(heuristic.evaluate(task.initial_state(), &task), 2.0);
        assert_eq!(heuristic.evaluate(&state(&["lit"]), &task), 1.0);
        assert_eq!(heuristic.evaluate(&state(&["lit", "warm"]), &task), 0.0);
    }
}
