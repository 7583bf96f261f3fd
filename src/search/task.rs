use crate::search::{Fact, Operator, State};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("duplicate operator name: {0}")]
    DuplicateOperator(String),
}

/// A grounded planning task: a name, the operator vector, the initial state,
/// and the goal fact set. Operators are addressed by their index into the
/// vector everywhere in the search layer; the index order is also the order
/// in which [`Task::successors`] enumerates applicable operators, which keeps
/// successor generation deterministic.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    operators: Vec<Operator>,
    initial_state: State,
    goals: BTreeSet<Fact>,
}

impl Task {
    pub fn new(
        name: &str,
        operators: Vec<Operator>,
        initial_state: State,
        goals: impl IntoIterator<Item = Fact>,
    ) -> Result<Self, TaskError> {
        let mut seen = HashSet::new();
        for operator in &operators {
            if !seen.insert(operator.name()) {
                return Err(TaskError::DuplicateOperator(operator.name().to_owned()));
            }
        }

        let goals: BTreeSet<Fact> = goals.into_iter().collect();
        for goal in &goals {
            let achievable = initial_state.contains(goal)
                || operators.iter().any(|op| op.add_effects().contains(goal));
            if !achievable {
                warn!(goal = %goal, "no operator achieves this goal fact");
            }
        }

        Ok(Self {
            name: name.to_owned(),
            operators,
            initial_state,
            goals,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn goals(&self) -> &BTreeSet<Fact> {
        &self.goals
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn operator(&self, index: usize) -> &Operator {
        &self.operators[index]
    }

    pub fn operator_by_name(&self, name: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.name() == name)
    }

    pub fn goal_reached(&self, state: &State) -> bool {
        state.satisfies(&self.goals)
    }

    /// Every `(operator index, successor state)` pair where the operator is
    /// applicable in `state`, in operator-declaration order.
    pub fn successors(&self, state: &State) -> Vec<(usize, State)> {
        self.operators
            .iter()
            .enumerate()
            .filter(|(_, op)| op.applicable(state))
            .map(|(index, op)| (index, op.apply(state)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn duplicate_operator_names_are_rejected() {
        let result = Task::new(
            "broken",
            vec![
                op("step", &["a"], &["b"], &["a"]),
                op("step", &["b"], &["c"], &["b"]),
            ],
            state(&["a"]),
            [fact("c")],
        );
        assert_eq!(
            result.unwrap_err(),
            TaskError::DuplicateOperator("step".to_owned())
        );
    }

    #[test]
    fn successors_follow_declaration_order() {
        let task = Task::new(
            "branching",
            vec![
                op("go-left", &["at start"], &["at left"], &["at start"]),
                op("go-right", &["at start"], &["at right"], &["at start"]),
                op("back", &["at left"], &["at start"], &["at left"]),
            ],
            state(&["at start"]),
            [fact("at right")],
        )
        .unwrap();

        let successors = task.successors(task.initial_state());
        let indices: Vec<usize> = successors.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(successors[0].1, state(&["at left"]));
        assert_eq!(successors[1].1, state(&["at right"]));
    }

    #[test]
    fn goal_reached_on_superset_states() {
        let task = corridor_task(2);
        assert!(!task.goal_reached(task.initial_state()));
        assert!(task.goal_reached(&state(&["at room-2", "lights-on"])));
    }
}
