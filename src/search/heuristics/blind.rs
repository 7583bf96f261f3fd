use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    State, Task,
};

/// The blind heuristic: 0 on goal states, 1 everywhere else.
#[derive(Debug)]
pub struct Blind {}

impl Blind {
    pub fn new() -> Self {
        Blind {}
    }
}

impl Default for Blind {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for Blind {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        if task.goal_reached(state) {
            0.0.into()
        } else {
            1.0.into()
        }
    }

    fn name(&self) -> &'static str {
        "blind"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn blind_distinguishes_goals_only() {
        let task = corridor_task(2);
        let mut heuristic = Blind::new();
        assert_eq!(heuristic.evaluate(task.initial_state(), &task), 1.0);
        assert_eq!(heuristic.evaluate(&state(&["at room-1"]), &task), 1.0);
        assert_eq!(heuristic.evaluate(&state(&["at room-2"]), &task), 0.0);
    }
}
