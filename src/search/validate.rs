use crate::search::{Plan, Task};

/// Check that `plan` is executable from the task's initial state and ends in
/// a goal state.
pub fn validate(task: &Task, plan: &Plan) -> Result<(), String> {
    let mut current = task.initial_state().clone();
    for step in plan.steps() {
        let operator = task
            .operator_by_name(step)
            .ok_or_else(|| format!("Operator {} is not part of the task", step))?;

        if !operator.applicable(&current) {
            return Err(format!(
                "Operator {} is not applicable in state {:?}",
                step, current
            ));
        }

        current = operator.apply(&current);
    }

    if !task.goal_reached(&current) {
        return Err(format!(
            "Plan does not reach a goal state, final state is: {:?}",
            current
        ));
    }

    Ok(())
}
