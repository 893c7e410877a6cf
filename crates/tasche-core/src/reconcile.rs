//! Wizard Initial Load
//!
//! Merges the task list and the current week's goals into one task lookup and
//! seeds the wizard from them.

use std::collections::HashSet;

use crate::error::ApiError;
use crate::models::{Goal, GoalsResponse, Task, TaskList};
use crate::wizard::WizardState;

/// Active tasks, plus a placeholder for every goal whose task is not among them
pub fn reconcile_tasks(tasks: Vec<Task>, goals: &[Goal]) -> Vec<Task> {
    let mut merged: Vec<Task> = tasks.into_iter().filter(|task| !task.is_archived).collect();
    let mut known: HashSet<String> = merged.iter().map(|task| task.id.clone()).collect();

    for goal in goals {
        if known.insert(goal.task_id.clone()) {
            log::debug!("[WIZARD] goal references missing task {}, adding placeholder", goal.task_id);
            merged.push(Task::placeholder(goal.task_id.clone(), goal.task_name.clone()));
        }
    }
    merged
}

/// Build the wizard from the two joined fetches.
///
/// A failed task fetch fails the whole load. A failed goals fetch degrades to
/// a wizard with tasks only.
pub fn seed_wizard(
    tasks: Result<TaskList, ApiError>,
    goals: Result<GoalsResponse, ApiError>,
) -> Result<WizardState, ApiError> {
    let tasks = tasks?.tasks;

    match goals {
        Ok(goals) => {
            let merged = reconcile_tasks(tasks, &goals.goals);
            Ok(WizardState::with_goals(merged, goals.unit_duration_minutes, &goals.goals))
        }
        Err(e) => {
            log::warn!("[WIZARD] current goals unavailable, starting from tasks only: {}", e);
            Ok(WizardState::new(reconcile_tasks(tasks, &[])))
        }
    }
}
