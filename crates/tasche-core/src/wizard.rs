//! Goal Wizard State Machine
//!
//! Four strictly linear steps: unit duration, task selection, weekly targets,
//! confirmation. Going forward requires the current step to be valid; going
//! back is always allowed.

use std::collections::HashMap;
use std::fmt;

use crate::day::DayOfWeek;
use crate::error::WizardError;
use crate::models::{Goal, GoalUpdateItem, GoalsUpdate, Task, TaskId};
use crate::targets::DailyTargets;
use crate::unit::UnitDuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    UnitDuration,
    TaskSelection,
    WeeklyTargets,
    Confirmation,
}

/// How a step is drawn in the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::UnitDuration,
        WizardStep::TaskSelection,
        WizardStep::WeeklyTargets,
        WizardStep::Confirmation,
    ];

    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::UnitDuration => "1. ユニット時間選択",
            WizardStep::TaskSelection => "2. タスク選択",
            WizardStep::WeeklyTargets => "3. 曜日別目標設定",
            WizardStep::Confirmation => "4. 確認",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::UnitDuration => Some(WizardStep::TaskSelection),
            WizardStep::TaskSelection => Some(WizardStep::WeeklyTargets),
            WizardStep::WeeklyTargets => Some(WizardStep::Confirmation),
            WizardStep::Confirmation => None,
        }
    }

    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::UnitDuration => None,
            WizardStep::TaskSelection => Some(WizardStep::UnitDuration),
            WizardStep::WeeklyTargets => Some(WizardStep::TaskSelection),
            WizardStep::Confirmation => Some(WizardStep::WeeklyTargets),
        }
    }

    pub fn status(&self, current: WizardStep) -> StepStatus {
        if *self == current {
            StepStatus::Active
        } else if *self < current {
            StepStatus::Completed
        } else {
            StepStatus::Upcoming
        }
    }
}

/// Client-side placeholder id for a task that has not been saved yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TempId(u32);

impl fmt::Display for TempId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "new_{}", self.0)
    }
}

/// Selection and target key: a persisted task or a pending one
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskRef {
    Existing(TaskId),
    Pending(TempId),
}

impl TaskRef {
    /// Stable string key for keyed list rendering
    pub fn key(&self) -> String {
        match self {
            TaskRef::Existing(id) => id.clone(),
            TaskRef::Pending(temp_id) => temp_id.to_string(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TaskRef::Pending(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub temp_id: TempId,
    pub name: String,
}

/// A selectable task as the step components see it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalTask {
    pub task_ref: TaskRef,
    pub name: String,
}

impl GoalTask {
    pub fn is_new(&self) -> bool {
        self.task_ref.is_pending()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    unit_duration: Option<UnitDuration>,
    /// Active tasks plus placeholders for orphaned goals
    tasks: Vec<Task>,
    new_tasks: Vec<NewTask>,
    selected: Vec<TaskRef>,
    /// Kept after deselection so re-selecting restores earlier edits
    targets: HashMap<TaskRef, DailyTargets>,
    next_temp_id: u32,
    is_saving: bool,
    error_message: Option<String>,
}

impl WizardState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }

    /// Start from the current week's saved configuration
    pub fn with_goals(tasks: Vec<Task>, unit_duration: Option<UnitDuration>, goals: &[Goal]) -> Self {
        let mut state = Self::new(tasks);
        state.unit_duration = unit_duration;
        for goal in goals {
            let task_ref = TaskRef::Existing(goal.task_id.clone());
            if !state.selected.contains(&task_ref) {
                state.selected.push(task_ref.clone());
            }
            state.targets.insert(task_ref, goal.daily_targets);
        }
        state
    }

    // ========================
    // Accessors
    // ========================

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn unit_duration(&self) -> Option<UnitDuration> {
        self.unit_duration
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn new_tasks(&self) -> &[NewTask] {
        &self.new_tasks
    }

    /// Existing tasks first, then pending ones in creation order
    pub fn all_tasks(&self) -> Vec<GoalTask> {
        let existing = self.tasks.iter().map(|task| GoalTask {
            task_ref: TaskRef::Existing(task.id.clone()),
            name: task.name.clone(),
        });
        let pending = self.new_tasks.iter().map(|task| GoalTask {
            task_ref: TaskRef::Pending(task.temp_id),
            name: task.name.clone(),
        });
        existing.chain(pending).collect()
    }

    pub fn lookup(&self, task_ref: &TaskRef) -> Option<GoalTask> {
        let name = match task_ref {
            TaskRef::Existing(id) => self.tasks.iter().find(|t| &t.id == id).map(|t| t.name.clone()),
            TaskRef::Pending(temp_id) => self
                .new_tasks
                .iter()
                .find(|t| &t.temp_id == temp_id)
                .map(|t| t.name.clone()),
        }?;
        Some(GoalTask {
            task_ref: task_ref.clone(),
            name,
        })
    }

    pub fn selected(&self) -> &[TaskRef] {
        &self.selected
    }

    pub fn is_selected(&self, task_ref: &TaskRef) -> bool {
        self.selected.contains(task_ref)
    }

    /// Selected tasks in selection order
    pub fn selected_tasks(&self) -> Vec<GoalTask> {
        self.selected.iter().filter_map(|task_ref| self.lookup(task_ref)).collect()
    }

    pub fn targets_for(&self, task_ref: &TaskRef) -> DailyTargets {
        self.targets.get(task_ref).copied().unwrap_or_default()
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    // ========================
    // Transitions
    // ========================

    /// Validity predicate of the current step
    pub fn can_advance(&self) -> Result<(), WizardError> {
        match self.step {
            WizardStep::UnitDuration if self.unit_duration.is_none() => Err(WizardError::MissingUnitDuration),
            WizardStep::TaskSelection if self.selected.is_empty() => Err(WizardError::EmptySelection),
            WizardStep::Confirmation => Err(WizardError::LastStep(self.step)),
            _ => Ok(()),
        }
    }

    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.can_advance()?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    // ========================
    // Step 1: unit duration
    // ========================

    pub fn select_unit(&mut self, unit: UnitDuration) {
        self.unit_duration = Some(unit);
    }

    // ========================
    // Step 2: task selection
    // ========================

    pub fn toggle_task(&mut self, task_ref: &TaskRef) {
        if let Some(pos) = self.selected.iter().position(|r| r == task_ref) {
            self.selected.remove(pos);
            return;
        }
        if self.lookup(task_ref).is_none() {
            log::warn!("[WIZARD] ignoring toggle of unknown task {}", task_ref.key());
            return;
        }
        self.selected.push(task_ref.clone());
        self.targets.entry(task_ref.clone()).or_insert_with(DailyTargets::zero);
    }

    /// Create a pending task and select it. Blank names are ignored.
    pub fn add_new_task(&mut self, name: &str) -> Option<TaskRef> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.next_temp_id += 1;
        let temp_id = TempId(self.next_temp_id);
        self.new_tasks.push(NewTask {
            temp_id,
            name: name.to_string(),
        });
        let task_ref = TaskRef::Pending(temp_id);
        self.selected.push(task_ref.clone());
        self.targets.insert(task_ref.clone(), DailyTargets::zero());
        Some(task_ref)
    }

    pub fn rename_pending_task(&mut self, temp_id: TempId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.new_tasks.iter_mut().find(|t| t.temp_id == temp_id) {
            Some(task) => {
                task.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove_pending_task(&mut self, temp_id: TempId) {
        self.new_tasks.retain(|t| t.temp_id != temp_id);
        self.forget(&TaskRef::Pending(temp_id));
    }

    /// Apply a rename the backend has accepted
    pub fn apply_task_renamed(&mut self, task_id: &str, name: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            task.name = name.to_string();
        }
    }

    /// Apply a deletion the backend has accepted
    pub fn apply_task_deleted(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.id != task_id);
        self.forget(&TaskRef::Existing(task_id.to_string()));
    }

    fn forget(&mut self, task_ref: &TaskRef) {
        self.selected.retain(|r| r != task_ref);
        self.targets.remove(task_ref);
    }

    // ========================
    // Step 3: weekly targets
    // ========================

    pub fn set_target(&mut self, task_ref: &TaskRef, day: DayOfWeek, value: f64) {
        if !self.is_selected(task_ref) {
            return;
        }
        self.targets
            .entry(task_ref.clone())
            .or_insert_with(DailyTargets::zero)
            .set(day, value);
    }

    pub fn row_total(&self, task_ref: &TaskRef) -> f64 {
        self.targets_for(task_ref).total()
    }

    /// Sum of one day across the selected tasks
    pub fn column_total(&self, day: DayOfWeek) -> f64 {
        self.selected.iter().map(|r| self.targets_for(r).get(day)).sum()
    }

    pub fn grand_total(&self) -> f64 {
        DayOfWeek::ALL.iter().map(|day| self.column_total(*day)).sum()
    }

    // ========================
    // Step 4: save
    // ========================

    /// Mark the wizard as saving and build the request body
    pub fn begin_save(&mut self) -> Result<GoalsUpdate, WizardError> {
        if self.is_saving {
            return Err(WizardError::SaveInProgress);
        }
        let Some(unit_duration) = self.unit_duration else {
            let err = WizardError::MissingUnitDuration;
            self.error_message = Some(err.to_string());
            return Err(err);
        };

        let goals = self
            .selected_tasks()
            .into_iter()
            .map(|task| {
                let daily_targets = self.targets_for(&task.task_ref);
                match task.task_ref {
                    TaskRef::Existing(id) => GoalUpdateItem {
                        task_id: Some(id),
                        new_task_name: None,
                        daily_targets,
                    },
                    TaskRef::Pending(_) => GoalUpdateItem {
                        task_id: None,
                        new_task_name: Some(task.name),
                        daily_targets,
                    },
                }
            })
            .collect();

        self.is_saving = true;
        self.error_message = None;
        Ok(GoalsUpdate {
            unit_duration_minutes: unit_duration,
            goals,
        })
    }

    /// Stay on confirmation with the message shown and saving re-enabled
    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.is_saving = false;
        self.error_message = Some(message.into());
    }

    pub fn save_succeeded(&mut self) {
        self.is_saving = false;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, name: &str) -> Task {
        Task::placeholder(id.to_string(), name.to_string())
    }

    fn existing(id: &str) -> TaskRef {
        TaskRef::Existing(id.to_string())
    }

    fn state_with_tasks() -> WizardState {
        WizardState::new(vec![task("tsk_1", "英語学習"), task("tsk_2", "読書")])
    }

    #[test]
    fn test_unit_step_blocks_until_chosen() {
        let mut state = state_with_tasks();
        assert_eq!(state.advance(), Err(WizardError::MissingUnitDuration));
        assert_eq!(state.step(), WizardStep::UnitDuration);

        state.select_unit(UnitDuration::ThirtyMinutes);
        assert_eq!(state.advance(), Ok(WizardStep::TaskSelection));
    }

    #[test]
    fn test_selection_step_blocks_while_empty() {
        let mut state = state_with_tasks();
        state.select_unit(UnitDuration::OneHour);
        state.advance().unwrap();
        assert_eq!(state.advance(), Err(WizardError::EmptySelection));

        state.toggle_task(&existing("tsk_1"));
        assert_eq!(state.advance(), Ok(WizardStep::WeeklyTargets));
        assert_eq!(state.advance(), Ok(WizardStep::Confirmation));
        assert_eq!(state.advance(), Err(WizardError::LastStep(WizardStep::Confirmation)));
    }

    #[test]
    fn test_back_is_always_allowed() {
        let mut state = state_with_tasks();
        assert_eq!(state.back(), WizardStep::UnitDuration);
        state.select_unit(UnitDuration::TenMinutes);
        state.advance().unwrap();
        assert_eq!(state.back(), WizardStep::UnitDuration);
    }

    #[test]
    fn test_toggle_preserves_prior_targets() {
        let mut state = state_with_tasks();
        let tsk_1 = existing("tsk_1");

        state.toggle_task(&tsk_1);
        assert_eq!(state.targets_for(&tsk_1), DailyTargets::zero());
        state.set_target(&tsk_1, DayOfWeek::Monday, 2.0);

        state.toggle_task(&tsk_1);
        assert!(!state.is_selected(&tsk_1));
        state.toggle_task(&tsk_1);
        assert!(state.is_selected(&tsk_1));
        assert_eq!(state.targets_for(&tsk_1).monday, 2.0);
    }

    #[test]
    fn test_toggle_unknown_task_is_ignored() {
        let mut state = state_with_tasks();
        state.toggle_task(&existing("tsk_404"));
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_add_new_task_selects_it() {
        let mut state = state_with_tasks();
        assert_eq!(state.add_new_task("   "), None);

        let first = state.add_new_task(" ストレッチ ").unwrap();
        let second = state.add_new_task("瞑想").unwrap();
        assert_ne!(first, second);
        assert!(state.is_selected(&first));
        assert_eq!(state.lookup(&first).unwrap().name, "ストレッチ");
        assert!(state.lookup(&first).unwrap().is_new());
        assert_eq!(state.targets_for(&second), DailyTargets::zero());
    }

    #[test]
    fn test_pending_task_rename_and_remove() {
        let mut state = state_with_tasks();
        let task_ref = state.add_new_task("Stretch").unwrap();
        let TaskRef::Pending(temp_id) = task_ref.clone() else { panic!("expected pending ref") };

        assert!(state.rename_pending_task(temp_id, "Stretching"));
        assert!(!state.rename_pending_task(temp_id, "  "));
        assert_eq!(state.lookup(&task_ref).unwrap().name, "Stretching");

        state.set_target(&task_ref, DayOfWeek::Sunday, 1.0);
        state.remove_pending_task(temp_id);
        assert!(state.new_tasks().is_empty());
        assert!(!state.is_selected(&task_ref));
        assert_eq!(state.targets_for(&task_ref), DailyTargets::zero());
    }

    #[test]
    fn test_existing_task_changes_after_backend_success() {
        let mut state = state_with_tasks();
        let tsk_2 = existing("tsk_2");
        state.toggle_task(&tsk_2);

        state.apply_task_renamed("tsk_2", "読書（技術書）");
        assert_eq!(state.lookup(&tsk_2).unwrap().name, "読書（技術書）");

        state.apply_task_deleted("tsk_2");
        assert!(state.lookup(&tsk_2).is_none());
        assert!(state.selected().is_empty());
        assert_eq!(state.tasks().len(), 1);
    }

    #[test]
    fn test_totals_follow_edits() {
        let mut state = state_with_tasks();
        let tsk_1 = existing("tsk_1");
        let tsk_2 = existing("tsk_2");
        state.toggle_task(&tsk_1);
        state.toggle_task(&tsk_2);

        state.set_target(&tsk_1, DayOfWeek::Monday, 2.0);
        state.set_target(&tsk_1, DayOfWeek::Tuesday, 1.0);
        state.set_target(&tsk_2, DayOfWeek::Monday, 0.5);
        assert_eq!(state.row_total(&tsk_1), 3.0);
        assert_eq!(state.column_total(DayOfWeek::Monday), 2.5);

        state.set_target(&tsk_1, DayOfWeek::Monday, 1.0);
        assert_eq!(state.row_total(&tsk_1), 2.0);
        assert_eq!(state.column_total(DayOfWeek::Monday), 1.5);
        assert_eq!(state.grand_total(), 2.5);

        // Deselected rows drop out of the column totals
        state.toggle_task(&tsk_2);
        assert_eq!(state.column_total(DayOfWeek::Monday), 1.0);
    }

    #[test]
    fn test_set_target_ignores_unselected() {
        let mut state = state_with_tasks();
        let tsk_1 = existing("tsk_1");
        state.set_target(&tsk_1, DayOfWeek::Monday, 2.0);
        assert_eq!(state.targets_for(&tsk_1), DailyTargets::zero());
    }

    #[test]
    fn test_save_without_unit_is_rejected() {
        let mut state = state_with_tasks();
        state.toggle_task(&existing("tsk_1"));
        assert_eq!(state.begin_save(), Err(WizardError::MissingUnitDuration));
        assert!(!state.is_saving());
        assert_eq!(state.error_message(), Some("ユニット時間を選択してください。"));
    }

    #[test]
    fn test_save_payload_mixes_existing_and_new() {
        let mut state = state_with_tasks();
        state.select_unit(UnitDuration::ThirtyMinutes);
        state.toggle_task(&existing("tsk_2"));
        let pending = state.add_new_task("Stretching").unwrap();
        state.set_target(&pending, DayOfWeek::Wednesday, 1.5);

        let payload = state.begin_save().unwrap();
        assert!(state.is_saving());
        assert_eq!(payload.unit_duration_minutes, UnitDuration::ThirtyMinutes);
        assert_eq!(payload.goals.len(), 2);
        assert_eq!(payload.goals[0].task_id.as_deref(), Some("tsk_2"));
        assert_eq!(payload.goals[0].new_task_name, None);
        assert_eq!(payload.goals[1].task_id, None);
        assert_eq!(payload.goals[1].new_task_name.as_deref(), Some("Stretching"));
        assert_eq!(payload.goals[1].daily_targets.wednesday, 1.5);

        assert_eq!(state.begin_save(), Err(WizardError::SaveInProgress));
    }

    #[test]
    fn test_failed_save_keeps_state_and_allows_retry() {
        let mut state = state_with_tasks();
        state.select_unit(UnitDuration::TwoHours);
        state.toggle_task(&existing("tsk_1"));
        state.advance().unwrap();
        state.advance().unwrap();
        state.advance().unwrap();

        state.begin_save().unwrap();
        state.save_failed("保存に失敗しました。");
        assert_eq!(state.step(), WizardStep::Confirmation);
        assert!(!state.is_saving());
        assert_eq!(state.error_message(), Some("保存に失敗しました。"));
        assert!(state.is_selected(&existing("tsk_1")));

        assert!(state.begin_save().is_ok());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_seeded_from_goals() {
        let goals = vec![Goal {
            task_id: "tsk_2".to_string(),
            task_name: "読書".to_string(),
            daily_targets: DailyTargets::zero().with(DayOfWeek::Friday, 2.0),
        }];
        let state = WizardState::with_goals(
            vec![task("tsk_1", "英語学習"), task("tsk_2", "読書")],
            Some(UnitDuration::ThirtyMinutes),
            &goals,
        );
        assert_eq!(state.unit_duration(), Some(UnitDuration::ThirtyMinutes));
        assert_eq!(state.selected(), &[existing("tsk_2")]);
        assert_eq!(state.targets_for(&existing("tsk_2")).friday, 2.0);
    }

    #[test]
    fn test_step_status() {
        assert_eq!(WizardStep::UnitDuration.status(WizardStep::WeeklyTargets), StepStatus::Completed);
        assert_eq!(WizardStep::WeeklyTargets.status(WizardStep::WeeklyTargets), StepStatus::Active);
        assert_eq!(WizardStep::Confirmation.status(WizardStep::WeeklyTargets), StepStatus::Upcoming);
        assert_eq!(WizardStep::Confirmation.number(), 4);
    }
}
