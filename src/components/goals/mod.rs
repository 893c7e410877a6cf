//! Weekly goal wizard components

mod goal_wizard;
mod step1_unit_duration;
mod step2_task_selection;
mod step3_weekly_targets;
mod step4_confirmation;
mod step_indicator;
mod weekly_target_grid;

pub use goal_wizard::GoalWizard;
pub use step1_unit_duration::Step1UnitDuration;
pub use step2_task_selection::Step2TaskSelection;
pub use step3_weekly_targets::Step3WeeklyTargets;
pub use step4_confirmation::Step4Confirmation;
pub use step_indicator::StepIndicator;
pub use weekly_target_grid::WeeklyTargetGrid;
