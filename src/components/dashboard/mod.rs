//! Dashboard widgets

mod goal_setting_fab;
mod record_widget;
mod today_goals_widget;
mod weekly_matrix;

pub use goal_setting_fab::GoalSettingFab;
pub use record_widget::{RecordTaskOption, RecordWidget};
pub use today_goals_widget::TodayGoalsWidget;
pub use weekly_matrix::WeeklyMatrix;
