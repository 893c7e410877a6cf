//! API Models
//!
//! Data structures matching the Tasche REST payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::day::DayOfWeek;
use crate::targets::DailyTargets;
use crate::unit::UnitDuration;

pub type TaskId = String;

/// Rates arrive as floats (`75.0`); the UI works in whole percent
fn deserialize_rate<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.filter(|rate| rate.is_finite()).map(|rate| rate.max(0.0).round() as u32))
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub is_archived: bool,
    /// Absent on placeholders synthesized for orphaned goals
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Display-only stand-in for a task the active list no longer carries
    pub fn placeholder(id: TaskId, name: String) -> Self {
        Self {
            id,
            name,
            is_archived: false,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskNameArgs<'a> {
    pub name: &'a str,
}

/// One configured goal of the current week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub task_id: TaskId,
    pub task_name: String,
    pub daily_targets: DailyTargets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsResponse {
    pub week_id: String,
    #[serde(default)]
    pub unit_duration_minutes: Option<UnitDuration>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// Save payload entry: either an existing task id or the name of a task to create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalUpdateItem {
    pub task_id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_task_name: Option<String>,
    pub daily_targets: DailyTargets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsUpdate {
    pub unit_duration_minutes: UnitDuration,
    pub goals: Vec<GoalUpdateItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedTask {
    pub id: TaskId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsUpdateResponse {
    pub week_id: String,
    pub unit_duration_minutes: UnitDuration,
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub created_tasks: Vec<CreatedTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub unit_duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayGoal {
    pub task_id: TaskId,
    pub task_name: String,
    pub target_units: f64,
    pub actual_units: f64,
    #[serde(default, deserialize_with = "deserialize_rate")]
    pub completion_rate: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub target_units: f64,
    pub actual_units: f64,
    #[serde(default, deserialize_with = "deserialize_rate")]
    pub completion_rate: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMatrixItem {
    pub task_id: TaskId,
    pub task_name: String,
    /// Days without a goal may be missing entirely
    #[serde(default)]
    pub daily_data: BTreeMap<DayOfWeek, DayCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub current_date: NaiveDate,
    pub current_day_of_week: DayOfWeek,
    pub week: Week,
    #[serde(default)]
    pub today_goals: Vec<TodayGoal>,
    #[serde(default)]
    pub weekly_matrix: Vec<WeeklyMatrixItem>,
    pub has_goals_configured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub actual_units: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_entry_serialization() {
        let item = GoalUpdateItem {
            task_id: None,
            new_task_name: Some("Stretching".to_string()),
            daily_targets: DailyTargets::zero(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json["task_id"].is_null());
        assert_eq!(json["new_task_name"], "Stretching");

        let existing = GoalUpdateItem {
            task_id: Some("tsk_1".to_string()),
            new_task_name: None,
            daily_targets: DailyTargets::zero(),
        };
        let json = serde_json::to_value(&existing).unwrap();
        assert_eq!(json["task_id"], "tsk_1");
        assert!(json.get("new_task_name").is_none());
    }

    #[test]
    fn test_dashboard_snapshot_deserialization() {
        let raw = r#"{
            "current_date": "2026-01-12",
            "current_day_of_week": "monday",
            "week": {"id": "wk_1", "start_date": "2026-01-12", "end_date": "2026-01-18", "unit_duration_minutes": 30},
            "today_goals": [
                {"task_id": "tsk_1", "task_name": "読書", "target_units": 2, "actual_units": 0, "completion_rate": 0}
            ],
            "weekly_matrix": [
                {"task_id": "tsk_1", "task_name": "読書", "daily_data": {
                    "monday": {"target_units": 2, "actual_units": 1.6, "completion_rate": 80},
                    "tuesday": {"target_units": 0, "actual_units": 0, "completion_rate": null}
                }}
            ],
            "has_goals_configured": true
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.current_day_of_week, DayOfWeek::Monday);
        assert_eq!(snapshot.week.start_date, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        let cells = &snapshot.weekly_matrix[0].daily_data;
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[&DayOfWeek::Monday].completion_rate, Some(80));
        assert_eq!(cells[&DayOfWeek::Tuesday].completion_rate, None);
        assert!(!cells.contains_key(&DayOfWeek::Friday));
    }

    #[test]
    fn test_float_completion_rates_are_rounded() {
        let goal: TodayGoal = serde_json::from_str(
            r#"{"task_id": "tsk_1", "task_name": "読書", "target_units": 2.0, "actual_units": 1.5, "completion_rate": 75.0}"#,
        )
        .unwrap();
        assert_eq!(goal.completion_rate, Some(75));

        let raw = r#"{
            "current_date": "2026-01-14",
            "current_day_of_week": "wednesday",
            "week": {"id": "wk_1", "start_date": "2026-01-12", "end_date": "2026-01-18", "unit_duration_minutes": 30},
            "today_goals": [],
            "weekly_matrix": [
                {"task_id": "tsk_1", "task_name": "読書", "daily_data": {
                    "monday": {"target_units": 2.0, "actual_units": 2.5, "completion_rate": 125.0},
                    "tuesday": {"target_units": 3.0, "actual_units": 1.0, "completion_rate": 33.333333333333336},
                    "wednesday": {"target_units": 0.0, "actual_units": 0.0}
                }}
            ],
            "has_goals_configured": true
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(raw).unwrap();
        let cells = &snapshot.weekly_matrix[0].daily_data;
        assert_eq!(cells[&DayOfWeek::Monday].completion_rate, Some(125));
        assert_eq!(cells[&DayOfWeek::Tuesday].completion_rate, Some(33));
        assert_eq!(cells[&DayOfWeek::Wednesday].completion_rate, None);
    }

    #[test]
    fn test_task_timestamps_are_optional() {
        let task: Task = serde_json::from_str(
            r#"{"id": "tsk_1", "name": "英語学習", "is_archived": false, "created_at": "2026-01-01T00:00:00Z", "updated_at": "2026-01-05T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(task.created_at.is_some());

        let placeholder = Task::placeholder("tsk_9".to_string(), "読書".to_string());
        assert!(placeholder.created_at.is_none());
        assert!(!placeholder.is_archived);
    }
}
