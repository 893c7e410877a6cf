//! Dashboard Aggregation
//!
//! Completion rates, cell classification, weekly column totals and the record
//! request built by the record widget.

use crate::day::DayOfWeek;
use crate::models::{RecordUpdate, TaskId, TodayGoal, WeeklyMatrixItem};
use crate::targets::UNIT_STEP;

/// Units preselected in the record widget
pub const DEFAULT_RECORD_UNITS: f64 = 1.5;

/// `None` means no goal is set for the cell, not 0%
pub fn completion_rate(actual_units: f64, target_units: f64) -> Option<u32> {
    if target_units <= 0.0 || !target_units.is_finite() {
        return None;
    }
    let rate = (actual_units.max(0.0) / target_units * 100.0).round();
    Some(rate as u32)
}

/// Color band of one matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBand {
    Unset,
    Empty,
    Low,
    MidLow,
    MidHigh,
    Complete,
}

impl CompletionBand {
    pub fn classify(rate: Option<u32>) -> Self {
        match rate {
            None => CompletionBand::Unset,
            Some(0) => CompletionBand::Empty,
            Some(r) if r < 50 => CompletionBand::Low,
            Some(r) if r < 80 => CompletionBand::MidLow,
            Some(r) if r < 100 => CompletionBand::MidHigh,
            Some(_) => CompletionBand::Complete,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CompletionBand::Unset => "",
            CompletionBand::Empty => "rate-empty",
            CompletionBand::Low => "rate-low",
            CompletionBand::MidLow => "rate-mid-low",
            CompletionBand::MidHigh => "rate-mid-high",
            CompletionBand::Complete => "rate-complete",
        }
    }
}

/// Progress icon next to a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Seedling,
    Growing,
    Bloom,
}

impl ProgressTier {
    pub fn from_rate(rate: u32) -> Self {
        match rate {
            r if r < 50 => ProgressTier::Seedling,
            r if r < 100 => ProgressTier::Growing,
            _ => ProgressTier::Bloom,
        }
    }

    /// Horizontal offset into the 18px progress sprite sheet
    pub fn sprite_offset(&self) -> u32 {
        match self {
            ProgressTier::Seedling => 0,
            ProgressTier::Growing => 18,
            ProgressTier::Bloom => 36,
        }
    }
}

pub fn format_rate(rate: Option<u32>) -> String {
    rate.map(|r| format!("{}%", r)).unwrap_or_default()
}

/// Weekly total of one day column over the tasks that have a cell for it
pub fn column_total(matrix: &[WeeklyMatrixItem], day: DayOfWeek) -> Option<u32> {
    let (actual, target) = matrix
        .iter()
        .filter_map(|item| item.daily_data.get(&day))
        .fold((0.0, 0.0), |(actual, target), cell| {
            (actual + cell.actual_units, target + cell.target_units)
        });
    completion_rate(actual, target)
}

pub fn column_totals(matrix: &[WeeklyMatrixItem]) -> [Option<u32>; 7] {
    DayOfWeek::ALL.map(|day| column_total(matrix, day))
}

pub fn is_goal_done(goal: &TodayGoal) -> bool {
    goal.actual_units >= goal.target_units
}

/// Units recorded when a today-goal checkbox changes
pub fn units_for_check(goal: &TodayGoal, checked: bool) -> f64 {
    if checked {
        goal.target_units
    } else {
        0.0
    }
}

/// A today-goal checkbox toggle: the record to send, and the state the box
/// shows until a refetched snapshot reports otherwise
pub fn check_today_goal(day: DayOfWeek, goal: &TodayGoal, checked: bool) -> (Option<RecordRequest>, bool) {
    let request = RecordRequest::new(day, &goal.task_id, units_for_check(goal, checked));
    (request, is_goal_done(goal))
}

pub fn format_target_units(units: f64) -> String {
    if units == 1.0 {
        format!("{} unit", units)
    } else {
        format!("{} units", units)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn step_units_up(units: f64) -> f64 {
    round_tenth(units + UNIT_STEP)
}

pub fn step_units_down(units: f64) -> f64 {
    round_tenth(units - UNIT_STEP).max(0.0)
}

/// One recorded actual: `PUT /weeks/current/records/{day}/{task_id}`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRequest {
    pub day: DayOfWeek,
    pub task_id: TaskId,
    pub units: f64,
}

impl RecordRequest {
    /// `None` until a task is picked
    pub fn new(day: DayOfWeek, task_id: &str, units: f64) -> Option<Self> {
        if task_id.is_empty() {
            return None;
        }
        Some(Self {
            day,
            task_id: task_id.to_string(),
            units: units.max(0.0),
        })
    }

    pub fn body(&self) -> RecordUpdate {
        RecordUpdate {
            actual_units: self.units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayCell;
    use std::collections::BTreeMap;

    fn cell(target: f64, actual: f64) -> DayCell {
        DayCell {
            target_units: target,
            actual_units: actual,
            completion_rate: completion_rate(actual, target),
        }
    }

    fn row(id: &str, cells: &[(DayOfWeek, DayCell)]) -> WeeklyMatrixItem {
        WeeklyMatrixItem {
            task_id: id.to_string(),
            task_name: id.to_string(),
            daily_data: cells.iter().copied().collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_completion_rate() {
        assert_eq!(completion_rate(1.6, 2.0), Some(80));
        assert_eq!(completion_rate(0.0, 2.0), Some(0));
        assert_eq!(completion_rate(2.4, 2.0), Some(120));
        assert_eq!(completion_rate(0.3, 1.0), Some(30));
        assert_eq!(completion_rate(1.0, 0.0), None);
        assert_eq!(completion_rate(0.0, 0.0), None);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(CompletionBand::classify(None), CompletionBand::Unset);
        assert_eq!(CompletionBand::classify(Some(0)), CompletionBand::Empty);
        assert_eq!(CompletionBand::classify(Some(1)), CompletionBand::Low);
        assert_eq!(CompletionBand::classify(Some(49)), CompletionBand::Low);
        assert_eq!(CompletionBand::classify(Some(50)), CompletionBand::MidLow);
        assert_eq!(CompletionBand::classify(Some(79)), CompletionBand::MidLow);
        assert_eq!(CompletionBand::classify(Some(80)), CompletionBand::MidHigh);
        assert_eq!(CompletionBand::classify(Some(99)), CompletionBand::MidHigh);
        assert_eq!(CompletionBand::classify(Some(100)), CompletionBand::Complete);
        assert_eq!(CompletionBand::classify(Some(250)), CompletionBand::Complete);
        assert_eq!(CompletionBand::Unset.css_class(), "");
    }

    #[test]
    fn test_progress_tier() {
        assert_eq!(ProgressTier::from_rate(0).sprite_offset(), 0);
        assert_eq!(ProgressTier::from_rate(50), ProgressTier::Growing);
        assert_eq!(ProgressTier::from_rate(100).sprite_offset(), 36);
    }

    #[test]
    fn test_column_totals() {
        let matrix = vec![
            row("a", &[(DayOfWeek::Monday, cell(2.0, 2.0)), (DayOfWeek::Tuesday, cell(2.0, 1.6))]),
            row("b", &[(DayOfWeek::Monday, cell(2.0, 1.0)), (DayOfWeek::Tuesday, cell(0.0, 0.0))]),
        ];
        let totals = column_totals(&matrix);
        assert_eq!(totals[0], Some(75));
        assert_eq!(totals[1], Some(80));
        // No cells at all
        assert_eq!(totals[2], None);
        assert_eq!(format_rate(totals[0]), "75%");
        assert_eq!(format_rate(totals[2]), "");
    }

    #[test]
    fn test_column_total_with_zero_target_is_undefined() {
        let matrix = vec![row("a", &[(DayOfWeek::Sunday, cell(0.0, 1.0))])];
        assert_eq!(column_total(&matrix, DayOfWeek::Sunday), None);
    }

    #[test]
    fn test_unit_stepper() {
        assert_eq!(step_units_up(DEFAULT_RECORD_UNITS), 2.0);
        assert_eq!(step_units_down(0.5), 0.0);
        assert_eq!(step_units_down(0.0), 0.0);
        assert_eq!(step_units_up(0.1), 0.6);
    }

    #[test]
    fn test_today_goal_helpers() {
        let goal = TodayGoal {
            task_id: "tsk_1".to_string(),
            task_name: "読書".to_string(),
            target_units: 2.0,
            actual_units: 2.0,
            completion_rate: Some(100),
        };
        assert!(is_goal_done(&goal));
        assert_eq!(units_for_check(&goal, true), 2.0);
        assert_eq!(units_for_check(&goal, false), 0.0);
        assert_eq!(format_target_units(1.0), "1 unit");
        assert_eq!(format_target_units(2.5), "2.5 units");
    }

    #[test]
    fn test_checkbox_shows_snapshot_state_not_click() {
        let goal = TodayGoal {
            task_id: "tsk_1".to_string(),
            task_name: "読書".to_string(),
            target_units: 2.0,
            actual_units: 0.5,
            completion_rate: Some(25),
        };
        let (request, shown) = check_today_goal(DayOfWeek::Wednesday, &goal, true);
        let request = request.unwrap();
        assert_eq!(request.day, DayOfWeek::Wednesday);
        assert_eq!(request.units, 2.0);
        // Stays unchecked until the record succeeds and the snapshot changes
        assert!(!shown);

        let done = TodayGoal { actual_units: 2.0, ..goal };
        let (request, shown) = check_today_goal(DayOfWeek::Wednesday, &done, false);
        assert_eq!(request.unwrap().units, 0.0);
        assert!(shown);
    }

    #[test]
    fn test_record_request_requires_task() {
        assert_eq!(RecordRequest::new(DayOfWeek::Monday, "", 1.5), None);
        let request = RecordRequest::new(DayOfWeek::Friday, "tsk_1", 1.5).unwrap();
        assert_eq!(request.body().actual_units, 1.5);
    }
}
