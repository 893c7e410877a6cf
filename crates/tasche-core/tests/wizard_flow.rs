//! Walks the goal wizard from an empty account to the save request.

use tasche_core::reconcile::seed_wizard;
use tasche_core::targets::format_units;
use tasche_core::{DayOfWeek, GoalsResponse, TaskList, UnitDuration, WizardStep};

#[test]
fn test_first_week_with_a_new_task() {
    let tasks: TaskList = serde_json::from_str(r#"{"tasks": []}"#).unwrap();
    let goals: GoalsResponse =
        serde_json::from_str(r#"{"week_id": "wk_1", "unit_duration_minutes": null, "goals": []}"#).unwrap();

    let mut wizard = seed_wizard(Ok(tasks), Ok(goals)).unwrap();
    assert_eq!(wizard.step(), WizardStep::UnitDuration);
    assert!(wizard.selected().is_empty());

    wizard.select_unit(UnitDuration::ThirtyMinutes);
    assert_eq!(wizard.advance(), Ok(WizardStep::TaskSelection));
    assert!(wizard.all_tasks().is_empty());

    let stretching = wizard.add_new_task("Stretching").unwrap();
    assert!(wizard.is_selected(&stretching));
    assert_eq!(wizard.advance(), Ok(WizardStep::WeeklyTargets));

    let rows = wizard.selected_tasks();
    assert_eq!(rows.len(), 1);
    assert!(wizard.targets_for(&rows[0].task_ref).is_zero());

    wizard.set_target(&stretching, DayOfWeek::Monday, 1.5);
    assert_eq!(wizard.advance(), Ok(WizardStep::Confirmation));
    assert_eq!(format_units(wizard.row_total(&stretching)), "1.5");

    let payload = wizard.begin_save().unwrap();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "unit_duration_minutes": 30,
            "goals": [{
                "task_id": null,
                "new_task_name": "Stretching",
                "daily_targets": {
                    "monday": 1.5,
                    "tuesday": 0.0,
                    "wednesday": 0.0,
                    "thursday": 0.0,
                    "friday": 0.0,
                    "saturday": 0.0,
                    "sunday": 0.0
                }
            }]
        })
    );
}

#[test]
fn test_editing_an_existing_week() {
    let tasks: TaskList = serde_json::from_str(
        r#"{"tasks": [
            {"id": "tsk_1", "name": "英語学習", "is_archived": false},
            {"id": "tsk_2", "name": "個人開発", "is_archived": true}
        ]}"#,
    )
    .unwrap();
    let goals: GoalsResponse = serde_json::from_str(
        r#"{"week_id": "wk_1", "unit_duration_minutes": 60, "goals": [
            {"task_id": "tsk_2", "task_name": "個人開発", "daily_targets": {"monday": 2, "tuesday": 2}}
        ]}"#,
    )
    .unwrap();

    let mut wizard = seed_wizard(Ok(tasks), Ok(goals)).unwrap();
    assert_eq!(wizard.unit_duration(), Some(UnitDuration::OneHour));
    assert_eq!(wizard.all_tasks().len(), 2);

    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.column_total(DayOfWeek::Monday), 2.0);
    assert_eq!(wizard.grand_total(), 4.0);

    let payload = wizard.begin_save().unwrap();
    assert_eq!(payload.goals.len(), 1);
    assert_eq!(payload.goals[0].task_id.as_deref(), Some("tsk_2"));
}
