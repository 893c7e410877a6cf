//! Weekly Target Grid
//!
//! One row per selected task, one column per weekday, with live row, column
//! and grand totals.

use leptos::prelude::*;
use tasche_core::targets::{format_units, parse_units, UNIT_STEP};
use tasche_core::{DayOfWeek, GoalTask};

use crate::store::{store_update_wizard, use_goal_store, GoalPageStateStoreFields};

#[component]
pub fn WeeklyTargetGrid() -> impl IntoView {
    let store = use_goal_store();
    let rows = move || store.wizard().with(|wizard| wizard.selected_tasks());
    let grand_total = move || format_units(store.wizard().with(|wizard| wizard.grand_total()));

    view! {
        <div class="target-grid-wrapper">
            <table class="target-grid">
                <thead>
                    <tr>
                        <th class="task-col">"タスク"</th>
                        {DayOfWeek::ALL.iter().map(|day| view! { <th>{day.label()}</th> }).collect_view()}
                        <th class="total-col">"合計"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|task: &GoalTask| task.task_ref.clone()
                        children=move |task: GoalTask| view! { <TargetRow task=task /> }
                    />
                </tbody>
                <tfoot>
                    <tr>
                        <th class="task-col">"合計"</th>
                        {DayOfWeek::ALL.iter().map(|day| {
                            let day = *day;
                            view! {
                                <td>{move || format_units(store.wizard().with(|wizard| wizard.column_total(day)))}</td>
                            }
                        }).collect_view()}
                        <td class="total-col grand-total">{grand_total}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}

#[component]
fn TargetRow(task: GoalTask) -> impl IntoView {
    let store = use_goal_store();
    let task_ref = task.task_ref.clone();

    let row_total = {
        let task_ref = task_ref.clone();
        move || format_units(store.wizard().with(|wizard| wizard.row_total(&task_ref)))
    };

    view! {
        <tr>
            <th class="task-col">
                {task.name.clone()}
                {task.is_new().then(|| view! { <span class="badge-new">"new"</span> })}
            </th>
            {DayOfWeek::ALL.iter().map(|day| {
                let day = *day;
                let value = {
                    let task_ref = task_ref.clone();
                    move || store.wizard().with(|wizard| wizard.targets_for(&task_ref).get(day)).to_string()
                };
                let task_ref = task_ref.clone();
                view! {
                    <td>
                        <input
                            type="number"
                            min="0"
                            step=UNIT_STEP.to_string()
                            prop:value=value
                            // change, not input: snapping on each keystroke would fight the user
                            on:change=move |ev| {
                                let units = parse_units(&event_target_value(&ev));
                                store_update_wizard(&store, |wizard| wizard.set_target(&task_ref, day, units));
                            }
                        />
                    </td>
                }
            }).collect_view()}
            <td class="total-col">{row_total}</td>
        </tr>
    }
}
