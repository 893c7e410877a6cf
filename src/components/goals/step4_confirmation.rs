//! Step 4: Confirmation
//!
//! Read-only recap of the week and the save action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tasche_core::error::GENERIC_SAVE_MESSAGE;
use tasche_core::targets::format_units;
use tasche_core::{DayOfWeek, GoalTask};

use crate::context::{use_api, use_mount_guard};
use crate::routes::{navigate, Route};
use crate::store::{store_back, store_update_wizard, use_goal_store, GoalPageStateStoreFields};

#[component]
pub fn Step4Confirmation() -> impl IntoView {
    let store = use_goal_store();
    let api = use_api();
    let guard = use_mount_guard();

    let selected = move || store.wizard().with(|wizard| wizard.selected_tasks());
    let is_saving = move || store.wizard().with(|wizard| wizard.is_saving());
    let error_message = move || store.wizard().with(|wizard| wizard.error_message().map(str::to_string));
    let unit_minutes = move || {
        store
            .wizard()
            .with(|wizard| wizard.unit_duration().map(|unit| unit.minutes().to_string()).unwrap_or_default())
    };

    let save = move |_| {
        let update = match store_update_wizard(&store, |wizard| wizard.begin_save()) {
            Ok(update) => update,
            Err(e) => {
                log::warn!("[WIZARD] save not started: {}", e);
                return;
            }
        };
        log::info!("[WIZARD] saving {} goals", update.goals.len());

        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api.update_current_goals(&update).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(saved) => {
                    log::info!(
                        "[WIZARD] saved week {} ({} new tasks)",
                        saved.week_id,
                        saved.created_tasks.len()
                    );
                    store_update_wizard(&store, |wizard| wizard.save_succeeded());
                    navigate(Route::Dashboard);
                }
                Err(e) => {
                    log::error!("[WIZARD] save failed: {}", e);
                    let message = e.user_message(GENERIC_SAVE_MESSAGE);
                    store_update_wizard(&store, |wizard| wizard.save_failed(message));
                }
            }
        });
    };

    view! {
        <div class="step">
            <div class="step-header">
                <h2>"内容を確認してください"</h2>
                <p class="muted">"1ユニット = " {unit_minutes} "分"</p>
            </div>

            <table class="confirm-table">
                <thead>
                    <tr>
                        <th class="task-col">"タスク"</th>
                        {DayOfWeek::ALL.iter().map(|day| view! { <th>{day.label()}</th> }).collect_view()}
                        <th class="total-col">"合計"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=selected
                        key=|task: &GoalTask| (task.task_ref.clone(), task.name.clone())
                        children=move |task: GoalTask| {
                            let targets = store.wizard().with_untracked(|wizard| wizard.targets_for(&task.task_ref));
                            view! {
                                <tr>
                                    <th class="task-col">
                                        {task.name.clone()}
                                        {task.is_new().then(|| view! { <span class="badge-new">"new"</span> })}
                                    </th>
                                    {DayOfWeek::ALL.iter().map(|day| view! {
                                        <td>{format_units(targets.get(*day))}</td>
                                    }).collect_view()}
                                    <td class="total-col">{format_units(targets.total())}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || error_message().map(|message| view! { <div class="error-banner">{message}</div> })}

            <div class="step-actions">
                <button class="secondary" disabled=is_saving on:click=move |_| store_back(&store)>"← 戻る"</button>
                <button disabled=is_saving on:click=save>
                    {move || if is_saving() { "保存中..." } else { "この内容で保存する" }}
                </button>
            </div>
        </div>
    }
}
