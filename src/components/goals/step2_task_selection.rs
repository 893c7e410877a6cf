//! Step 2: Task Selection
//!
//! Pending tasks are edited locally. Renaming or deleting an existing task
//! goes to the backend first and only touches the wizard once accepted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tasche_core::{GoalTask, TaskRef};

use crate::components::TaskItem;
use crate::context::{use_api, use_mount_guard};
use crate::store::{
    store_advance, store_back, store_finish_task_action, store_update_wizard, use_goal_store, GoalPageStateStoreFields,
};

#[component]
pub fn Step2TaskSelection() -> impl IntoView {
    let store = use_goal_store();
    let api = use_api();
    let guard = use_mount_guard();

    let (new_task_name, set_new_task_name) = signal(String::new());
    let tasks = move || store.wizard().with(|wizard| wizard.all_tasks());
    let can_advance = move || store.wizard().with(|wizard| wizard.can_advance().is_ok());
    let busy = Signal::derive(move || store.pending_task_action().with(|action| action.is_some()));

    let add_task = move || {
        let name = new_task_name.get();
        if store_update_wizard(&store, |wizard| wizard.add_new_task(&name)).is_some() {
            set_new_task_name.set(String::new());
        }
    };

    let rename = {
        let api = api.clone();
        let guard = guard.clone();
        move |task_ref: TaskRef, name: String| match task_ref {
            TaskRef::Pending(temp_id) => {
                store_update_wizard(&store, |wizard| wizard.rename_pending_task(temp_id, &name));
            }
            TaskRef::Existing(task_id) => {
                store.pending_task_action().set(Some(task_id.clone()));
                let api = api.clone();
                let guard = guard.clone();
                spawn_local(async move {
                    let result = api.rename_task(&task_id, &name).await;
                    if !guard.is_mounted() {
                        return;
                    }
                    match result {
                        Ok(task) => store_update_wizard(&store, |wizard| wizard.apply_task_renamed(&task.id, &task.name)),
                        Err(e) => log::error!("[WIZARD] rename of {} failed: {}", task_id, e),
                    }
                    store_finish_task_action(&store);
                });
            }
        }
    };

    let delete = move |task_ref: TaskRef| match task_ref {
        TaskRef::Pending(temp_id) => {
            store_update_wizard(&store, |wizard| wizard.remove_pending_task(temp_id));
        }
        TaskRef::Existing(task_id) => {
            store.pending_task_action().set(Some(task_id.clone()));
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api.delete_task(&task_id).await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(_) => store_update_wizard(&store, |wizard| wizard.apply_task_deleted(&task_id)),
                    Err(e) => log::error!("[WIZARD] delete of {} failed: {}", task_id, e),
                }
                store_finish_task_action(&store);
            });
        }
    };

    view! {
        <div class="step">
            <div class="step-header">
                <h2>"今週取り組むタスクを選んでください"</h2>
                <p class="muted">"複数選択できます。新しいタスクもここで追加できます。"</p>
            </div>

            <div class="task-list">
                <Show when=move || tasks().is_empty()>
                    <p class="muted">"タスクがありません。下のフォームから追加してください。"</p>
                </Show>
                <For
                    each=tasks
                    key=|task: &GoalTask| (task.task_ref.clone(), task.name.clone())
                    children={
                        let rename = rename.clone();
                        let delete = delete.clone();
                        move |task: GoalTask| {
                            let task_ref = task.task_ref.clone();
                            let selected = {
                                let task_ref = task_ref.clone();
                                Signal::derive(move || store.wizard().with(|wizard| wizard.is_selected(&task_ref)))
                            };
                            let on_toggle = {
                                let task_ref = task_ref.clone();
                                Callback::new(move |_: ()| store_update_wizard(&store, |wizard| wizard.toggle_task(&task_ref)))
                            };
                            let on_edit = {
                                let task_ref = task_ref.clone();
                                let rename = rename.clone();
                                Callback::new(move |name: String| rename(task_ref.clone(), name))
                            };
                            let on_delete = {
                                let task_ref = task_ref.clone();
                                let delete = delete.clone();
                                Callback::new(move |_: ()| delete(task_ref.clone()))
                            };
                            view! {
                                <TaskItem
                                    name=task.name.clone()
                                    is_new=task.is_new()
                                    selected=selected
                                    on_toggle=on_toggle
                                    busy=busy
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        }
                    }
                />
            </div>

            <div class="new-task-form">
                <input
                    type="text"
                    placeholder="新しいタスク名"
                    prop:value=move || new_task_name.get()
                    on:input=move |ev| set_new_task_name.set(event_target_value(&ev))
                    on:keydown=move |ev| if ev.key() == "Enter" { add_task() }
                />
                <button
                    disabled=move || new_task_name.get().trim().is_empty()
                    on:click=move |_| add_task()
                >
                    "追加する"
                </button>
            </div>

            <div class="step-actions">
                <button class="secondary" disabled=move || busy.get() on:click=move |_| store_back(&store)>"← 戻る"</button>
                <button disabled=move || busy.get() || !can_advance() on:click=move |_| store_advance(&store)>"次へ →"</button>
            </div>
        </div>
    }
}
