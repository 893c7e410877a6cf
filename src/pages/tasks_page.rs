//! Tasks Page
//!
//! Manage the task catalogue outside the wizard: create, rename, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tasche_core::error::{GENERIC_FETCH_MESSAGE, GENERIC_SAVE_MESSAGE};
use tasche_core::Task;

use crate::components::TaskItem;
use crate::context::{use_api, MountGuard};

#[component]
pub fn TasksPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new({
        let api = api.clone();
        let guard = guard.clone();
        move |_| {
            let _ = reload_trigger.get();
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api.list_tasks().await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(list) => {
                        let active: Vec<Task> = list.tasks.into_iter().filter(|t| !t.is_archived).collect();
                        log::debug!("[TASKS] loaded {} active tasks", active.len());
                        set_tasks.try_set(active);
                    }
                    Err(e) => {
                        log::error!("[TASKS] load failed: {}", e);
                        set_error.try_set(Some(e.user_message(GENERIC_FETCH_MESSAGE)));
                    }
                }
                set_loading.try_set(false);
            });
        }
    });

    // Shared tail of every mutation: report, then reload the list
    let finish = move |result: Result<(), tasche_core::ApiError>, action: &str| {
        if let Err(e) = result {
            log::error!("[TASKS] {} failed: {}", action, e);
            set_error.try_set(Some(e.user_message(GENERIC_SAVE_MESSAGE)));
        }
        set_pending.try_set(false);
        set_reload_trigger.try_update(|n| *n += 1);
    };

    let create = {
        let api = api.clone();
        let guard = guard.clone();
        move || {
            let name = new_name.get().trim().to_string();
            if name.is_empty() || pending.get_untracked() {
                return;
            }
            set_pending.set(true);
            set_error.set(None);
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api.create_task(&name).await.map(|_| ());
                if !guard.is_mounted() {
                    return;
                }
                if result.is_ok() {
                    set_new_name.try_set(String::new());
                }
                finish(result, "create");
            });
        }
    };
    let create_on_key = create.clone();

    let rename = {
        let api = api.clone();
        let guard = guard.clone();
        move |task_id: String, name: String| {
            set_pending.set(true);
            set_error.set(None);
            let api = api.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api.rename_task(&task_id, &name).await.map(|_| ());
                if guard.is_mounted() {
                    finish(result, "rename");
                }
            });
        }
    };

    let delete = move |task_id: String| {
        set_pending.set(true);
        set_error.set(None);
        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api.delete_task(&task_id).await.map(|_| ());
            if guard.is_mounted() {
                finish(result, "delete");
            }
        });
    };

    view! {
        <div class="tasks-page">
            <div class="new-task-form">
                <input
                    type="text"
                    placeholder="新しいタスク名"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    on:keydown=move |ev| if ev.key() == "Enter" { create_on_key() }
                />
                <button
                    disabled=move || pending.get() || new_name.get().trim().is_empty()
                    on:click=move |_| create()
                >
                    "追加する"
                </button>
            </div>

            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"読み込み中..."</p> }
            >
                <Show when=move || tasks.with(|tasks| tasks.is_empty())>
                    <p class="muted">"タスクがありません。"</p>
                </Show>
                <div class="task-list">
                    <For
                        each=move || tasks.get()
                        key=|task: &Task| (task.id.clone(), task.name.clone())
                        children={
                            let rename = rename.clone();
                            let delete = delete.clone();
                            move |task: Task| {
                                let on_edit = {
                                    let id = task.id.clone();
                                    let rename = rename.clone();
                                    Callback::new(move |name: String| rename(id.clone(), name))
                                };
                                let on_delete = {
                                    let id = task.id.clone();
                                    let delete = delete.clone();
                                    Callback::new(move |_: ()| delete(id.clone()))
                                };
                                view! {
                                    <TaskItem
                                        name=task.name.clone()
                                        busy=pending
                                        on_edit=on_edit
                                        on_delete=on_delete
                                    />
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
