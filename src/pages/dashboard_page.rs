//! Dashboard Page
//!
//! Fetches the snapshot and hands slices of it to the widgets. Every record
//! goes to the backend and is followed by a full refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tasche_core::dashboard::RecordRequest;
use tasche_core::error::{GENERIC_FETCH_MESSAGE, GENERIC_SAVE_MESSAGE};
use tasche_core::{DashboardSnapshot, DayOfWeek};

use crate::components::dashboard::{GoalSettingFab, RecordTaskOption, RecordWidget, TodayGoalsWidget, WeeklyMatrix};
use crate::context::{use_api, MountGuard};
use crate::routes::{navigate, Route};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();

    let (snapshot, set_snapshot) = signal(None::<DashboardSnapshot>);
    let (load_error, set_load_error) = signal(None::<String>);
    let (record_error, set_record_error) = signal(None::<String>);
    let (recording, set_recording) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load snapshot on mount and after every record
    Effect::new({
        let api = api.clone();
        let guard = guard.clone();
        move |_| {
            let trigger = reload_trigger.get();
            let api = api.clone();
            let guard = guard.clone();
            log::debug!("[DASHBOARD] loading snapshot, trigger={}", trigger);
            spawn_local(async move {
                let result = api.dashboard().await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(loaded) => {
                        set_load_error.try_set(None);
                        set_snapshot.try_set(Some(loaded));
                    }
                    Err(e) => {
                        log::error!("[DASHBOARD] snapshot load failed: {}", e);
                        set_load_error.try_set(Some(e.user_message(GENERIC_FETCH_MESSAGE)));
                    }
                }
            });
        }
    });

    let on_record = Callback::new(move |request: RecordRequest| {
        if recording.get_untracked() {
            return;
        }
        set_recording.set(true);
        set_record_error.set(None);
        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api.record_actual(&request).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(()) => log::info!(
                    "[DASHBOARD] recorded {} units for {} on {}",
                    request.units,
                    request.task_id,
                    request.day
                ),
                Err(e) => {
                    log::error!("[DASHBOARD] record failed: {}", e);
                    set_record_error.try_set(Some(e.user_message(GENERIC_SAVE_MESSAGE)));
                }
            }
            set_recording.try_set(false);
            set_reload_trigger.try_update(|n| *n += 1);
        });
    });

    let loaded = Memo::new(move |_| snapshot.with(|s| s.is_some()));
    let has_goals = Memo::new(move |_| snapshot.with(|s| s.as_ref().is_some_and(|s| s.has_goals_configured)));
    let today = Memo::new(move |_| {
        snapshot.with(|s| s.as_ref().map(|s| s.current_day_of_week).unwrap_or(DayOfWeek::Monday))
    });
    let today_goals = Memo::new(move |_| snapshot.with(|s| s.as_ref().map(|s| s.today_goals.clone()).unwrap_or_default()));
    let matrix = Memo::new(move |_| snapshot.with(|s| s.as_ref().map(|s| s.weekly_matrix.clone()).unwrap_or_default()));
    let record_tasks = Memo::new(move |_| {
        matrix.with(|matrix| {
            matrix
                .iter()
                .map(|item| RecordTaskOption {
                    task_id: item.task_id.clone(),
                    task_name: item.task_name.clone(),
                })
                .collect::<Vec<_>>()
        })
    });
    let week_label = move || {
        snapshot.with(|s| {
            s.as_ref().map(|s| {
                format!(
                    "{} 〜 {} ・ 1ユニット = {}分",
                    s.week.start_date.format("%Y/%m/%d"),
                    s.week.end_date.format("%m/%d"),
                    s.week.unit_duration_minutes
                )
            })
        })
    };

    view! {
        <div class="dashboard">
            <Show
                when=move || loaded.get()
                fallback=move || view! {
                    {move || match load_error.get() {
                        Some(message) => view! {
                            <div class="error-banner">
                                {message}
                                <button class="secondary" on:click=move |_| set_reload_trigger.update(|n| *n += 1)>
                                    "再読み込み"
                                </button>
                            </div>
                        }.into_any(),
                        None => view! { <p class="muted">"読み込み中..."</p> }.into_any(),
                    }}
                }
            >
                <p class="week-label muted">{week_label}</p>
                {move || load_error.get().map(|message| view! { <div class="error-banner">{message}</div> })}
                {move || record_error.get().map(|message| view! { <div class="error-banner">{message}</div> })}

                <Show
                    when=move || has_goals.get()
                    fallback=|| view! {
                        <div class="empty-state card">
                            <h3>"今週の目標がまだありません"</h3>
                            <p class="muted">"タスクと曜日ごとの目標を設定して、今週を始めましょう。"</p>
                            <button class="primary" on:click=move |_| navigate(Route::Goals)>"目標を設定する"</button>
                        </div>
                    }
                >
                    <div class="dashboard-grid">
                        <TodayGoalsWidget goals=today_goals today=today recording=recording on_record=on_record />
                        <RecordWidget
                            tasks=record_tasks
                            current_day=today.get_untracked()
                            recording=recording
                            on_record=on_record
                        />
                    </div>
                    <WeeklyMatrix matrix=matrix today=today />
                </Show>
            </Show>
            <GoalSettingFab />
        </div>
    }
}
