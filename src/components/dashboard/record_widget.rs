//! Record Widget
//!
//! Pick a day, a task and a unit count, then record the actual.

use leptos::prelude::*;
use tasche_core::dashboard::{step_units_down, step_units_up, RecordRequest, DEFAULT_RECORD_UNITS};
use tasche_core::targets::format_units;
use tasche_core::{DayOfWeek, TaskId};

/// Task choice offered by the select box
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTaskOption {
    pub task_id: TaskId,
    pub task_name: String,
}

#[component]
pub fn RecordWidget(
    #[prop(into)] tasks: Signal<Vec<RecordTaskOption>>,
    /// Initial day selection
    current_day: DayOfWeek,
    #[prop(into)] recording: Signal<bool>,
    on_record: Callback<RecordRequest>,
) -> impl IntoView {
    let (day, set_day) = signal(current_day);
    let (task_id, set_task_id) = signal(String::new());
    let (units, set_units) = signal(DEFAULT_RECORD_UNITS);

    let request = move || RecordRequest::new(day.get(), &task_id.get(), units.get());

    // Forget a choice that disappeared after a refetch
    Effect::new(move |_| {
        let current = task_id.get();
        if !current.is_empty() && !tasks.with(|tasks| tasks.iter().any(|t| t.task_id == current)) {
            set_task_id.set(String::new());
        }
    });

    view! {
        <section class="card record-widget">
            <h3 class="card-title">"実績登録"</h3>

            <div class="day-toggle">
                {DayOfWeek::ALL.iter().map(|d| {
                    let d = *d;
                    view! {
                        <button
                            type="button"
                            class=move || if day.get() == d { "day-btn active" } else { "day-btn" }
                            on:click=move |_| set_day.set(d)
                        >
                            {d.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <label class="field">
                <span class="field-label">"タスク"</span>
                <select
                    prop:value=move || task_id.get()
                    on:change=move |ev| set_task_id.set(event_target_value(&ev))
                >
                    <option value="">"選択してください"</option>
                    <For
                        each=move || tasks.get()
                        key=|task: &RecordTaskOption| task.task_id.clone()
                        children=|task: RecordTaskOption| view! {
                            <option value=task.task_id.clone()>{task.task_name.clone()}</option>
                        }
                    />
                </select>
            </label>

            <div class="field">
                <span class="field-label">"ユニット数（0.5刻み）"</span>
                <div class="stepper">
                    <button
                        type="button"
                        disabled=move || units.get() <= 0.0
                        on:click=move |_| set_units.update(|u| *u = step_units_down(*u))
                    >
                        "−"
                    </button>
                    <span class="stepper-value">{move || format_units(units.get())}</span>
                    <button type="button" on:click=move |_| set_units.update(|u| *u = step_units_up(*u))>"+"</button>
                </div>
            </div>

            <button
                class="primary"
                disabled=move || recording.get() || request().is_none()
                on:click=move |_| {
                    if let Some(request) = request() {
                        on_record.run(request);
                    }
                }
            >
                {move || if recording.get() { "記録中..." } else { "記録" }}
            </button>
        </section>
    }
}
