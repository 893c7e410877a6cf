//! Today Goals Widget
//!
//! Checklist of today's goals. Checking a goal records its full target for the
//! current day; unchecking records zero.

use leptos::prelude::*;
use tasche_core::dashboard::{check_today_goal, format_rate, format_target_units, is_goal_done, RecordRequest};
use tasche_core::{DayOfWeek, TodayGoal};

#[component]
pub fn TodayGoalsWidget(
    #[prop(into)] goals: Signal<Vec<TodayGoal>>,
    #[prop(into)] today: Signal<DayOfWeek>,
    #[prop(into)] recording: Signal<bool>,
    on_record: Callback<RecordRequest>,
) -> impl IntoView {
    view! {
        <section class="card today-goals">
            <h3 class="card-title">"今日の目標"</h3>
            <Show
                when=move || !goals.with(|goals| goals.is_empty())
                fallback=|| view! { <p class="muted">"今日の目標はありません。"</p> }
            >
                <ul class="today-list">
                    <For
                        each=move || goals.get()
                        key=|goal: &TodayGoal| (goal.task_id.clone(), goal.actual_units.to_bits())
                        children=move |goal: TodayGoal| {
                            let done = is_goal_done(&goal);
                            let on_change = {
                                let goal = goal.clone();
                                move |ev: web_sys::Event| {
                                    let checked = event_target_checked(&ev);
                                    let (request, shown) = check_today_goal(today.get_untracked(), &goal, checked);
                                    // The box follows the snapshot; a successful record rebuilds the row
                                    event_target::<web_sys::HtmlInputElement>(&ev).set_checked(shown);
                                    if let Some(request) = request {
                                        on_record.run(request);
                                    }
                                }
                            };
                            view! {
                                <li class={if done { "today-item done" } else { "today-item" }}>
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=done
                                            disabled=move || recording.get()
                                            on:change=on_change
                                        />
                                        <span class="task-name">{goal.task_name.clone()}</span>
                                    </label>
                                    <span class="muted">
                                        {format_target_units(goal.target_units)}
                                    </span>
                                    <span class="today-rate">{format_rate(goal.completion_rate)}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
