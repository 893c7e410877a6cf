//! Step 1: Unit Duration

use leptos::prelude::*;
use tasche_core::UnitDuration;

use crate::routes::{navigate, Route};
use crate::store::{store_advance, store_update_wizard, use_goal_store, GoalPageStateStoreFields};

#[component]
pub fn Step1UnitDuration() -> impl IntoView {
    let store = use_goal_store();
    let selected = move || store.wizard().with(|wizard| wizard.unit_duration());
    let can_advance = move || store.wizard().with(|wizard| wizard.can_advance().is_ok());

    view! {
        <div class="step">
            <div class="step-header">
                <h2>"1ユニットの時間を選んでください"</h2>
                <p class="muted">"あなたのペースに合わせて、今週のリズムを決めましょう。"</p>
            </div>

            <div class="unit-options">
                {UnitDuration::ALL.iter().map(|unit| {
                    let unit = *unit;
                    let is_selected = move || selected() == Some(unit);
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "unit-option selected" } else { "unit-option" }
                            on:click=move |_| store_update_wizard(&store, |wizard| wizard.select_unit(unit))
                        >
                            <span class="unit-text">
                                <span class="unit-title">{unit.title()}</span>
                                <span class="muted">{unit.description()}</span>
                            </span>
                            <span class="unit-check">{move || if is_selected() { "✓" } else { "" }}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="step-actions">
                <button class="secondary" on:click=move |_| navigate(Route::Dashboard)>"キャンセル"</button>
                <button disabled=move || !can_advance() on:click=move |_| store_advance(&store)>"次へ →"</button>
            </div>
        </div>
    }
}
