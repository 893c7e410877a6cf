//! Step 3: Weekly Targets

use leptos::prelude::*;

use crate::components::goals::WeeklyTargetGrid;
use crate::store::{store_advance, store_back, use_goal_store, GoalPageStateStoreFields};

#[component]
pub fn Step3WeeklyTargets() -> impl IntoView {
    let store = use_goal_store();
    let unit_title = move || {
        store
            .wizard()
            .with(|wizard| wizard.unit_duration().map(|unit| unit.title()).unwrap_or_default())
    };

    view! {
        <div class="step">
            <div class="step-header">
                <h2>"曜日ごとの目標ユニット数を決めましょう"</h2>
                <p class="muted">"1ユニット = " {unit_title} " ・ 0.5刻みで入力できます。"</p>
            </div>

            <WeeklyTargetGrid />

            <div class="step-actions">
                <button class="secondary" on:click=move |_| store_back(&store)>"← 戻る"</button>
                <button on:click=move |_| store_advance(&store)>"確認へ →"</button>
            </div>
        </div>
    }
}
