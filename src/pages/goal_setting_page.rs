//! Goal Setting Page

use leptos::prelude::*;

use crate::components::goals::GoalWizard;

#[component]
pub fn GoalSettingPage() -> impl IntoView {
    view! {
        <div class="goal-setting-page">
            <p class="muted">"今週のユニット時間・タスク・曜日ごとの目標を4ステップで設定します。"</p>
            <GoalWizard />
        </div>
    }
}
