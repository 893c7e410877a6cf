//! Floating button that opens the goal wizard

use leptos::prelude::*;

use crate::routes::{navigate, Route};

#[component]
pub fn GoalSettingFab() -> impl IntoView {
    view! {
        <button class="fab" on:click=move |_| navigate(Route::Goals)>
            <span class="fab-icon">"+"</span>
            <span>"目標設定"</span>
        </button>
    }
}
