//! Settings Page

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::context::use_app_context;
use crate::routes::{navigate, Route};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let api_base = use_app_context().config().base_url().to_string();

    let user = move || auth.user();

    view! {
        <div class="settings-page">
            <section class="card">
                <h3 class="card-title">"アカウント"</h3>
                {move || match user() {
                    Some(user) => view! {
                        <dl class="settings-list">
                            <dt>"ユーザー"</dt>
                            <dd>{user.name}</dd>
                            <dt>"ログイン方法"</dt>
                            <dd>{user.provider.as_str()}</dd>
                        </dl>
                    }.into_any(),
                    None => view! { <p class="muted">"ログインしていません。"</p> }.into_any(),
                }}
                <button
                    class="secondary"
                    on:click=move |_| {
                        auth.logout();
                        navigate(Route::Login);
                    }
                >
                    "ログアウト"
                </button>
            </section>

            <section class="card">
                <h3 class="card-title">"接続先"</h3>
                <p class="muted">"API: " <code>{api_base}</code></p>
            </section>
        </div>
    }
}
