//! Login Page
//!
//! Provider buttons mint a local development session.

use leptos::prelude::*;
use tasche_core::Provider;

use crate::auth::use_auth;
use crate::routes::{navigate, Route};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="login-page">
            <div class="login-card card">
                <h1 class="login-title">"Tasche"</h1>
                <p class="muted">"毎週の目標と実績を、ユニット単位で。"</p>
                <div class="login-actions">
                    {[Provider::Google, Provider::Github].into_iter().map(|provider| view! {
                        <button
                            class="login-btn"
                            on:click=move |_| {
                                auth.login(provider);
                                navigate(Route::Dashboard);
                            }
                        >
                            {provider.login_label()}
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
