//! Authenticated Page Shell
//!
//! Sidebar on the left, a header with the user and logout, and the page body.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::layout::Sidebar;
use crate::routes::{navigate, Route};

#[component]
pub fn AppLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = use_auth();
    let user_name = move || auth.user().map(|user| user.name).unwrap_or_default();

    let logout = move |_| {
        auth.logout();
        navigate(Route::Login);
    };

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <header class="app-header">
                    <h1 class="page-title">{title}</h1>
                    <div class="header-user">
                        <span class="user-name">{user_name}</span>
                        <button class="secondary" on:click=logout>"ログアウト"</button>
                    </div>
                </header>
                <main class="page-body">{children()}</main>
            </div>
        </div>
    }
}
