//! Tasche Frontend App
//!
//! Provides session and config context, gates authenticated routes and picks
//! the page for the current location.

use leptos::prelude::*;
use tasche_core::ApiConfig;

use crate::auth::AuthContext;
use crate::components::layout::AppLayout;
use crate::context::AppContext;
use crate::pages::{DashboardPage, GoalSettingPage, LoginPage, SettingsPage, TasksPage};
use crate::routes::{current_route, navigate, Route};

fn set_document_title(route: Route) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(&format!("{} | Tasche", route.title()));
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::restore();
    provide_context(auth);

    let route = current_route();
    let config = ApiConfig::from_build_env();
    log::info!("[APP] route={:?} api={}", route, config.base_url());
    provide_context(AppContext::new(route, config));
    set_document_title(route);

    let authenticated = auth.is_authenticated();
    if route.requires_auth() && !authenticated {
        log::info!("[APP] no session, redirecting to login");
        navigate(Route::Login);
        return view! { <p class="muted">"リダイレクト中..."</p> }.into_any();
    }
    if route == Route::Login && authenticated {
        navigate(Route::Dashboard);
        return view! { <p class="muted">"リダイレクト中..."</p> }.into_any();
    }

    match route {
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Dashboard => view! { <AppLayout title=route.title()><DashboardPage /></AppLayout> }.into_any(),
        Route::Goals => view! { <AppLayout title=route.title()><GoalSettingPage /></AppLayout> }.into_any(),
        Route::Tasks => view! { <AppLayout title=route.title()><TasksPage /></AppLayout> }.into_any(),
        Route::Settings => view! { <AppLayout title=route.title()><SettingsPage /></AppLayout> }.into_any(),
        Route::NotFound => view! {
            <AppLayout title=route.title()>
                <div class="empty-state card">
                    <p>"お探しのページは見つかりませんでした。"</p>
                    <a href=Route::Dashboard.path()>"ダッシュボードへ戻る"</a>
                </div>
            </AppLayout>
        }
        .into_any(),
    }
}
