//! Sidebar Navigation

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

const MAIN_NAV: [(Route, &str); 4] = [
    (Route::Dashboard, "🏠"),
    (Route::Goals, "🎯"),
    (Route::Tasks, "📋"),
    (Route::Settings, "⚙"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let active = use_app_context().route;

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Tasche"</div>
            <nav class="sidebar-nav">
                <ul>
                    {MAIN_NAV.iter().map(|(route, icon)| {
                        let class = if *route == active { "nav-link active" } else { "nav-link" };
                        view! {
                            <li>
                                <a href=route.path() class=class>
                                    <span class="nav-icon">{*icon}</span>
                                    {route.title()}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
