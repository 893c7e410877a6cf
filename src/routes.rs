//! Routes
//!
//! Page selection from the location path. Navigation is a full page load.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Goals,
    Tasks,
    Settings,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Dashboard,
            "/login" => Route::Login,
            "/goals" => Route::Goals,
            "/tasks" => Route::Tasks,
            "/settings" => Route::Settings,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard | Route::NotFound => "/",
            Route::Goals => "/goals",
            Route::Tasks => "/tasks",
            Route::Settings => "/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "ログイン",
            Route::Dashboard => "ダッシュボード",
            Route::Goals => "目標設定",
            Route::Tasks => "タスク",
            Route::Settings => "設定",
            Route::NotFound => "ページが見つかりません",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Dashboard)
}

pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(route.path()) {
            log::error!("[ROUTE] navigation to {} failed: {:?}", route.path(), e);
        }
    }
}
