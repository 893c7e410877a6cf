//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use tasche_core::ApiConfig;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::routes::Route;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page picked from the location at mount
    pub route: Route,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(route: Route, config: ApiConfig) -> Self {
        Self {
            route,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Client carrying the configured base URL and the current bearer token
pub fn use_api() -> ApiClient {
    let ctx = use_app_context();
    let auth = use_auth();
    ApiClient::new(ctx.config(), auth.bearer_header())
}

/// Cleared when the owning component is torn down; async results check it
/// before touching state.
#[derive(Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self(alive)
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Guard of the nearest component that shared one through `provide_context`
pub fn use_mount_guard() -> MountGuard {
    expect_context::<MountGuard>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_trips_when_owner_is_cleaned_up() {
        let owner = Owner::new();
        let guard = owner.with(MountGuard::new);
        assert!(guard.is_mounted());
        owner.cleanup();
        assert!(!guard.is_mounted());
    }

    #[test]
    fn test_shared_guard_survives_child_teardown() {
        let wizard = Owner::new();
        let guard = wizard.with(|| {
            let guard = MountGuard::new();
            provide_context(guard.clone());
            guard
        });

        // A step mounts under the wizard, picks up the shared guard and is torn down
        let step = wizard.with(Owner::new);
        let step_guard = step.with(use_mount_guard);
        step.cleanup();

        assert!(guard.is_mounted());
        assert!(step_guard.is_mounted());

        wizard.cleanup();
        assert!(!step_guard.is_mounted());
    }
}
