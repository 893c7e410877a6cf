//! Authentication Context
//!
//! Owns the session for the whole app. Init restores a token left in session
//! storage by an earlier page load; logout clears both memory and storage.

use leptos::prelude::*;
use tasche_core::session::SESSION_STORAGE_KEY;
use tasche_core::{Provider, Session, User};

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl AuthContext {
    pub fn restore() -> Self {
        let stored = session_storage().and_then(|storage| storage.get_item(SESSION_STORAGE_KEY).ok().flatten());
        Self {
            session: RwSignal::new(Session::restore(stored)),
        }
    }

    pub fn login(&self, provider: Provider) {
        let issued_at = js_sys::Date::now() as u64;
        let Some(token) = self.session.try_update(|session| session.login(provider, issued_at)) else {
            return;
        };
        if let Some(storage) = session_storage() {
            if storage.set_item(SESSION_STORAGE_KEY, &token).is_err() {
                log::warn!("[AUTH] could not mirror token to session storage");
            }
        }
    }

    pub fn logout(&self) {
        self.session.update(|session| session.logout());
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|session| session.is_authenticated())
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|session| session.user().cloned())
    }

    /// Read without tracking; requests are not reactive
    pub fn bearer_header(&self) -> Option<String> {
        self.session.with_untracked(|session| session.bearer_header())
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
