//! Session State
//!
//! In-memory access token and signed-in user. The token exchange itself is a
//! stub: logging in mints a local development token.

use serde::{Deserialize, Serialize};

/// Key under which the token is mirrored to tab-scoped session storage
pub const SESSION_STORAGE_KEY: &str = "tasche_access_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Github,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Github => "github",
        }
    }

    pub fn login_label(&self) -> &'static str {
        match self {
            Provider::Google => "Googleでログイン（仮）",
            Provider::Github => "GitHubでログイン（仮）",
        }
    }

    /// Recover the provider from a development token
    fn from_token(token: &str) -> Option<Self> {
        let rest = token.strip_prefix("dummy-")?;
        [Provider::Google, Provider::Github]
            .into_iter()
            .find(|provider| rest.starts_with(provider.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub provider: Provider,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Init: rebuild the session from a token found in session storage
    pub fn restore(stored_token: Option<String>) -> Self {
        match stored_token.filter(|token| !token.trim().is_empty()) {
            Some(token) => {
                let provider = Provider::from_token(&token).unwrap_or(Provider::Google);
                Self {
                    access_token: Some(token),
                    user: Some(dev_user(provider)),
                }
            }
            None => Self::default(),
        }
    }

    /// Returns the new token so the caller can mirror it to storage
    pub fn login(&mut self, provider: Provider, issued_at_ms: u64) -> String {
        let token = format!("dummy-{}-{}", provider.as_str(), issued_at_ms);
        self.access_token = Some(token.clone());
        self.user = Some(dev_user(provider));
        log::info!("[AUTH] signed in with {}", provider.as_str());
        token
    }

    /// Teardown: forget the token and the user
    pub fn logout(&mut self) {
        self.access_token = None;
        self.user = None;
        log::info!("[AUTH] signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn bearer_header(&self) -> Option<String> {
        self.access_token.as_ref().map(|token| format!("Bearer {}", token))
    }
}

fn dev_user(provider: Provider) -> User {
    User {
        name: "Dev User".to_string(),
        provider,
    }
}
