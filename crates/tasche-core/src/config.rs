//! Client Configuration

/// Used when `TASCHE_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// Read the base URL baked in by the build environment
    pub fn from_build_env() -> Self {
        match option_env!("TASCHE_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/tasks"), "/api/tasks");

        let config = ApiConfig::new("https://tasche.example.com/api/");
        assert_eq!(config.base_url(), "https://tasche.example.com/api");
        assert_eq!(config.url("dashboard"), "https://tasche.example.com/api/dashboard");
    }
}
