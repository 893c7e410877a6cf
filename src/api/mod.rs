//! API Client
//!
//! Fetch wrappers for the Tasche REST API, organized by domain.

mod dashboard;
mod goals;
mod tasks;

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tasche_core::{decode_envelope, ApiConfig, ApiError, Endpoint, Method};

#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    bearer: Option<String>,
}

fn map_network_error(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

impl ApiClient {
    pub fn new(config: ApiConfig, bearer: Option<String>) -> Self {
        Self { config, bearer }
    }

    fn builder(&self, endpoint: &Endpoint<'_>) -> RequestBuilder {
        let url = self.config.url(&endpoint.path());
        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json")
        .credentials(web_sys::RequestCredentials::Include);

        match &self.bearer {
            Some(bearer) => builder.header("Authorization", bearer),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>, body: Option<String>) -> Result<T, ApiError> {
        let builder = self.builder(&endpoint);
        let response = match body {
            Some(body) => {
                let request = builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(map_network_error)?;
                request.send().await
            }
            None => builder.send().await,
        }
        .map_err(map_network_error)?;

        let status = response.status();
        let raw = response.text().await.map_err(map_network_error)?;
        let result = decode_envelope(status, &raw);

        if let Err(e) = &result {
            log::warn!("[API] {} {} failed: {}", endpoint.method().as_str(), endpoint.path(), e);
            if e.is_unauthorized() {
                // TODO: call /auth/refresh and replay once the refresh-cookie flow exists on the backend
                log::warn!("[API] access token rejected; credential refresh is not available");
            }
        }
        result
    }

    async fn send_json<T: DeserializeOwned, B: Serialize>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request body: {}", e)))?;
        self.send(endpoint, Some(body)).await
    }
}
