use crate::domain::model::{AuthResponse, Credentials, Location, Registration, User};
use crate::domain::ports::{AuthApi, LocationApi};
use crate::utils::error::{RentalError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper over the rental REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last segment unless the base ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|e| RentalError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| RentalError::ConfigError {
                message: format!("Cannot build URL for '{}': {}", path, e),
            })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        if status == StatusCode::UNAUTHORIZED {
            Err(RentalError::Unauthorized { message })
        } else {
            Err(RentalError::ApiStatusError {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Prefer the server's `message`/`error` field, fall back to the raw body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let url = self.endpoint("auth/login")?;
        tracing::debug!("Logging in as {} via {}", credentials.email, url);
        self.send_json(self.client.post(url).json(credentials)).await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        let url = self.endpoint("auth/register")?;
        tracing::debug!("Registering {} via {}", registration.email, url);
        self.send_json(self.client.post(url).json(registration)).await
    }

    async fn logout(&self, token: &str) -> Result<()> {
        let url = self.endpoint("auth/logout")?;
        self.send(self.client.post(url).bearer_auth(token)).await?;
        Ok(())
    }

    async fn profile(&self, token: &str) -> Result<User> {
        let url = self.endpoint("auth/profile")?;
        self.send_json(self.client.get(url).bearer_auth(token)).await
    }
}

#[async_trait]
impl LocationApi for ApiClient {
    async fn locations(&self) -> Result<Vec<Location>> {
        let url = self.endpoint("locations")?;
        tracing::debug!("Fetching locations from {}", url);
        self.send_json(self.client.get(url)).await
    }
}
