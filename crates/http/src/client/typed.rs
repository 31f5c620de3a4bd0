//! Client for endpoints that require the session's access token

use super::{ClientError, build_http_client, execute_request};
use reqwest::{Client, header};

/// Client attaching `Authorization: Bearer <token>` to every request
#[derive(Clone)]
pub struct AuthenticatedApiClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl AuthenticatedApiClient {
    /// Create a new authenticated client
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        TypedClientBuilder::new()
            .base_url(base_url)
            .access_token(access_token)
            .build()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the bearer token
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute_request(request).await
    }
}

/// Builder that refuses to produce a client without a base URL and token
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
}

impl TypedClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the access token sent as the bearer credential
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Build the authenticated client
    pub fn build(self) -> Result<AuthenticatedApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let access_token = self
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ClientError::Configuration("access token is required".into()))?;

        Ok(AuthenticatedApiClient {
            client: build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }
}
