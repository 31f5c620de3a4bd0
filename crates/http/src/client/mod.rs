//! Backend API clients

pub mod error;
pub mod typed;
pub mod users;

pub use error::ClientError;
pub use typed::{AuthenticatedApiClient, TypedClientBuilder};

use reqwest::{Client, ClientBuilder};

const USER_AGENT: &str = concat!("ideaforge-client/", env!("CARGO_PKG_VERSION"));

/// Build the underlying reqwest client
fn build_http_client() -> Result<Client, ClientError> {
    Ok(ClientBuilder::new().user_agent(USER_AGENT).build()?)
}

/// Send a request and decode a JSON body, mapping error statuses
async fn execute_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}
