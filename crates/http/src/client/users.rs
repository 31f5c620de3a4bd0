//! User API client methods

use super::{AuthenticatedApiClient, ClientError};
use crate::types::UserDetailsResponse;
use ideaforge_core::SessionStore;
use reqwest::Method;

/// Path of the resource that issues the user details token
pub const JWT_TOKEN_PATH: &str = "/users/jwtToken";

impl AuthenticatedApiClient {
    /// Fetch the user details for the current session
    pub async fn fetch_user_details(&self) -> Result<UserDetailsResponse, ClientError> {
        tracing::debug!(path = JWT_TOKEN_PATH, "fetching user details");
        let request = self.request(Method::GET, JWT_TOKEN_PATH);
        self.execute(request).await
    }

    /// Fetch the user details and persist them under the session's details key.
    ///
    /// Storage is only touched once a complete response has been decoded.
    pub async fn load_user_details(&self, store: &SessionStore) -> Result<(), ClientError> {
        let response = self.fetch_user_details().await?;
        store.store_user_details(&response.user_details)?;
        Ok(())
    }
}
