//! Seams to the external identity client and the hosting page
//!
//! The identity provider protocol (login redirect, token issuance and token
//! renewal) lives entirely in the external client library. These traits only
//! describe the handful of calls the bootstrap and renewal code make on it.

use crate::error::CoreResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the identity client does when it is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnLoad {
    /// Redirect to the login page when there is no session
    #[default]
    LoginRequired,
    /// Only probe for an existing single sign-on session
    CheckSso,
}

/// Options passed to [`IdentityClient::init`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    pub on_load: OnLoad,
}

impl InitOptions {
    /// Initialization that requires an authenticated session to proceed
    pub fn login_required() -> Self {
        Self {
            on_load: OnLoad::LoginRequired,
        }
    }
}

/// The identity client the application authenticates through
///
/// Browser clients are single threaded, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait IdentityClient {
    /// Initialize the client; resolves `true` when a session is authenticated
    async fn init(&self, options: InitOptions) -> CoreResult<bool>;

    /// Current access token, if any
    fn access_token(&self) -> Option<String>;

    /// Current refresh token, if any
    fn refresh_token(&self) -> Option<String>;

    /// Renew the token if it expires within `min_validity_secs`.
    ///
    /// Resolves `true` when the token was actually rotated.
    async fn update_token(&self, min_validity_secs: u32) -> CoreResult<bool>;

    /// End the session with the identity provider
    async fn logout(&self) -> CoreResult<()>;
}

/// Control over the page hosting the application
pub trait PageControl {
    /// Force a full page reload
    fn reload(&self);
}
