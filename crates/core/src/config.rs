//! Client configuration
//!
//! Settings are layered with the `config` crate: compiled-in defaults first,
//! then values captured from the build environment. The browser has no
//! process environment, so `IDEAFORGE_*` variables are read with
//! `option_env!` when the frontend is compiled.

use crate::error::CoreResult;
use crate::storage::StorageKeys;
use crate::validation::{ValidateConfig, validators};
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default identity provider URL (local development)
pub const DEFAULT_IDENTITY_URL: &str = "http://localhost:8080";

/// Default backend API base URL (local development)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

/// Main client configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Identity provider configuration
    pub identity: IdentityConfig,

    /// Session persistence and renewal configuration
    pub session: SessionConfig,

    /// Backend API configuration
    pub api: ApiConfig,
}

/// Identity provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the identity provider
    pub url: String,

    /// Realm the application authenticates against
    pub realm: String,

    /// Public client identifier
    pub client_id: String,
}

/// Session persistence and renewal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Period of the renewal task in seconds
    pub refresh_interval_secs: u64,

    /// Look-ahead window passed to token renewal, in seconds
    pub min_validity_secs: u32,

    /// Storage keys for the persisted session
    pub keys: StorageKeys,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API
    pub base_url: String,

    /// Fetch and persist the user details right after bootstrap
    pub fetch_user_details: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_IDENTITY_URL.to_string(),
            realm: String::new(),
            client_id: String::new(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 60,
            min_validity_secs: 70,
            keys: StorageKeys::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            fetch_user_details: true,
        }
    }
}

impl SessionConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// Values captured from the build environment, keyed by configuration path
pub fn build_env_overrides() -> [(&'static str, Option<&'static str>); 4] {
    [
        ("identity.url", option_env!("IDEAFORGE_KEYCLOAK_URL")),
        ("identity.realm", option_env!("IDEAFORGE_KEYCLOAK_REALM")),
        ("identity.client_id", option_env!("IDEAFORGE_KEYCLOAK_CLIENT_ID")),
        ("api.base_url", option_env!("IDEAFORGE_API_BASE_URL")),
    ]
}

impl PortalConfig {
    /// Load configuration with defaults and build-time environment values
    ///
    /// # Errors
    ///
    /// Returns an error if the layered values cannot be deserialized or fail validation
    pub fn load() -> CoreResult<Self> {
        Self::from_overrides(&build_env_overrides())
    }

    /// Load configuration with defaults and explicit overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the layered values cannot be deserialized or fail validation
    pub fn from_overrides(overrides: &[(&str, Option<&str>)]) -> CoreResult<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("identity.url", defaults.identity.url)?
            .set_default("identity.realm", defaults.identity.realm)?
            .set_default("identity.client_id", defaults.identity.client_id)?
            .set_default(
                "session.refresh_interval_secs",
                defaults.session.refresh_interval_secs,
            )?
            .set_default("session.min_validity_secs", defaults.session.min_validity_secs)?
            .set_default("session.keys.access_token", defaults.session.keys.access_token)?
            .set_default("session.keys.refresh_token", defaults.session.keys.refresh_token)?
            .set_default("session.keys.user_details", defaults.session.keys.user_details)?
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.fetch_user_details", defaults.api.fetch_user_details)?;

        for (key, value) in overrides {
            builder = builder.set_override_option(*key, value.map(str::to_string))?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl ValidateConfig for PortalConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validators::validate_http_url(&self.identity.url, "identity.url")?;
        validators::validate_not_empty(&self.identity.realm, "identity.realm")?;
        validators::validate_not_empty(&self.identity.client_id, "identity.client_id")?;
        validators::validate_http_url(&self.api.base_url, "api.base_url")?;
        validators::validate_range(
            self.session.refresh_interval_secs,
            1,
            3600,
            "session.refresh_interval_secs",
        )?;
        validators::validate_not_empty(&self.session.keys.access_token, "session.keys.access_token")?;
        validators::validate_not_empty(
            &self.session.keys.refresh_token,
            "session.keys.refresh_token",
        )?;
        validators::validate_not_empty(&self.session.keys.user_details, "session.keys.user_details")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn realm_and_client() -> Vec<(&'static str, Option<&'static str>)> {
        vec![
            ("identity.realm", Some("ideas")),
            ("identity.client_id", Some("ideaforge-web")),
        ]
    }

    #[test]
    fn test_defaults() {
        let config = PortalConfig::from_overrides(&realm_and_client()).unwrap();
        assert_eq!(config.identity.url, "http://localhost:8080");
        assert_eq!(config.identity.realm, "ideas");
        assert_eq!(config.identity.client_id, "ideaforge-web");
        assert_eq!(config.session.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.session.min_validity_secs, 70);
        assert_eq!(config.session.keys, StorageKeys::default());
        assert_eq!(config.api.base_url, "http://localhost:8081");
        assert!(config.api.fetch_user_details);
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let mut overrides = realm_and_client();
        overrides.push(("identity.url", Some("https://sso.example.com")));
        overrides.push(("api.base_url", None));

        let config = PortalConfig::from_overrides(&overrides).unwrap();
        assert_eq!(config.identity.url, "https://sso.example.com");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_missing_realm_is_rejected() {
        let err = PortalConfig::from_overrides(&[("identity.client_id", Some("web"))]).unwrap_err();
        match err {
            CoreError::InvalidConfig { message } => assert!(message.contains("identity.realm")),
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_identity_url_is_rejected() {
        let mut overrides = realm_and_client();
        overrides.push(("identity.url", Some("localhost:8080/auth")));
        assert!(PortalConfig::from_overrides(&overrides).is_err());
    }
}
