//! Bindings to the keycloak-js adapter
//!
//! The page loads `keycloak.js`, which defines a global `Keycloak` class.
//! [`KeycloakClient`] wraps one instance and implements [`IdentityClient`].

use crate::error::describe_js_error;
use async_trait::async_trait;
use ideaforge_core::config::IdentityConfig;
use ideaforge_core::{CoreError, CoreResult, IdentityClient, InitOptions};
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Keycloak)]
    type JsKeycloak;

    #[wasm_bindgen(constructor, js_class = "Keycloak", catch)]
    fn new(config: &JsValue) -> Result<JsKeycloak, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn init(this: &JsKeycloak, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn token(this: &JsKeycloak) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = refreshToken)]
    fn refresh_token(this: &JsKeycloak) -> Option<String>;

    #[wasm_bindgen(method, catch, js_name = updateToken)]
    fn update_token(this: &JsKeycloak, min_validity: u32) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn logout(this: &JsKeycloak) -> Result<Promise, JsValue>;
}

/// Constructor argument of the adapter
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdapterConfig<'a> {
    url: &'a str,
    realm: &'a str,
    client_id: &'a str,
}

/// The identity client backed by keycloak-js
pub struct KeycloakClient {
    inner: JsKeycloak,
}

impl KeycloakClient {
    /// Construct the adapter from the identity configuration
    pub fn new(config: &IdentityConfig) -> CoreResult<Self> {
        let adapter_config = AdapterConfig {
            url: &config.url,
            realm: &config.realm,
            client_id: &config.client_id,
        };
        let value = serde_wasm_bindgen::to_value(&adapter_config)
            .map_err(|e| CoreError::internal_error(e.to_string()))?;
        let inner = JsKeycloak::new(&value).map_err(|e| identity_error("Keycloak unavailable", &e))?;

        Ok(Self { inner })
    }
}

fn identity_error(action: &str, value: &JsValue) -> CoreError {
    CoreError::identity(format!("{action}: {}", describe_js_error(value)))
}

/// Await an adapter promise that resolves to a boolean
async fn resolve_bool(promise: Result<Promise, JsValue>, action: &str) -> CoreResult<bool> {
    let promise = promise.map_err(|e| identity_error(action, &e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| identity_error(action, &e))?;
    Ok(value.as_bool().unwrap_or(false))
}

#[async_trait(?Send)]
impl IdentityClient for KeycloakClient {
    async fn init(&self, options: InitOptions) -> CoreResult<bool> {
        let options = serde_wasm_bindgen::to_value(&options)
            .map_err(|e| CoreError::internal_error(e.to_string()))?;
        resolve_bool(self.inner.init(&options), "Failed to initialize Keycloak").await
    }

    fn access_token(&self) -> Option<String> {
        self.inner.token()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.refresh_token()
    }

    async fn update_token(&self, min_validity_secs: u32) -> CoreResult<bool> {
        resolve_bool(
            self.inner.update_token(min_validity_secs),
            "Failed to refresh token",
        )
        .await
    }

    async fn logout(&self) -> CoreResult<()> {
        resolve_bool(self.inner.logout(), "Failed to log out").await?;
        Ok(())
    }
}
