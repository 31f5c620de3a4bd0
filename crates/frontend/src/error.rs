//! Frontend error types

use ideaforge_core::CoreError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Browser API unavailable: {0}")]
    Browser(String),

    #[error("Logging already initialized")]
    Logging,
}

pub type FrontendResult<T> = Result<T, FrontendError>;

/// Render a rejected promise or thrown JS value as text
pub fn describe_js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
