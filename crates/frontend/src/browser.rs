//! Browser-backed storage and page control

use crate::error::{FrontendError, FrontendResult, describe_js_error};
use ideaforge_core::{CoreError, CoreResult, KeyValueStore, PageControl};
use web_sys::Storage;

/// `localStorage` as a [`KeyValueStore`]
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// Open the window's `localStorage`
    pub fn local() -> FrontendResult<Self> {
        let storage = gloo::utils::window()
            .local_storage()
            .map_err(|e| FrontendError::Browser(describe_js_error(&e)))?
            .ok_or_else(|| FrontendError::Browser("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| CoreError::storage(format!("read {key}: {}", describe_js_error(&e))))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("write {key}: {}", describe_js_error(&e))))
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| CoreError::storage(format!("remove {key}: {}", describe_js_error(&e))))
    }
}

/// The current document
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPage;

impl PageControl for BrowserPage {
    fn reload(&self) {
        if let Err(error) = gloo::utils::window().location().reload() {
            tracing::error!(error = %describe_js_error(&error), "page reload failed");
        }
    }
}
