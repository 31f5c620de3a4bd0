//! Per-origin key/value persistence for session tokens

use crate::error::CoreResult;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// String key/value store with browser `localStorage` semantics
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory store used by tests and native tooling
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Number of `set` and `remove` calls observed so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.writes.set(self.writes.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Fixed storage keys for the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub access_token: String,
    pub refresh_token: String,
    pub user_details: String,
}

impl StorageKeys {
    pub const ACCESS_TOKEN: &'static str = "ideaforge-token";
    pub const REFRESH_TOKEN: &'static str = "ideaforge-refresh-token";
    pub const USER_DETAILS: &'static str = "user-details";
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            access_token: Self::ACCESS_TOKEN.to_string(),
            refresh_token: Self::REFRESH_TOKEN.to_string(),
            user_details: Self::USER_DETAILS.to_string(),
        }
    }
}

/// A key/value store bound to the session keys
#[derive(Clone)]
pub struct SessionStore {
    store: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl SessionStore {
    pub fn new(store: Rc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Write both tokens of a freshly established session
    pub fn persist(&self, session: &Session) -> CoreResult<()> {
        self.store.set(&self.keys.access_token, &session.access_token)?;
        self.store.set(&self.keys.refresh_token, &session.refresh_token)
    }

    /// Replace the access token after a rotation; the refresh token is untouched
    pub fn update_access_token(&self, token: &str) -> CoreResult<()> {
        self.store.set(&self.keys.access_token, token)
    }

    /// Persist the backend's `user_details` field.
    ///
    /// JSON strings are stored verbatim, anything else as its JSON text.
    pub fn store_user_details(&self, details: &serde_json::Value) -> CoreResult<()> {
        let value = match details {
            serde_json::Value::String(raw) => raw.clone(),
            other => serde_json::to_string(other)?,
        };
        self.store.set(&self.keys.user_details, &value)
    }

    pub fn user_details(&self) -> CoreResult<Option<String>> {
        self.store.get(&self.keys.user_details)
    }

    /// Load the persisted session, if both tokens are present
    pub fn load(&self) -> CoreResult<Option<Session>> {
        let access_token = self.store.get(&self.keys.access_token)?;
        let refresh_token = self.store.get(&self.keys.refresh_token)?;
        Ok(access_token
            .zip(refresh_token)
            .map(|(access_token, refresh_token)| Session::new(access_token, refresh_token)))
    }

    /// Remove every session key
    pub fn clear(&self) -> CoreResult<()> {
        self.store.remove(&self.keys.access_token)?;
        self.store.remove(&self.keys.refresh_token)?;
        self.store.remove(&self.keys.user_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session_store() -> (Rc<MemoryStore>, SessionStore) {
        let memory = Rc::new(MemoryStore::new());
        let store = SessionStore::new(memory.clone(), StorageKeys::default());
        (memory, store)
    }

    #[test]
    fn test_persist_writes_both_tokens() {
        let (memory, store) = session_store();
        store
            .persist(&Session::new("access-1", "refresh-1"))
            .unwrap();

        assert_eq!(
            memory.get(StorageKeys::ACCESS_TOKEN).unwrap().as_deref(),
            Some("access-1")
        );
        assert_eq!(
            memory.get(StorageKeys::REFRESH_TOKEN).unwrap().as_deref(),
            Some("refresh-1")
        );
        assert_eq!(memory.write_count(), 2);
    }

    #[test]
    fn test_update_access_token_keeps_refresh_token() {
        let (memory, store) = session_store();
        store
            .persist(&Session::new("access-1", "refresh-1"))
            .unwrap();
        store.update_access_token("access-2").unwrap();

        let session = store.load().unwrap().unwrap();
        assert_eq!(session.access_token, "access-2");
        assert_eq!(session.refresh_token, "refresh-1");
        assert_eq!(memory.write_count(), 3);
    }

    #[test]
    fn test_load_requires_both_tokens() {
        let (memory, store) = session_store();
        assert!(store.load().unwrap().is_none());

        memory.set(StorageKeys::ACCESS_TOKEN, "access-only").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_user_details_string_stored_verbatim() {
        let (_memory, store) = session_store();
        store.store_user_details(&json!("eyJhbGciOi")).unwrap();
        assert_eq!(store.user_details().unwrap().as_deref(), Some("eyJhbGciOi"));
    }

    #[test]
    fn test_user_details_object_stored_as_json() {
        let (_memory, store) = session_store();
        store
            .store_user_details(&json!({"id": 7, "name": "Ada"}))
            .unwrap();
        assert_eq!(
            store.user_details().unwrap().as_deref(),
            Some(r#"{"id":7,"name":"Ada"}"#)
        );
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let (memory, store) = session_store();
        store
            .persist(&Session::new("access-1", "refresh-1"))
            .unwrap();
        store.store_user_details(&json!("details")).unwrap();
        store.clear().unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_memory_store_conformance() {
        crate::tests::StoreTestSuite::new(MemoryStore::new())
            .run_all_tests()
            .unwrap();
    }
}
