//! Test harness for KeyValueStore implementations
//!
//! The browser storage adapter and the in-memory store must behave the same
//! way; any implementation can run this suite to verify it.

use crate::error::CoreResult;
use crate::session::Session;
use crate::storage::{KeyValueStore, SessionStore, StorageKeys};
use std::rc::Rc;

/// Test suite for KeyValueStore implementations
pub struct StoreTestSuite<S: KeyValueStore + 'static> {
    store: Rc<S>,
}

impl<S: KeyValueStore + 'static> StoreTestSuite<S> {
    /// Create a new test suite with the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// Run all tests
    pub fn run_all_tests(&self) -> CoreResult<()> {
        self.test_key_operations()?;
        self.test_session_round_trip()?;
        Ok(())
    }

    /// Test get/set/remove semantics
    pub fn test_key_operations(&self) -> CoreResult<()> {
        let key = "store-suite-key";

        self.store.remove(key)?;
        assert!(self.store.get(key)?.is_none(), "Key should start absent");

        self.store.set(key, "first")?;
        assert_eq!(self.store.get(key)?.as_deref(), Some("first"));

        // Set replaces
        self.store.set(key, "second")?;
        assert_eq!(self.store.get(key)?.as_deref(), Some("second"));

        // Empty values are values, not absence
        self.store.set(key, "")?;
        assert_eq!(self.store.get(key)?.as_deref(), Some(""));

        self.store.remove(key)?;
        assert!(self.store.get(key)?.is_none(), "Key should be removed");

        // Removing twice is fine
        self.store.remove(key)?;

        Ok(())
    }

    /// Test the session keys through SessionStore
    pub fn test_session_round_trip(&self) -> CoreResult<()> {
        let keys = StorageKeys {
            access_token: "store-suite-access".to_string(),
            refresh_token: "store-suite-refresh".to_string(),
            user_details: "store-suite-details".to_string(),
        };
        let session_store = SessionStore::new(self.store.clone(), keys);

        session_store.persist(&Session::new("access", "refresh"))?;
        session_store.update_access_token("rotated")?;
        assert_eq!(
            session_store.load()?,
            Some(Session::new("rotated", "refresh"))
        );

        session_store.clear()?;
        assert!(session_store.load()?.is_none(), "Session should be cleared");

        Ok(())
    }
}
