//! Admin session
//!
//! The signed-in admin lives in a single persisted slot. `SessionService`
//! reads and writes it through an injected `SessionStore`, so the backing
//! storage can be a file, memory, or nothing at all.

pub mod file_store;

pub use file_store::FileSessionStore;

use crate::config::AUTH_STORAGE_KEY;
use crate::error::{AppError, Result};
use crate::models::Admin;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key/value slot storage for client session state
pub trait SessionStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store, used in tests and for throwaway sessions
#[derive(Default)]
pub struct MemorySessionStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|_| AppError::Session("session store lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Store for environments without persistent storage: nothing is ever kept
pub struct UnavailableSessionStore;

impl SessionStore for UnavailableSessionStore {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// Session state: Anonymous until an admin is stored, Authenticated after
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// The stored admin, or `None` when absent, unreadable or undecodable
    pub fn stored_admin(&self) -> Option<Admin> {
        let stored = match self.store.read(AUTH_STORAGE_KEY) {
            Ok(stored) => stored?,
            Err(e) => {
                tracing::warn!("Failed to read stored admin: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Admin>(&stored) {
            Ok(admin) => {
                tracing::debug!(admin_id = %admin.id, "Retrieved stored admin");
                Some(admin)
            }
            Err(e) => {
                tracing::warn!("Error parsing stored admin: {}", e);
                None
            }
        }
    }

    pub fn set_stored_admin(&self, admin: &Admin) -> Result<()> {
        tracing::info!(admin_id = %admin.id, email = %admin.email, "Storing admin session");
        let encoded = serde_json::to_string(admin)?;
        self.store.write(AUTH_STORAGE_KEY, &encoded)
    }

    pub fn clear_stored_admin(&self) -> Result<()> {
        tracing::info!("Clearing stored admin session");
        self.store.remove(AUTH_STORAGE_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.stored_admin().is_some()
    }
}
