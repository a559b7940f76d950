//! Persistent key-value storage behind the session.
//!
//! The session lives in four string entries. Where they are kept is up to the
//! backend: browser `localStorage`, a file on disk, or memory in tests.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

/// The persisted session entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SessionKey {
    Token,
    Role,
    UserId,
    Email,
}

impl SessionKey {
    pub const ALL: [SessionKey; 4] = [
        SessionKey::Token,
        SessionKey::Role,
        SessionKey::UserId,
        SessionKey::Email,
    ];

    /// Storage key name; stable across releases.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::Token => "token",
            SessionKey::Role => "role",
            SessionKey::UserId => "user_id",
            SessionKey::Email => "email",
        }
    }
}

impl core::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write '{key}': {reason}")]
    Write { key: &'static str, reason: String },
}

/// Backend for the persisted session.
///
/// Calls are individually atomic; nothing makes a sequence of calls atomic.
pub trait SessionStore {
    fn get(&self, key: SessionKey) -> Option<String>;

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: SessionKey) -> Result<(), StoreError>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self, key: SessionKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: SessionKey) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: SessionKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: SessionKey) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<SessionKey, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), StoreError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_match_persisted_layout() {
        let names: Vec<&str> = SessionKey::ALL.iter().map(SessionKey::as_str).collect();
        assert_eq!(names, ["token", "role", "user_id", "email"]);
    }

    #[test]
    fn clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();

        a.set(SessionKey::Token, "t").unwrap();
        assert_eq!(b.get(SessionKey::Token).as_deref(), Some("t"));

        b.remove(SessionKey::Token).unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn removing_a_missing_key_is_fine() {
        let store = MemoryStore::new();
        store.remove(SessionKey::Email).unwrap();
        assert_eq!(store.get(SessionKey::Email), None);
    }

    #[test]
    fn shared_handles_forward_to_the_backend() {
        let store = Arc::new(MemoryStore::new());
        let by_ref: &dyn SessionStore = &*store;

        by_ref.set(SessionKey::Role, "ADMIN").unwrap();
        assert_eq!(store.get(SessionKey::Role).as_deref(), Some("ADMIN"));
        assert_eq!(SessionStore::get(&store, SessionKey::Role).as_deref(), Some("ADMIN"));
    }
}
