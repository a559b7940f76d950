//! Per-origin `localStorage` as the session backend.

use booknest_auth::{SessionKey, SessionStore, StoreError};

/// Handle to `window.localStorage`. Every handle sees the same entries.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: SessionKey) -> Option<String> {
        Self::storage().ok()?.get_item(key.as_str()).ok().flatten()
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key.as_str(), value)
            .map_err(|err| StoreError::Write {
                key: key.as_str(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: SessionKey) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key.as_str())
            .map_err(|err| StoreError::Write {
                key: key.as_str(),
                reason: format!("{err:?}"),
            })
    }
}
