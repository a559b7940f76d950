//! File-backed session store for native hosts.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;

use booknest_auth::{SessionKey, SessionStore, StoreError};

/// Session entries persisted as one JSON object on disk.
///
/// Entries are cached in memory and written through on every change, so a
/// restarted process picks up the last session. Clones share the cache.
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty session; an
    /// unreadable JSON body is discarded with a warning.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();

        let entries = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "discarding corrupt session file");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read session file at {:?}", path));
            }
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "session file opened");

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner { path, entries })),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `change` and write the result; the cache is restored if the
    /// write fails.
    fn update(
        &self,
        key: SessionKey,
        change: impl FnOnce(&mut BTreeMap<String, String>) -> Option<String>,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let previous = change(&mut inner.entries);

        if let Err(err) = write_atomically(&inner.path, &inner.entries) {
            match previous {
                Some(value) => inner.entries.insert(key.as_str().to_string(), value),
                None => inner.entries.remove(key.as_str()),
            };
            return Err(StoreError::Write {
                key: key.as_str(),
                reason: format!("{err:#}"),
            });
        }
        Ok(())
    }
}

fn write_atomically(path: &Path, entries: &BTreeMap<String, String>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create session directory at {:?}", parent))?;
    }

    let body = serde_json::to_vec_pretty(entries).context("failed to encode session")?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, body).with_context(|| format!("failed to write {:?}", tmp))?;
    std::fs::rename(&tmp, path).with_context(|| format!("failed to replace {:?}", path))?;
    Ok(())
}

impl SessionStore for FileStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.lock().entries.get(key.as_str()).cloned()
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        self.update(key, |entries| entries.insert(key.as_str().to_string(), value.to_string()))
    }

    fn remove(&self, key: SessionKey) -> Result<(), StoreError> {
        if self.lock().entries.contains_key(key.as_str()) {
            self.update(key, |entries| entries.remove(key.as_str()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booknest_auth::SessionManager;

    #[test]
    fn missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("session.json")).unwrap();
        assert_eq!(store.get(SessionKey::Token), None);
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/session.json");

        let store = FileStore::open(&path).unwrap();
        store.set(SessionKey::Token, "abc").unwrap();
        store.set(SessionKey::Role, "ADMIN").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(SessionKey::Token).as_deref(), Some("abc"));
        assert_eq!(reopened.get(SessionKey::Role).as_deref(), Some("ADMIN"));

        let on_disk: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk["token"], "abc");
    }

    #[test]
    fn remove_is_persisted_and_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set(SessionKey::Email, "a@b.com").unwrap();
        store.remove(SessionKey::Email).unwrap();
        store.remove(SessionKey::Email).unwrap();

        assert_eq!(FileStore::open(&path).unwrap().get(SessionKey::Email), None);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(SessionKey::Token), None);
        store.set(SessionKey::Token, "fresh").unwrap();
        assert_eq!(FileStore::open(&path).unwrap().get(SessionKey::Token).as_deref(), Some("fresh"));
    }

    #[test]
    fn failed_write_leaves_cache_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set(SessionKey::Token, "old").unwrap();

        // A directory where the temporary file goes makes every write fail.
        std::fs::create_dir(path.with_extension("json.tmp")).unwrap();

        let err = store.set(SessionKey::Token, "new").unwrap_err();
        assert!(matches!(err, StoreError::Write { key: "token", .. }));
        assert_eq!(store.get(SessionKey::Token).as_deref(), Some("old"));

        let err = store.set(SessionKey::Role, "USER").unwrap_err();
        assert!(matches!(err, StoreError::Write { key: "role", .. }));
        assert_eq!(store.get(SessionKey::Role), None);

        assert!(store.remove(SessionKey::Token).is_err());
        assert_eq!(store.get(SessionKey::Token).as_deref(), Some("old"));
        assert_eq!(FileStore::open(&path).unwrap().get(SessionKey::Token).as_deref(), Some("old"));
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        let err = FileStore::open(blocker.join("session.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read session file"));
    }

    #[test]
    fn backs_a_session_manager() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = SessionManager::new(FileStore::open(&path).unwrap());
        session.store().set(SessionKey::Token, "t").unwrap();
        session.store().set(SessionKey::Role, "USER").unwrap();
        session.clear_auth_session();

        let reopened = FileStore::open(&path).unwrap();
        for key in SessionKey::ALL {
            assert_eq!(reopened.get(key), None);
        }
    }
}
