use log::warn;
use web_sys::{Storage, Window};

use crate::error::StorageError;

/// Origin-scoped string key/value store. Every access may fail.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Failure policy for reads: a store that can't be read holds nothing.
pub fn read_or_absent<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!("{err}, treating as absent");
            None
        }
    }
}

/// Failure policy for writes: log and move on, the session keeps working.
pub fn write_best_effort<S: KeyValueStore + ?Sized>(store: &S, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        warn!("{err}, preference will not survive reload");
    }
}

pub fn remove_best_effort<S: KeyValueStore + ?Sized>(store: &S, key: &str) {
    if let Err(err) = store.remove(key) {
        warn!("{err}");
    }
}

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn from_window(window: &Window) -> Self {
        // Throws in some privacy modes instead of returning null
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            warn!("local storage unavailable, theme choices won't persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                message: format!("{:?}", err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", err),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Remove {
                key: key.to_string(),
                message: format!("{:?}", err),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    #[test]
    fn read_failure_reads_as_absent() {
        let store = MemoryStore::with(&[("preferred-theme", "dark")]);
        store.fail_all(true);
        assert_eq!(read_or_absent(&store, "preferred-theme"), None);

        store.fail_all(false);
        assert_eq!(
            read_or_absent(&store, "preferred-theme").as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn failed_write_is_skipped() {
        let store = MemoryStore::default();
        store.fail_all(true);
        write_best_effort(&store, "theme-banner-dismissed", "1");

        store.fail_all(false);
        assert_eq!(store.value("theme-banner-dismissed"), None);
    }

    #[test]
    fn remove_clears_key() {
        let store = MemoryStore::with(&[("preferred-theme", "light")]);
        remove_best_effort(&store, "preferred-theme");
        assert_eq!(store.value("preferred-theme"), None);
    }
}
