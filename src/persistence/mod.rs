//! Save/load of the application state
//!
//! Features:
//! - `Storage`: raw text key-value backend (LocalStorage on web)
//! - `StateStore`: typed load/save of `AppState` on top of a backend
//! - Last write wins; no versioning or cross-tab coordination

mod memory;

pub use memory::MemoryStorage;

use crate::error::ShimError;
use crate::state::AppState;

/// Text key-value storage backend
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ShimError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ShimError>;
}

/// Typed application state store
#[derive(Debug)]
pub struct StateStore<S> {
    storage: S,
}

impl<S: Storage> StateStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the state under `key`
    ///
    /// Returns `Ok(None)` when the record is absent or fails validation; a
    /// rejected record is logged. Backend errors are returned.
    pub fn load(&self, key: &str) -> Result<Option<AppState>, ShimError> {
        let Some(text) = self.storage.get_item(key)? else {
            return Ok(None);
        };
        match AppState::decode(&text) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                log::warn!("Ignoring stored `{key}`: {e}");
                Ok(None)
            }
        }
    }

    pub fn load_or_default(&self, key: &str) -> Result<AppState, ShimError> {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Encode and write `state` under `key`, replacing any previous value
    pub fn save(&mut self, key: &str, state: &AppState) -> Result<(), ShimError> {
        let text = state.encode()?;
        self.storage.set_item(key, &text)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent() {
        let store = StateStore::new(MemoryStorage::new());
        assert_eq!(store.load("globals").unwrap(), None);
        assert_eq!(store.load_or_default("globals").unwrap(), AppState::default());
    }

    #[test]
    fn test_load_malformed_is_absent() {
        let store = StateStore::new(MemoryStorage::with_item("globals", "{oops"));
        assert_eq!(store.load("globals").unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = StateStore::new(MemoryStorage::new());
        let state = AppState::new("abc", "bob");
        store.save("globals", &state).unwrap();
        assert_eq!(
            store.storage().get("globals"),
            Some(r#"{"apiToken":"abc","username":"bob"}"#)
        );
        assert_eq!(store.load("globals").unwrap(), Some(state));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = StateStore::new(MemoryStorage::new());
        store.save("globals", &AppState::new("one", "a")).unwrap();
        store.save("globals", &AppState::new("two", "b")).unwrap();
        assert_eq!(store.storage().len(), 1);
        assert_eq!(store.load("globals").unwrap(), Some(AppState::new("two", "b")));
    }

    #[test]
    fn test_read_failure_propagates() {
        let store = StateStore::new(MemoryStorage::unavailable());
        assert!(matches!(store.load("globals"), Err(ShimError::StorageUnavailable)));
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut store = StateStore::new(MemoryStorage::read_only());
        let err = store.save("globals", &AppState::default()).unwrap_err();
        assert!(matches!(err, ShimError::Storage { op: "write", .. }));
    }
}
