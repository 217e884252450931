//! LocalStorage backend

use super::js_message;
use crate::error::ShimError;
use crate::persistence::Storage;

/// `window.localStorage`
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, ShimError> {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(ShimError::StorageUnavailable)?;
        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ShimError> {
        self.inner
            .get_item(key)
            .map_err(|e| ShimError::storage("read", key, js_message(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ShimError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| ShimError::storage("write", key, js_message(&e)))
    }
}
