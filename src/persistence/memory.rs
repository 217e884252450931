//! In-memory storage backend for native builds and tests

use std::collections::HashMap;

use super::Storage;
use crate::error::ShimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    ReadWrite,
    /// Reads work, writes fail (quota exceeded, private mode)
    ReadOnly,
    /// Every access fails
    Unavailable,
}

/// HashMap-backed `Storage`
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    mode: Mode,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one record
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn read_only() -> Self {
        Self {
            mode: Mode::ReadOnly,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            mode: Mode::Unavailable,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ShimError> {
        if self.mode == Mode::Unavailable {
            return Err(ShimError::StorageUnavailable);
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ShimError> {
        match self.mode {
            Mode::ReadWrite => {
                self.items.insert(key.to_string(), value.to_string());
                Ok(())
            }
            Mode::ReadOnly => Err(ShimError::storage("write", key, "storage is read-only")),
            Mode::Unavailable => Err(ShimError::StorageUnavailable),
        }
    }
}
