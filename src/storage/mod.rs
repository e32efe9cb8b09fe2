use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::ServerError;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ServerError>;
    fn remove(&self, key: &str) -> Result<(), ServerError>;

    /// Runs a read-modify-write as one unit. Stores reachable from more than
    /// one thread must keep other writers out until `f` returns.
    fn atomically<T, F>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce() -> Result<T, ServerError>,
    {
        f()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        (**self).remove(key)
    }

    fn atomically<T, F>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce() -> Result<T, ServerError>,
    {
        (**self).atomically(f)
    }
}

/// Process-local store, used in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
