//! Абстракция key-value хранилища (localStorage в браузере, память в тестах)

use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Хранилище недоступно")]
    Unavailable,

    #[error("Ошибка чтения ключа '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Ошибка записи ключа '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Повреждённые данные под ключом '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Ошибка сериализации: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Минимальный контракт Web Storage API
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Хранилище в памяти
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с заранее записанным значением
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));

        storage.remove_item("k").unwrap();
        assert!(storage.is_empty());
    }
}
