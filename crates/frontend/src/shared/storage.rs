//! localStorage браузера как `KeyValueStorage` и доступ к репозиторию шаблонов

use contracts::domain::a001_template::TemplateRepository;
use contracts::shared::config::{load_config, DesignerConfig, CONFIG_OVERRIDE_KEY};
use contracts::shared::storage::{KeyValueStorage, StorageError};
use leptos::prelude::*;

/// Обёртка над `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

fn js_message(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // QuotaExceededError приходит сюда же
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: js_message(e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(e),
        })
    }
}

/// Конфигурация: переопределение из localStorage или встроенная
pub fn load_designer_config() -> DesignerConfig {
    let override_toml = LocalStorage::open()
        .and_then(|s| s.get_item(CONFIG_OVERRIDE_KEY))
        .unwrap_or_else(|e| {
            log::warn!("Cannot read configuration override: {}", e);
            None
        });

    load_config(override_toml.as_deref()).unwrap_or_else(|e| {
        log::error!("Failed to load configuration: {}", e);
        DesignerConfig::default()
    })
}

/// Конфигурация из контекста приложения
pub fn use_designer_config() -> DesignerConfig {
    use_context::<DesignerConfig>().unwrap_or_else(|| {
        log::warn!("DesignerConfig not provided in context, using default");
        DesignerConfig::default()
    })
}

/// Репозиторий шаблонов поверх localStorage
pub fn open_repository(
    config: &DesignerConfig,
) -> Result<TemplateRepository<LocalStorage>, StorageError> {
    Ok(TemplateRepository::new(
        LocalStorage::open()?,
        config.storage.templates_key.clone(),
    ))
}
