use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные жизненного цикла записи (createdAt / updatedAt)
///
/// Хранится в том же JSON-формате, что и запись шаблона в localStorage,
/// поэтому поля сериализуются в camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Дата последнего обновления
    #[serde(rename = "updatedAt", default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl EntityMetadata {
    /// Создать новые метаданные для новой записи
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Метаданные с заданным моментом создания
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Обновить timestamp заданным моментом
    pub fn touch_at(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_touch_keeps_created_at() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let mut meta = EntityMetadata::at(start);
        meta.touch_at(later);
        assert_eq!(meta.created_at, start);
        assert_eq!(meta.updated_at, later);
    }

    #[test]
    fn test_missing_fields_default_on_load() {
        let meta: EntityMetadata = serde_json::from_str("{}").unwrap();
        assert!(meta.updated_at >= meta.created_at - chrono::Duration::seconds(1));
    }
}
