use super::aggregate::{NewTemplate, Template, TemplateId, TemplatePatch};
use crate::shared::storage::{KeyValueStorage, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Элемент сохранённого массива
#[derive(Serialize)]
#[serde(untagged)]
enum StoredRecord {
    Parsed(Template),
    Raw(Value),
}

impl StoredRecord {
    fn into_template(self) -> Option<Template> {
        match self {
            StoredRecord::Parsed(template) => Some(template),
            StoredRecord::Raw(_) => None,
        }
    }

    fn with_id(&self, id: &TemplateId) -> Option<&Template> {
        match self {
            StoredRecord::Parsed(template) if &template.id == id => Some(template),
            _ => None,
        }
    }

    fn with_id_mut(&mut self, id: &TemplateId) -> Option<&mut Template> {
        match self {
            StoredRecord::Parsed(template) if &template.id == id => Some(template),
            _ => None,
        }
    }
}

/// Хранилище шаблонов: один JSON-массив под одним ключом
pub struct TemplateRepository<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TemplateRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Прочитать массив; отсутствие ключа — пустой список.
    /// Запись, которую не удалось разобрать, остаётся в массиве как есть.
    fn read(&self) -> Result<Vec<StoredRecord>, StorageError> {
        let raw = match self.storage.get_item(&self.key)? {
            None => return Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => return Ok(Vec::new()),
            Some(raw) => raw,
        };
        let values: Vec<Value> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            })?;

        Ok(values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match Template::deserialize(&value) {
                Ok(template) => StoredRecord::Parsed(template),
                Err(e) => {
                    log::warn!("Skipping template #{} under '{}': {}", index, self.key, e);
                    StoredRecord::Raw(value)
                }
            })
            .collect())
    }

    fn write(&self, records: &[StoredRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)?;
        self.storage.set_item(&self.key, &json)
    }

    /// Все шаблоны; повреждённые данные дают пустой список
    pub fn list(&self) -> Result<Vec<Template>, StorageError> {
        match self.read() {
            Ok(records) => Ok(records
                .into_iter()
                .filter_map(StoredRecord::into_template)
                .collect()),
            Err(e @ StorageError::Corrupt { .. }) => {
                log::warn!("{}", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn get(&self, id: &TemplateId) -> Result<Option<Template>, StorageError> {
        Ok(self.list()?.into_iter().find(|t| &t.id == id))
    }

    /// Найти шаблон; если его нет, создать пустой с этим id
    pub fn get_or_create(
        &self,
        id: &TemplateId,
        now: DateTime<Utc>,
    ) -> Result<Template, StorageError> {
        let mut records = self.read()?;
        if let Some(existing) = records.iter().find_map(|r| r.with_id(id)) {
            return Ok(existing.clone());
        }

        log::info!("Template {} not found, creating an empty one", id);
        let template = Template::empty(id.clone(), now);
        records.push(StoredRecord::Parsed(template.clone()));
        self.write(&records)?;
        Ok(template)
    }

    /// Создать шаблон с новым id
    pub fn create(&self, dto: NewTemplate, now: DateTime<Utc>) -> Result<TemplateId, StorageError> {
        let mut records = self.read()?;
        let id = TemplateId::new_v4();
        records.push(StoredRecord::Parsed(Template::new_for_insert(id.clone(), dto, now)));
        self.write(&records)?;
        Ok(id)
    }

    /// Частичное обновление; `false`, если шаблона нет
    pub fn update(
        &self,
        id: &TemplateId,
        patch: TemplatePatch,
        now: DateTime<Utc>,
    ) -> Result<bool, StorageError> {
        let mut records = self.read()?;
        let Some(template) = records.iter_mut().find_map(|r| r.with_id_mut(id)) else {
            return Ok(false);
        };
        template.apply(patch, now);
        self.write(&records)?;
        Ok(true)
    }

    /// Заменить по id или добавить в конец
    pub fn upsert(&self, template: Template) -> Result<(), StorageError> {
        let mut records = self.read()?;
        match records.iter_mut().find_map(|r| r.with_id_mut(&template.id)) {
            Some(slot) => *slot = template,
            None => records.push(StoredRecord::Parsed(template)),
        }
        self.write(&records)
    }

    /// Удалить; `false`, если шаблона не было
    pub fn delete(&self, id: &TemplateId) -> Result<bool, StorageError> {
        let mut records = self.read()?;
        let before = records.len();
        records.retain(|r| r.with_id(id).is_none());
        if records.len() == before {
            return Ok(false);
        }
        self.write(&records)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_template::aggregate::{TemplateCategory, DEFAULT_TEMPLATE_NAME};
    use crate::shared::storage::MemoryStorage;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_create_get_list() {
        let storage = MemoryStorage::new();
        let repo = TemplateRepository::new(&storage, "templates");

        let id = repo
            .create(NewTemplate::named("Счёт", TemplateCategory::Invoice), at(1))
            .unwrap();

        let template = repo.get(&id).unwrap().unwrap();
        assert_eq!(template.name, "Счёт");
        assert_eq!(template.created_at(), at(1));
        assert_eq!(repo.list().unwrap().len(), 1);
        assert!(storage.get_item("templates").unwrap().is_some());
    }

    #[test]
    fn test_corrupt_storage_lists_empty() {
        let storage = MemoryStorage::with_item("templates", "{not json");
        let repo = TemplateRepository::new(&storage, "templates");
        assert!(repo.list().unwrap().is_empty());
        assert!(repo.get(&TemplateId::new("x")).unwrap().is_none());
    }

    #[test]
    fn test_writes_keep_other_records() {
        let raw = r#"[
            {"id":"a","name":"A","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
            {"id":"b","name":"B","schema":null,"elements":null,"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
            {"name":"без id"}
        ]"#;
        let storage = MemoryStorage::with_item("templates", raw);
        let repo = TemplateRepository::new(&storage, "templates");

        let names: Vec<String> = repo.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["A".to_string(), "B".to_string()]);

        let id = repo.create(NewTemplate::default(), at(1)).unwrap();
        assert!(repo.delete(&TemplateId::new("a")).unwrap());

        let stored: Vec<Value> =
            serde_json::from_str(&storage.get_item("templates").unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0]["id"], "b");
        assert_eq!(stored[1]["name"], "без id");
        assert_eq!(stored[2]["id"], id.as_str());

        let ids: Vec<TemplateId> = repo.list().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TemplateId::new("b"), id]);
    }

    #[test]
    fn test_corrupt_storage_is_not_overwritten() {
        let storage = MemoryStorage::with_item("templates", "{not json");
        let repo = TemplateRepository::new(&storage, "templates");

        let err = repo.create(NewTemplate::default(), at(1)).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
        assert!(repo.delete(&TemplateId::new("x")).is_err());
        assert_eq!(storage.get_item("templates").unwrap().unwrap(), "{not json");
    }

    #[test]
    fn test_get_or_create_persists_empty_template() {
        let storage = MemoryStorage::new();
        let repo = TemplateRepository::new(&storage, "templates");
        let id = TemplateId::new("from-url");

        let created = repo.get_or_create(&id, at(2)).unwrap();
        assert_eq!(created.name, DEFAULT_TEMPLATE_NAME);
        assert_eq!(repo.list().unwrap().len(), 1);

        let again = repo.get_or_create(&id, at(5)).unwrap();
        assert_eq!(again.created_at(), at(2));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_update_merges_fields() {
        let storage = MemoryStorage::new();
        let repo = TemplateRepository::new(&storage, "templates");
        let id = repo.create(NewTemplate::default(), at(1)).unwrap();

        let updated = repo
            .update(
                &id,
                TemplatePatch {
                    category: Some(TemplateCategory::Report),
                    ..TemplatePatch::default()
                },
                at(3),
            )
            .unwrap();
        assert!(updated);

        let template = repo.get(&id).unwrap().unwrap();
        assert_eq!(template.category, TemplateCategory::Report);
        assert_eq!(template.name, DEFAULT_TEMPLATE_NAME);
        assert_eq!(template.updated_at(), at(3));

        assert!(!repo
            .update(&TemplateId::new("missing"), TemplatePatch::default(), at(3))
            .unwrap());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let storage = MemoryStorage::new();
        let repo = TemplateRepository::new(&storage, "templates");
        let first = repo.create(NewTemplate::named("A", TemplateCategory::General), at(1)).unwrap();
        repo.create(NewTemplate::named("B", TemplateCategory::General), at(1))
            .unwrap();

        let mut template = repo.get(&first).unwrap().unwrap();
        template.name = "A2".to_string();
        repo.upsert(template).unwrap();

        let names: Vec<String> = repo.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["A2".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_delete() {
        let storage = MemoryStorage::new();
        let repo = TemplateRepository::new(&storage, "templates");
        let id = repo.create(NewTemplate::default(), at(1)).unwrap();

        assert!(repo.delete(&id).unwrap());
        assert!(!repo.delete(&id).unwrap());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_loads_records_written_by_older_versions() {
        let raw = r#"[{"id":"legacy","name":"Old","category":"invoice","elements":[
            {"id":"e1","type":"text","position":{"x":1,"y":2},"size":{"width":3,"height":4},
             "content":{"text":"Total: {{total}}"}}],
            "schema":{"type":"object","properties":{}},
            "scripts":{"calculation":"def calculate(data):\n    return data","validation":""},
            "createdAt":"2024-01-01T00:00:00.000Z","updatedAt":"2024-01-02T00:00:00.000Z"}]"#;
        let storage = MemoryStorage::with_item("templates", raw);
        let repo = TemplateRepository::new(&storage, "templates");

        let template = repo.get(&TemplateId::new("legacy")).unwrap().unwrap();
        assert_eq!(template.elements.len(), 1);
        assert!(template.scripts.has_calculation());
        assert_eq!(template.created_at(), Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }
}
