use super::element::Element;
use crate::domain::common::aggregate_id::parse_text_id;
use crate::domain::common::{AggregateId, EntityMetadata};
use crate::shared::form_schema::FormSchema;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub const DEFAULT_TEMPLATE_NAME: &str = "Новый шаблон";

/// `null` в сохранённой записи читается как значение по умолчанию
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_name))
}

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор шаблона
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for TemplateId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_text_id(s).map(TemplateId)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Category
// ============================================================================

/// Категория шаблона; неизвестные значения сохраняются как есть
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateCategory {
    #[default]
    General,
    Invoice,
    Report,
    Form,
    Proposal,
    Engineering,
    Other(String),
}

impl TemplateCategory {
    pub fn as_str(&self) -> &str {
        match self {
            TemplateCategory::General => "general",
            TemplateCategory::Invoice => "invoice",
            TemplateCategory::Report => "report",
            TemplateCategory::Form => "form",
            TemplateCategory::Proposal => "proposal",
            TemplateCategory::Engineering => "engineering",
            TemplateCategory::Other(tag) => tag,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            TemplateCategory::General => "Общий",
            TemplateCategory::Invoice => "Счёт",
            TemplateCategory::Report => "Отчёт",
            TemplateCategory::Form => "Форма",
            TemplateCategory::Proposal => "Предложение",
            TemplateCategory::Engineering => "Инженерный расчёт",
            TemplateCategory::Other(tag) => tag,
        }
    }

    /// Имя иконки для карточки в списке
    pub fn icon_name(&self) -> &'static str {
        match self {
            TemplateCategory::Invoice => "receipt",
            TemplateCategory::Report => "bar-chart",
            TemplateCategory::Form => "clipboard",
            TemplateCategory::Engineering => "settings",
            _ => "file-text",
        }
    }

    /// Варианты для выпадающего списка
    pub fn selectable() -> Vec<TemplateCategory> {
        vec![
            TemplateCategory::General,
            TemplateCategory::Invoice,
            TemplateCategory::Report,
            TemplateCategory::Form,
            TemplateCategory::Proposal,
            TemplateCategory::Engineering,
        ]
    }
}

impl From<String> for TemplateCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "general" => TemplateCategory::General,
            "invoice" => TemplateCategory::Invoice,
            "report" => TemplateCategory::Report,
            "form" => TemplateCategory::Form,
            "proposal" => TemplateCategory::Proposal,
            "engineering" => TemplateCategory::Engineering,
            _ => TemplateCategory::Other(value),
        }
    }
}

impl From<&str> for TemplateCategory {
    fn from(value: &str) -> Self {
        TemplateCategory::from(value.to_string())
    }
}

impl From<TemplateCategory> for String {
    fn from(value: TemplateCategory) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// Scripts
// ============================================================================

/// Тексты скриптов шаблона (хранятся, но не исполняются)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scripts {
    #[serde(deserialize_with = "null_as_default")]
    pub calculation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub validation: String,
}

impl Scripts {
    pub fn with_calculation(calculation: impl Into<String>) -> Self {
        Self {
            calculation: calculation.into(),
            validation: String::new(),
        }
    }

    pub fn has_calculation(&self) -> bool {
        !self.calculation.trim().is_empty()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Шаблон документа: элементы холста, схема входных данных, скрипты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,

    #[serde(default = "default_name", deserialize_with = "null_as_default_name")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub category: TemplateCategory,

    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<Element>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub schema: FormSchema,

    #[serde(default, deserialize_with = "null_as_default")]
    pub scripts: Scripts,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn default_name() -> String {
    DEFAULT_TEMPLATE_NAME.to_string()
}

impl Template {
    /// Пустой шаблон с заданным id
    pub fn empty(id: TemplateId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: default_name(),
            category: TemplateCategory::General,
            elements: Vec::new(),
            schema: FormSchema::empty(),
            scripts: Scripts::default(),
            metadata: EntityMetadata::at(now),
        }
    }

    /// Создать шаблон из DTO создания
    pub fn new_for_insert(id: TemplateId, dto: NewTemplate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: dto.name,
            category: dto.category,
            elements: dto.elements,
            schema: dto.schema,
            scripts: dto.scripts,
            metadata: EntityMetadata::at(now),
        }
    }

    /// Применить частичное обновление
    pub fn apply(&mut self, patch: TemplatePatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(elements) = patch.elements {
            self.elements = elements;
        }
        if let Some(schema) = patch.schema {
            self.schema = schema;
        }
        if let Some(scripts) = patch.scripts {
            self.scripts = scripts;
        }
        self.metadata.touch_at(now);
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.metadata.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.metadata.updated_at
    }

    pub fn element_name() -> &'static str {
        "Шаблон"
    }

    pub fn list_name() -> &'static str {
        "Шаблоны"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO создания шаблона
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTemplate {
    pub name: String,
    pub category: TemplateCategory,
    pub elements: Vec<Element>,
    pub schema: FormSchema,
    pub scripts: Scripts,
}

impl NewTemplate {
    pub fn named(name: impl Into<String>, category: TemplateCategory) -> Self {
        Self {
            name: name.into(),
            category,
            elements: Vec::new(),
            schema: FormSchema::empty(),
            scripts: Scripts::default(),
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название шаблона не может быть пустым".into());
        }
        Ok(())
    }
}

impl Default for NewTemplate {
    fn default() -> Self {
        Self::named(DEFAULT_TEMPLATE_NAME, TemplateCategory::General)
    }
}

/// Частичное обновление: заданные поля заменяются
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub category: Option<TemplateCategory>,
    pub elements: Option<Vec<Element>>,
    pub schema: Option<FormSchema>,
    pub scripts: Option<Scripts>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_category_preserves_unknown_tag() {
        let category: TemplateCategory = serde_json::from_value(json!("legal")).unwrap();
        assert_eq!(category, TemplateCategory::Other("legal".to_string()));
        assert_eq!(serde_json::to_value(&category).unwrap(), json!("legal"));
        assert_eq!(TemplateCategory::from("invoice"), TemplateCategory::Invoice);
    }

    #[test]
    fn test_minimal_record_loads_with_defaults() {
        let template: Template = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert_eq!(template.name, DEFAULT_TEMPLATE_NAME);
        assert_eq!(template.category, TemplateCategory::General);
        assert!(template.elements.is_empty());
        assert!(template.schema.has_properties());
        assert_eq!(template.scripts, Scripts::default());
    }

    #[test]
    fn test_null_fields_load_as_defaults() {
        let template: Template = serde_json::from_value(json!({
            "id": "b",
            "name": null,
            "category": null,
            "elements": null,
            "schema": null,
            "scripts": {"calculation": null, "validation": "x"},
        }))
        .unwrap();
        assert_eq!(template.name, DEFAULT_TEMPLATE_NAME);
        assert_eq!(template.category, TemplateCategory::General);
        assert!(template.elements.is_empty());
        assert_eq!(template.schema, FormSchema::empty());
        assert_eq!(template.scripts.calculation, "");
        assert_eq!(template.scripts.validation, "x");

        let template: Template =
            serde_json::from_value(json!({"id": "c", "scripts": null})).unwrap();
        assert_eq!(template.scripts, Scripts::default());
    }

    #[test]
    fn test_camel_case_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let template = Template::empty(TemplateId::new("t1"), now);
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value["createdAt"], json!("2024-05-01T12:00:00Z"));
        assert_eq!(value["updatedAt"], json!("2024-05-01T12:00:00Z"));
        assert_eq!(value["scripts"], json!({"calculation": "", "validation": ""}));
    }

    #[test]
    fn test_apply_patch_touches_updated_at() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let mut template = Template::empty(TemplateId::new("t1"), created);

        template.apply(
            TemplatePatch {
                name: Some("Счёт".to_string()),
                ..TemplatePatch::default()
            },
            later,
        );

        assert_eq!(template.name, "Счёт");
        assert_eq!(template.category, TemplateCategory::General);
        assert_eq!(template.created_at(), created);
        assert_eq!(template.updated_at(), later);
    }

    #[test]
    fn test_new_template_requires_name() {
        assert!(NewTemplate::named("  ", TemplateCategory::Form).validate().is_err());
        assert!(NewTemplate::default().validate().is_ok());
    }

    #[test]
    fn test_template_id_from_string() {
        assert_eq!(TemplateId::from_string(" x1 ").unwrap(), TemplateId::new("x1"));
        assert!(TemplateId::from_string("").is_err());
    }
}
