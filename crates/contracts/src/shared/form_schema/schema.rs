use super::field::{FieldWidget, FormField};
use super::validation::FieldError;
use crate::shared::value::{display, to_number, FormData};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Некорректный JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Схема должна быть JSON-объектом")]
    NotAnObject,
}

/// Схема входных данных шаблона.
///
/// Объект хранится как есть (с сохранением порядка свойств), чтобы редактор
/// схемы показывал пользователю ровно то, что он ввёл.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormSchema(Map<String, Value>);

/// Не-объект (`null`, массив, строка) читается как пустая схема
impl<'de> Deserialize<'de> for FormSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value).unwrap_or_default())
    }
}

impl FormSchema {
    /// `{"type": "object", "properties": {}}`
    pub fn empty() -> Self {
        let mut map = Map::new();
        map.insert("type".to_string(), json!("object"));
        map.insert("properties".to_string(), Value::Object(Map::new()));
        Self(map)
    }

    /// Схема по умолчанию для нового шаблона: имя и email
    pub fn starter() -> Self {
        Self::empty()
            .with_property("name", json!({"type": "string", "title": "Name"}))
            .with_property(
                "email",
                json!({"type": "string", "format": "email", "title": "Email"}),
            )
    }

    /// Разбор текста из редактора схемы
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(SchemaError::NotAnObject),
        }
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// JSON с отступом в 2 пробела
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// Есть ли в схеме объект `properties`
    pub fn has_properties(&self) -> bool {
        matches!(self.0.get("properties"), Some(Value::Object(_)))
    }

    /// Имена обязательных полей
    pub fn required(&self) -> Vec<String> {
        self.0
            .get("required")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(display).collect())
            .unwrap_or_default()
    }

    /// Поля формы в порядке объявления свойств
    pub fn fields(&self) -> Vec<FormField> {
        let required = self.required();
        match self.0.get("properties") {
            Some(Value::Object(props)) => props
                .iter()
                .map(|(name, prop)| FormField::from_property(name, prop, required.contains(name)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Проверка данных формы: обязательность, длины строк, диапазоны чисел
    pub fn validate(&self, data: &FormData) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for field in self.fields() {
            let value = data.get(&field.name);
            let result = match (&field.widget, value) {
                (FieldWidget::Checkbox, _) | (FieldWidget::Unsupported { .. }, _) => Ok(()),
                (_, None) | (_, Some(Value::Null)) if !field.required => Ok(()),
                (_, None) | (_, Some(Value::Null)) => {
                    field.rules.validate_string("", &field.label)
                }
                (FieldWidget::Number { .. }, Some(v)) => match to_number(v) {
                    Some(n) => field.rules.validate_number(n, &field.label),
                    None => Err(format!("{} должен быть числом", field.label)),
                },
                (_, Some(v)) => field.rules.validate_string(&display(v), &field.label),
            };

            if let Err(message) = result {
                errors.push(FieldError {
                    field: field.name.clone(),
                    message,
                });
            }
        }

        errors
    }

    /// Добавить/заменить свойство (порядок сохраняется)
    pub fn with_property(mut self, name: &str, property: Value) -> Self {
        let props = self
            .0
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if !props.is_object() {
            *props = Value::Object(Map::new());
        }
        if let Value::Object(map) = props {
            map.insert(name.to_string(), property);
        }
        self
    }

    /// Задать список обязательных полей
    pub fn with_required(mut self, names: &[&str]) -> Self {
        self.0.insert("required".to_string(), json!(names));
        self
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(value: Value) -> FormData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = FormSchema::parse("{ not json").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidJson(_)));
        assert!(matches!(
            FormSchema::parse("[1, 2]").unwrap_err(),
            SchemaError::NotAnObject
        ));
    }

    #[test]
    fn test_stored_non_object_loads_as_empty() {
        let schema: FormSchema = serde_json::from_value(Value::Null).unwrap();
        assert_eq!(schema, FormSchema::empty());
        let schema: FormSchema = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(schema, FormSchema::empty());
        let schema: FormSchema = serde_json::from_value(json!({"type": "object"})).unwrap();
        assert!(!schema.has_properties());
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = FormSchema::parse(
            r#"{"type":"object","properties":{"zeta":{"type":"string"},"alpha":{"type":"number"},"mid":{"type":"boolean"}},"required":["alpha"]}"#,
        )
        .unwrap();
        let fields = schema.fields();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(fields[1].required);
        assert!(!fields[0].required);
    }

    #[test]
    fn test_missing_properties() {
        let schema = FormSchema::parse(r#"{"type":"object"}"#).unwrap();
        assert!(!schema.has_properties());
        assert!(schema.fields().is_empty());
        assert!(FormSchema::empty().has_properties());
    }

    #[test]
    fn test_pretty_roundtrip() {
        let schema = FormSchema::starter();
        let text = schema.pretty();
        assert!(text.contains("\n  \"type\": \"object\""));
        assert_eq!(FormSchema::parse(&text).unwrap(), schema);
    }

    #[test]
    fn test_validate_required_and_ranges() {
        let schema = FormSchema::empty()
            .with_property("name", json!({"type": "string", "title": "Имя"}))
            .with_property("qty", json!({"type": "integer", "minimum": 1}))
            .with_property("agree", json!({"type": "boolean"}))
            .with_required(&["name", "qty", "agree"]);

        let errors = schema.validate(&data(json!({"qty": 0})));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "qty"]);
        assert_eq!(errors[0].message, "Имя не может быть пустым");

        assert!(schema
            .validate(&data(json!({"name": "Иван", "qty": 3})))
            .is_empty());
    }

    #[test]
    fn test_validate_non_numeric_number() {
        let schema = FormSchema::empty().with_property("qty", json!({"type": "number"}));
        let errors = schema.validate(&data(json!({"qty": "много"})));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "qty должен быть числом");
    }
}
