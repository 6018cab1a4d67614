use super::validation::FieldRules;
use crate::shared::value::{display, is_truthy, FormData};
use serde_json::{Map, Value};

/// Способ ввода значения поля
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWidget {
    Text,
    Email,
    Date,
    /// Длинный текст (`maxLength > 100`)
    TextArea,
    Select {
        options: Vec<String>,
    },
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
        integer: bool,
    },
    Checkbox,
    Unsupported {
        type_name: String,
    },
}

impl FieldWidget {
    /// Значение атрибута `step` числового поля
    pub fn step(&self) -> &'static str {
        match self {
            FieldWidget::Number { integer: true, .. } => "1",
            _ => "any",
        }
    }

    /// HTML `type` для полей, которые рендерятся как `<input>`
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldWidget::Text => Some("text"),
            FieldWidget::Email => Some("email"),
            FieldWidget::Date => Some("date"),
            FieldWidget::Number { .. } => Some("number"),
            FieldWidget::Checkbox => Some("checkbox"),
            _ => None,
        }
    }
}

/// Поле формы, построенное по свойству схемы
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub required: bool,
    pub widget: FieldWidget,
    pub rules: FieldRules,
}

impl FormField {
    pub(crate) fn from_property(name: &str, property: &Value, required: bool) -> Self {
        let empty = Map::new();
        let prop = property.as_object().unwrap_or(&empty);

        let label = prop
            .get("title")
            .filter(|v| is_truthy(v))
            .map(display)
            .unwrap_or_else(|| name.to_string());
        let description = prop
            .get("description")
            .filter(|v| is_truthy(v))
            .map(display);

        let rules = FieldRules {
            required,
            min: prop.get("minimum").and_then(Value::as_f64),
            max: prop.get("maximum").and_then(Value::as_f64),
            min_length: prop
                .get("minLength")
                .and_then(Value::as_u64)
                .map(|v| v as usize),
            max_length: prop
                .get("maxLength")
                .and_then(Value::as_u64)
                .map(|v| v as usize),
        };

        Self {
            name: name.to_string(),
            label,
            description,
            required,
            widget: widget_for(prop),
            rules,
        }
    }

    /// Текст для поля ввода: значение из данных или пустая строка
    pub fn input_text(&self, data: &FormData) -> String {
        data.get(&self.name).map(display).unwrap_or_default()
    }

    /// Состояние чекбокса
    pub fn is_checked(&self, data: &FormData) -> bool {
        data.get(&self.name).map(is_truthy).unwrap_or(false)
    }
}

fn widget_for(prop: &Map<String, Value>) -> FieldWidget {
    let type_name = prop.get("type").and_then(Value::as_str).unwrap_or("");

    match type_name {
        "string" => {
            let format = prop.get("format").and_then(Value::as_str);
            if format == Some("email") {
                FieldWidget::Email
            } else if format == Some("date") {
                FieldWidget::Date
            } else if let Some(options) = prop.get("enum").and_then(Value::as_array) {
                FieldWidget::Select {
                    options: options.iter().map(display).collect(),
                }
            } else if prop
                .get("maxLength")
                .and_then(Value::as_f64)
                .map_or(false, |max| max > 100.0)
            {
                FieldWidget::TextArea
            } else {
                FieldWidget::Text
            }
        }
        "number" | "integer" => FieldWidget::Number {
            minimum: prop.get("minimum").and_then(Value::as_f64),
            maximum: prop.get("maximum").and_then(Value::as_f64),
            integer: type_name == "integer",
        },
        "boolean" => FieldWidget::Checkbox,
        other => FieldWidget::Unsupported {
            type_name: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(property: Value) -> FormField {
        FormField::from_property("f", &property, false)
    }

    #[test]
    fn test_string_widgets() {
        assert_eq!(field(json!({"type": "string"})).widget, FieldWidget::Text);
        assert_eq!(
            field(json!({"type": "string", "format": "email"})).widget,
            FieldWidget::Email
        );
        assert_eq!(
            field(json!({"type": "string", "format": "date"})).widget,
            FieldWidget::Date
        );
        assert_eq!(
            field(json!({"type": "string", "enum": ["a", "b"]})).widget,
            FieldWidget::Select {
                options: vec!["a".to_string(), "b".to_string()]
            }
        );
        assert_eq!(
            field(json!({"type": "string", "maxLength": 500})).widget,
            FieldWidget::TextArea
        );
        assert_eq!(
            field(json!({"type": "string", "maxLength": 100})).widget,
            FieldWidget::Text
        );
    }

    #[test]
    fn test_format_wins_over_enum() {
        let f = field(json!({"type": "string", "format": "email", "enum": ["x"]}));
        assert_eq!(f.widget, FieldWidget::Email);
    }

    #[test]
    fn test_number_widgets() {
        let f = field(json!({"type": "integer", "minimum": 1, "maximum": 9}));
        assert_eq!(
            f.widget,
            FieldWidget::Number {
                minimum: Some(1.0),
                maximum: Some(9.0),
                integer: true
            }
        );
        assert_eq!(f.widget.step(), "1");
        assert_eq!(field(json!({"type": "number"})).widget.step(), "any");
    }

    #[test]
    fn test_unsupported_and_boolean() {
        assert_eq!(field(json!({"type": "boolean"})).widget, FieldWidget::Checkbox);
        assert_eq!(
            field(json!({"type": "array"})).widget,
            FieldWidget::Unsupported {
                type_name: "array".to_string()
            }
        );
        assert_eq!(
            field(json!({})).widget,
            FieldWidget::Unsupported {
                type_name: String::new()
            }
        );
    }

    #[test]
    fn test_label_falls_back_to_name() {
        assert_eq!(field(json!({"type": "string"})).label, "f");
        assert_eq!(field(json!({"type": "string", "title": ""})).label, "f");
        assert_eq!(
            field(json!({"type": "string", "title": "Имя"})).label,
            "Имя"
        );
    }

    #[test]
    fn test_input_text_and_checked() {
        let f = field(json!({"type": "number"}));
        let data = json!({"f": 12.5}).as_object().cloned().unwrap();
        assert_eq!(f.input_text(&data), "12.5");
        assert_eq!(f.input_text(&FormData::new()), "");
        assert!(f.is_checked(&data));
    }
}
