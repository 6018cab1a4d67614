//! Подстановка значений `{{field}}` в текст элементов

use super::value::{display, FormData};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("valid placeholder regex"));

/// Заменяет `{{field}}` значениями из данных; отсутствующие поля остаются как есть.
pub fn fill(text: &str, data: &FormData) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| match data.get(&caps[1]) {
            Some(value) => display(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Имена полей, упомянутых в тексте (в порядке появления, без повторов)
pub fn referenced_fields(text: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let name = caps[1].to_string();
        if !fields.contains(&name) {
            fields.push(name);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: serde_json::Value) -> FormData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_fill_replaces_known_fields() {
        let d = data(json!({"name": "Иван", "total": 54, "tax": 4.5}));
        assert_eq!(
            fill("Клиент: {{name}}, итого {{total}} (налог {{tax}})", &d),
            "Клиент: Иван, итого 54 (налог 4.5)"
        );
    }

    #[test]
    fn test_fill_keeps_missing_fields() {
        let d = data(json!({"a": 1}));
        assert_eq!(fill("{{a}} + {{b}}", &d), "1 + {{b}}");
    }

    #[test]
    fn test_fill_without_placeholders() {
        let d = data(json!({}));
        assert_eq!(fill("plain text", &d), "plain text");
        assert_eq!(fill("{{}}", &d), "{{}}");
    }

    #[test]
    fn test_referenced_fields() {
        assert_eq!(
            referenced_fields("={{field1}} + {{field2}} - {{field1}}"),
            vec!["field1".to_string(), "field2".to_string()]
        );
    }
}
