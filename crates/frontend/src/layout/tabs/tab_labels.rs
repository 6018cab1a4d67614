//! Tab labels - единственный источник правды для ключей и заголовков табов.
//!
//! Detail-табы шаблона кодируют id в ключе: `a001_template_edit_{id}`,
//! `a001_template_use_{id}`.

use contracts::domain::a001_template::Template;

pub const HOME: &str = "home";
pub const TEMPLATE_LIST: &str = "a001_template";
pub const TEMPLATE_CREATE: &str = "a001_template_create";

const TEMPLATE_EDIT_PREFIX: &str = "a001_template_edit_";
const TEMPLATE_USE_PREFIX: &str = "a001_template_use_";

/// Разобранный ключ таба
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabKey {
    Home,
    TemplateList,
    TemplateCreate,
    TemplateEdit(String),
    TemplateUse(String),
}

impl TabKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            HOME => Some(TabKey::Home),
            TEMPLATE_LIST => Some(TabKey::TemplateList),
            TEMPLATE_CREATE => Some(TabKey::TemplateCreate),
            k => {
                if let Some(id) = k.strip_prefix(TEMPLATE_EDIT_PREFIX) {
                    (!id.is_empty()).then(|| TabKey::TemplateEdit(id.to_string()))
                } else if let Some(id) = k.strip_prefix(TEMPLATE_USE_PREFIX) {
                    (!id.is_empty()).then(|| TabKey::TemplateUse(id.to_string()))
                } else {
                    None
                }
            }
        }
    }

    pub fn key(&self) -> String {
        match self {
            TabKey::Home => HOME.to_string(),
            TabKey::TemplateList => TEMPLATE_LIST.to_string(),
            TabKey::TemplateCreate => TEMPLATE_CREATE.to_string(),
            TabKey::TemplateEdit(id) => format!("{}{}", TEMPLATE_EDIT_PREFIX, id),
            TabKey::TemplateUse(id) => format!("{}{}", TEMPLATE_USE_PREFIX, id),
        }
    }
}

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Для detail-табов возвращает пустую строку: их заголовок зависит от шаблона.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        HOME => "Главная",
        TEMPLATE_LIST => Template::list_name(),
        TEMPLATE_CREATE => "Новый шаблон",
        _ => "",
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
///
/// Пример: `detail_tab_label("Шаблон", "Счёт")` → `"Шаблон · Счёт"`
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Заголовок для таба, открытого по ключу из URL (имя шаблона ещё неизвестно)
pub fn title_for_key(key: &str) -> String {
    match TabKey::parse(key) {
        Some(TabKey::TemplateEdit(id)) => detail_tab_label(Template::element_name(), &id),
        Some(TabKey::TemplateUse(id)) => detail_tab_label("Заполнение", &id),
        Some(_) => tab_label_for_key(key).to_string(),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_keys() {
        assert_eq!(TabKey::parse("home"), Some(TabKey::Home));
        assert_eq!(TabKey::parse("a001_template"), Some(TabKey::TemplateList));
        assert_eq!(
            TabKey::parse("a001_template_create"),
            Some(TabKey::TemplateCreate)
        );
        assert_eq!(TabKey::parse("p900_sales_register"), None);
    }

    #[test]
    fn test_parse_detail_keys() {
        assert_eq!(
            TabKey::parse("a001_template_edit_sample-invoice"),
            Some(TabKey::TemplateEdit("sample-invoice".to_string()))
        );
        assert_eq!(
            TabKey::parse("a001_template_use_42"),
            Some(TabKey::TemplateUse("42".to_string()))
        );
        assert_eq!(TabKey::parse("a001_template_edit_"), None);
    }

    #[test]
    fn test_key_roundtrip() {
        let key = TabKey::TemplateUse("abc".to_string()).key();
        assert_eq!(key, "a001_template_use_abc");
        assert_eq!(TabKey::parse(&key), Some(TabKey::TemplateUse("abc".to_string())));
    }

    #[test]
    fn test_titles() {
        assert_eq!(tab_label_for_key("a001_template"), "Шаблоны");
        assert_eq!(title_for_key("a001_template_edit_x1"), "Шаблон · x1");
        assert_eq!(title_for_key("unknown"), "unknown");
    }
}
