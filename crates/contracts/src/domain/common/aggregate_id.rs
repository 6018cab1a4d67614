use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Строковый идентификатор: любой непустой текст без пробелов по краям.
///
/// Идентификаторы шаблонов приходят из ключей табов и из localStorage,
/// поэтому формат UUID не навязывается.
pub(crate) fn parse_text_id(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Empty identifier".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_id() {
        assert_eq!(parse_text_id(" abc ").unwrap(), "abc");
        assert!(parse_text_id("   ").is_err());
    }
}
