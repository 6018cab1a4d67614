//! JSON-Schema-подобное описание входных данных шаблона.
//!
//! Схема используется только для генерации формы ввода: настоящей проверки
//! по JSON Schema нет, есть лишь базовые правила обязательности и диапазонов.

pub mod field;
pub mod schema;
pub mod validation;

pub use field::{FieldWidget, FormField};
pub use schema::{FormSchema, SchemaError};
pub use validation::{FieldError, FieldRules};
