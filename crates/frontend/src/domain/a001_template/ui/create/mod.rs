//! Создание шаблона: название и категория, затем переход в дизайнер
//!
//! - view_model.rs: состояние формы и команда создания
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::TemplateCreate;
pub use view_model::TemplateCreateViewModel;
