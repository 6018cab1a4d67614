use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::storage::open_repository;
use contracts::domain::a001_template::{Template, TemplateId};
use contracts::domain::common::AggregateId;
use contracts::shared::calculation::calculate;
use contracts::shared::config::DesignerConfig;
use contracts::shared::form_schema::{FieldError, FieldWidget};
use contracts::shared::value::{number_value, parse_float_or_zero, FormData};
use leptos::prelude::*;
use serde_json::Value;

/// Вкладки страницы заполнения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseTab {
    Form,
    Preview,
}

/// Значение поля формы из текста ввода
pub fn field_value(widget: &FieldWidget, text: &str) -> Value {
    match widget {
        FieldWidget::Number { .. } => number_value(parse_float_or_zero(text)),
        _ => Value::String(text.to_string()),
    }
}

/// Первое сообщение об ошибке для поля
pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

#[derive(Clone, Copy)]
pub struct TemplateUseViewModel {
    pub template: RwSignal<Option<Template>>,
    pub form_data: RwSignal<FormData>,
    pub calculated: RwSignal<FormData>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub active_tab: RwSignal<UseTab>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    config: StoredValue<DesignerConfig>,
}

impl TemplateUseViewModel {
    pub fn new(config: DesignerConfig) -> Self {
        Self {
            template: RwSignal::new(None),
            form_data: RwSignal::new(FormData::new()),
            calculated: RwSignal::new(FormData::new()),
            field_errors: RwSignal::new(Vec::new()),
            active_tab: RwSignal::new(UseTab::Form),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> DesignerConfig {
        self.config.get_value()
    }

    /// Загрузить шаблон; отсутствующий шаблон не создаётся
    pub fn load(&self, id: String, tab_key: &str, tabs_store: AppGlobalContext) {
        self.loading.set(true);
        let id = match TemplateId::from_string(&id) {
            Ok(id) => id,
            Err(e) => {
                self.error.set(Some(format!("Некорректный идентификатор шаблона: {}", e)));
                self.loading.set(false);
                return;
            }
        };
        let result = self
            .config
            .with_value(open_repository)
            .and_then(|repo| repo.get(&id));

        match result {
            Ok(Some(template)) => {
                tabs_store.update_tab_title(tab_key, &detail_tab_label("Заполнение", &template.name));
                self.template.set(Some(template));
                self.error.set(None);
            }
            Ok(None) => {
                log::warn!("Template not found: {}", id);
                self.template.set(None);
            }
            Err(e) => self.error.set(Some(format!("Ошибка загрузки: {}", e))),
        }
        self.loading.set(false);
    }

    pub fn set_value(&self, name: &str, value: Value) {
        self.form_data.update(|d| {
            d.insert(name.to_string(), value);
        });
        self.field_errors
            .update(|errors| errors.retain(|e| e.field != name));
    }

    /// Пересчитать данные для предпросмотра
    fn recalculate(&self) {
        let tax_rate = self.config.with_value(|c| c.calculation.tax_rate);
        let result = self.template.with_untracked(|t| {
            t.as_ref()
                .map(|t| self.form_data.with_untracked(|d| calculate(t, d, tax_rate)))
        });
        if let Some(data) = result {
            self.calculated.set(data);
        }
    }

    /// «Обновить предпросмотр»: проверка формы, расчёт и переход на предпросмотр
    pub fn refresh_preview(&self) {
        let errors = self.template.with_untracked(|t| {
            t.as_ref()
                .map(|t| self.form_data.with_untracked(|d| t.schema.validate(d)))
                .unwrap_or_default()
        });
        let valid = errors.is_empty();
        self.field_errors.set(errors);
        if valid {
            self.recalculate();
            self.active_tab.set(UseTab::Preview);
        }
    }

    pub fn show_form(&self) {
        self.active_tab.set(UseTab::Form);
    }

    pub fn show_preview(&self) {
        self.recalculate();
        self.active_tab.set(UseTab::Preview);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_number_and_text() {
        let number = FieldWidget::Number {
            minimum: None,
            maximum: None,
            integer: false,
        };
        assert_eq!(field_value(&number, "12.5"), json!(12.5));
        assert_eq!(field_value(&number, "abc"), json!(0));
        assert_eq!(field_value(&FieldWidget::Text, "Иван"), json!("Иван"));
        assert_eq!(field_value(&FieldWidget::Date, ""), json!(""));
    }

    #[test]
    fn test_error_for() {
        let errors = vec![
            FieldError {
                field: "name".to_string(),
                message: "Имя не может быть пустым".to_string(),
            },
            FieldError {
                field: "qty".to_string(),
                message: "qty должен быть числом".to_string(),
            },
        ];
        assert_eq!(error_for(&errors, "qty").as_deref(), Some("qty должен быть числом"));
        assert_eq!(error_for(&errors, "email"), None);
    }
}
