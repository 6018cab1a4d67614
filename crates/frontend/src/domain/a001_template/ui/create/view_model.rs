use crate::shared::storage::open_repository;
use contracts::domain::a001_template::{NewTemplate, Scripts, TemplateCategory, TemplateId};
use contracts::shared::calculation::STARTER_SCRIPT;
use contracts::shared::config::DesignerConfig;
use contracts::shared::form_schema::FormSchema;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateForm {
    pub name: String,
    /// Тег категории (`general`, `invoice`, ...)
    pub category: String,
}

impl CreateForm {
    /// Новый шаблон со схемой по умолчанию (имя, email) и заготовкой скрипта
    pub fn to_new_template(&self) -> Result<NewTemplate, String> {
        let category = if self.category.is_empty() {
            TemplateCategory::General
        } else {
            TemplateCategory::from(self.category.as_str())
        };

        let dto = NewTemplate {
            name: self.name.trim().to_string(),
            category,
            elements: Vec::new(),
            schema: FormSchema::starter(),
            scripts: Scripts::with_calculation(STARTER_SCRIPT),
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone)]
pub struct TemplateCreateViewModel {
    pub form: RwSignal<CreateForm>,
    pub error: RwSignal<Option<String>>,
    config: StoredValue<DesignerConfig>,
}

impl TemplateCreateViewModel {
    pub fn new(config: DesignerConfig) -> Self {
        Self {
            form: RwSignal::new(CreateForm {
                name: String::new(),
                category: TemplateCategory::General.as_str().to_string(),
            }),
            error: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.form.with(|f| f.name.trim().is_empty())
    }

    /// Создать шаблон и сообщить его id
    pub fn create_command(&self, on_created: Callback<(TemplateId, String)>) {
        let dto = match self.form.with_untracked(CreateForm::to_new_template) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let name = dto.name.clone();
        let result = self
            .config
            .with_value(open_repository)
            .and_then(|repo| repo.create(dto, chrono::Utc::now()));

        match result {
            Ok(id) => {
                log::info!("Template created: {}", id);
                self.error.set(None);
                self.form.update(|f| f.name.clear());
                on_created.run((id, name));
            }
            Err(e) => self.error.set(Some(format!("Ошибка сохранения: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let form = CreateForm {
            name: "   ".to_string(),
            category: "invoice".to_string(),
        };
        assert_eq!(
            form.to_new_template().unwrap_err(),
            "Название шаблона не может быть пустым"
        );
    }

    #[test]
    fn test_new_template_defaults() {
        let form = CreateForm {
            name: " Счёт ".to_string(),
            category: "invoice".to_string(),
        };
        let dto = form.to_new_template().unwrap();
        assert_eq!(dto.name, "Счёт");
        assert_eq!(dto.category, TemplateCategory::Invoice);
        assert_eq!(dto.schema, FormSchema::starter());
        assert_eq!(dto.scripts.calculation, STARTER_SCRIPT);
        assert!(dto.elements.is_empty());
    }
}
