use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::storage::open_repository;
use contracts::domain::a001_template::editor::ElementPatch;
use contracts::domain::a001_template::{
    EditorState, Element, ElementContent, ElementId, Position, SampleKind, Size, Template,
    TemplateCategory, TemplateId,
};
use contracts::domain::common::AggregateId;
use contracts::shared::calculation::test_run;
use contracts::shared::config::DesignerConfig;
use contracts::shared::form_schema::FormSchema;
use contracts::shared::storage::StorageError;
use contracts::shared::tabular::{to_table_element, SheetGrid};
use leptos::prelude::*;

/// Режим центральной области дизайнера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Canvas,
    Schema,
    Script,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Canvas => "Холст",
            ViewMode::Schema => "Схема",
            ViewMode::Script => "Скрипт",
        }
    }

    pub fn all() -> [ViewMode; 3] {
        [ViewMode::Canvas, ViewMode::Schema, ViewMode::Script]
    }
}

/// Вкладки документа над холстом
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTabs {
    titles: Vec<String>,
    active: usize,
    created: usize,
}

impl Default for DocumentTabs {
    fn default() -> Self {
        Self {
            titles: vec![
                "Read Me".to_string(),
                "Design Input".to_string(),
                "Calculations".to_string(),
            ],
            active: 0,
            created: 0,
        }
    }
}

impl DocumentTabs {
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn activate(&mut self, index: usize) {
        if index < self.titles.len() {
            self.active = index;
        }
    }

    /// Добавить вкладку «Лист N» и сделать её активной
    pub fn add(&mut self) {
        self.created += 1;
        self.titles.push(format!("Лист {}", self.created));
        self.active = self.titles.len() - 1;
    }

    /// Закрыть вкладку; последняя оставшаяся не закрывается
    pub fn close(&mut self, index: usize) {
        if self.titles.len() <= 1 || index >= self.titles.len() {
            return;
        }
        self.titles.remove(index);
        if self.active > index || self.active >= self.titles.len() {
            self.active = self.active.saturating_sub(1);
        }
    }
}

/// ViewModel дизайнера шаблона
#[derive(Clone, Copy)]
pub struct DesignerViewModel {
    pub state: RwSignal<EditorState>,
    pub view_mode: RwSignal<ViewMode>,
    pub doc_tabs: RwSignal<DocumentTabs>,
    pub schema_text: RwSignal<String>,
    pub schema_error: RwSignal<Option<String>>,
    pub script_result: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    config: StoredValue<DesignerConfig>,
    tab_key: StoredValue<String>,
    tabs_store: AppGlobalContext,
}

impl DesignerViewModel {
    pub fn new(config: DesignerConfig, tab_key: String, tabs_store: AppGlobalContext) -> Self {
        Self {
            state: RwSignal::new(EditorState::new()),
            view_mode: RwSignal::new(ViewMode::Canvas),
            doc_tabs: RwSignal::new(DocumentTabs::default()),
            schema_text: RwSignal::new(FormSchema::empty().pretty()),
            schema_error: RwSignal::new(None),
            script_result: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            config: StoredValue::new(config),
            tab_key: StoredValue::new(tab_key),
            tabs_store,
        }
    }

    pub fn config(&self) -> DesignerConfig {
        self.config.get_value()
    }

    // ------------------------------------------------------------------
    // Загрузка / сохранение
    // ------------------------------------------------------------------

    /// Загрузить шаблон; несуществующий id создаёт пустой шаблон
    pub fn load(&self, id: String) {
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
            .and_then(|repo| repo.get_or_create(&id, chrono::Utc::now()));

        match result {
            Ok(template) => {
                self.state.update(|s| s.load(&template));
                self.schema_text.set(template.schema.pretty());
                self.schema_error.set(None);
                self.error.set(None);
                self.update_tab_title(&template.name);
            }
            Err(e) => self.error.set(Some(format!("Ошибка загрузки: {}", e))),
        }
        self.loading.set(false);
    }

    /// Сохранить шаблон; при успехе вызывается `on_saved`
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.schema_error.get_untracked().is_some() {
            self.error
                .set(Some("Исправьте ошибки в схеме перед сохранением".to_string()));
            return;
        }

        let result = self.config.with_value(open_repository).and_then(|repo| {
            self.state
                .try_update(|s| s.save(&repo, chrono::Utc::now()))
                .unwrap_or(Err(StorageError::Unavailable))
        });

        match result {
            Ok(id) => {
                log::info!("Template saved: {}", id);
                self.error.set(None);
                self.tab_key
                    .with_value(|key| self.tabs_store.set_tab_dirty(key, false));
                let name = self.state.with_untracked(|s| s.name.clone());
                self.update_tab_title(&name);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(format!("Ошибка сохранения: {}", e))),
        }
    }

    /// Текущее состояние как запись шаблона (для экспорта)
    pub fn current_template(&self) -> Template {
        self.state.with_untracked(|s| {
            let id = s.template_id.clone().unwrap_or_else(TemplateId::new_v4);
            s.to_template(id, None, chrono::Utc::now())
        })
    }

    fn update_tab_title(&self, name: &str) {
        let title = detail_tab_label(Template::element_name(), name);
        self.tab_key
            .with_value(|key| self.tabs_store.update_tab_title(key, &title));
    }

    // ------------------------------------------------------------------
    // Правки
    // ------------------------------------------------------------------

    /// Изменить состояние и пометить таб как изменённый
    pub fn modify(&self, f: impl FnOnce(&mut EditorState)) {
        self.state.update(f);
        self.tab_key
            .with_value(|key| self.tabs_store.set_tab_dirty(key, true));
    }

    pub fn set_name(&self, name: String) {
        self.modify(|s| s.set_name(name));
    }

    pub fn set_category(&self, tag: String) {
        self.modify(|s| s.set_category(TemplateCategory::from(tag)));
    }

    pub fn select(&self, id: Option<ElementId>) {
        self.state.update(|s| s.select_element(id));
    }

    pub fn insert(&self, element: Element) {
        self.modify(|s| {
            s.add_and_select(element);
        });
        self.view_mode.set(ViewMode::Canvas);
    }

    pub fn import_grid(&self, grid: &SheetGrid) {
        self.insert(to_table_element(grid));
        self.notice.set(Some(format!(
            "Импортировано: {} × {} из «{}»",
            grid.row_count(),
            grid.col_count(),
            grid.source
        )));
    }

    pub fn delete_selected(&self) {
        let Some(id) = self.state.with_untracked(|s| s.selected_id().cloned()) else {
            return;
        };
        self.modify(|s| s.remove_element(&id));
    }

    /// Изменить содержимое выделенного элемента
    pub fn update_selected_content(&self, f: impl FnOnce(&mut ElementContent)) {
        let Some(element) = self.state.with_untracked(|s| s.selected_element().cloned()) else {
            return;
        };
        let mut content = element.content;
        f(&mut content);
        self.modify(|s| s.update_element(&element.id, ElementPatch::content(content)));
    }

    pub fn update_selected_position(&self, f: impl FnOnce(&mut Position)) {
        let Some(element) = self.state.with_untracked(|s| s.selected_element().cloned()) else {
            return;
        };
        let mut position = element.position;
        f(&mut position);
        self.modify(|s| s.update_element(&element.id, ElementPatch::position(position)));
    }

    pub fn update_selected_size(&self, f: impl FnOnce(&mut Size)) {
        let Some(element) = self.state.with_untracked(|s| s.selected_element().cloned()) else {
            return;
        };
        let mut size = element.size;
        f(&mut size);
        self.modify(|s| s.update_element(&element.id, ElementPatch::size(size)));
    }

    /// Форматирование выделенного текста; без текстового элемента ничего не меняется
    pub fn format(&self, f: impl FnOnce(&mut EditorState) -> bool) {
        let changed = self.state.try_update(f).unwrap_or(false);
        if changed {
            self.tab_key
                .with_value(|key| self.tabs_store.set_tab_dirty(key, true));
        } else {
            self.notice
                .set(Some("Выделите текстовый элемент для форматирования".to_string()));
        }
    }

    // ------------------------------------------------------------------
    // Перетаскивание
    // ------------------------------------------------------------------

    pub fn begin_drag(&self, id: &ElementId, pointer: Position) {
        self.state.update(|s| s.begin_drag(id, pointer));
    }

    pub fn drag_to(&self, pointer: Position) {
        if self.state.with_untracked(EditorState::is_dragging) {
            self.modify(|s| s.drag_to(pointer));
        }
    }

    pub fn end_drag(&self) {
        if self.state.with_untracked(EditorState::is_dragging) {
            self.state.update(EditorState::end_drag);
        }
    }

    // ------------------------------------------------------------------
    // Схема, скрипт, примеры
    // ------------------------------------------------------------------

    /// Текст из редактора схемы: корректный JSON сразу применяется
    pub fn set_schema_text(&self, text: String) {
        match FormSchema::parse(&text) {
            Ok(schema) => {
                self.schema_error.set(None);
                self.modify(|s| s.set_schema(schema));
            }
            Err(e) => self.schema_error.set(Some(e.to_string())),
        }
        self.schema_text.set(text);
    }

    pub fn set_calculation_script(&self, text: String) {
        self.modify(|s| s.scripts.calculation = text);
    }

    /// Кнопка «Тест» редактора скриптов
    pub fn run_script_test(&self) {
        let tax_rate = self.config.with_value(|c| c.calculation.tax_rate);
        let result = test_run(tax_rate);
        self.script_result.set(Some(
            serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string()),
        ));
    }

    pub fn load_sample(&self, kind: SampleKind) {
        let sample = kind.build(chrono::Utc::now());
        self.modify(|s| s.apply_sample(&sample));
        self.schema_text.set(sample.schema.pretty());
        self.schema_error.set(None);
        self.notice
            .set(Some(format!("Загружен пример: {}", kind.display_name())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_tabs_add_and_close() {
        let mut tabs = DocumentTabs::default();
        assert_eq!(tabs.titles().len(), 3);
        assert_eq!(tabs.active(), 0);

        tabs.add();
        assert_eq!(tabs.titles()[3], "Лист 1");
        assert_eq!(tabs.active(), 3);

        tabs.close(1);
        assert_eq!(tabs.titles().len(), 3);
        assert_eq!(tabs.active(), 2);
        assert_eq!(tabs.titles()[2], "Лист 1");
    }

    #[test]
    fn test_document_tabs_keep_last() {
        let mut tabs = DocumentTabs::default();
        tabs.close(0);
        tabs.close(0);
        tabs.close(0);
        assert_eq!(tabs.titles(), &["Calculations".to_string()]);
        assert_eq!(tabs.active(), 0);
    }

    #[test]
    fn test_close_after_active_keeps_active() {
        let mut tabs = DocumentTabs::default();
        tabs.activate(1);
        tabs.close(2);
        assert_eq!(tabs.active(), 1);
        tabs.activate(7);
        assert_eq!(tabs.active(), 1);
    }
}
