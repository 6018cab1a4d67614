//! Состояние дизайнера шаблона: редактируемый шаблон, выделение, перетаскивание

use super::aggregate::{Scripts, Template, TemplateCategory, TemplateId, DEFAULT_TEMPLATE_NAME};
use super::element::{Element, ElementContent, ElementId, Position, Size, TextFormat};
use super::repository::TemplateRepository;
use crate::domain::common::EntityMetadata;
use crate::shared::form_schema::FormSchema;
use crate::shared::storage::{KeyValueStorage, StorageError};
use chrono::{DateTime, Utc};

/// Частичное обновление элемента
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementPatch {
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub content: Option<ElementContent>,
}

impl ElementPatch {
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn content(content: ElementContent) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct DragState {
    element_id: ElementId,
    last_pointer: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub template_id: Option<TemplateId>,
    pub name: String,
    pub category: TemplateCategory,
    elements: Vec<Element>,
    pub schema: FormSchema,
    pub scripts: Scripts,
    selected: Option<ElementId>,
    drag: Option<DragState>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            template_id: None,
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            category: TemplateCategory::General,
            elements: Vec::new(),
            schema: FormSchema::empty(),
            scripts: Scripts::default(),
            selected: None,
            drag: None,
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.as_ref().and_then(|id| self.element(id))
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn set_template_id(&mut self, id: Option<TemplateId>) {
        self.template_id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_category(&mut self, category: TemplateCategory) {
        self.category = category;
    }

    /// Заменить список элементов; выделение сбрасывается, если элемент пропал
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = Vec::with_capacity(elements.len());
        for element in elements {
            self.add_element(element);
        }
        self.drop_stale_selection();
    }

    pub fn set_schema(&mut self, schema: FormSchema) {
        self.schema = schema;
    }

    pub fn set_scripts(&mut self, scripts: Scripts) {
        self.scripts = scripts;
    }

    /// Добавить элемент в конец (поверх остальных); совпавший id заменяется новым
    pub fn add_element(&mut self, mut element: Element) -> ElementId {
        if self.element(&element.id).is_some() {
            element.id = ElementId::new_v4();
        }
        let id = element.id.clone();
        self.elements.push(element);
        id
    }

    pub fn add_and_select(&mut self, element: Element) -> ElementId {
        let id = self.add_element(element);
        self.selected = Some(id.clone());
        id
    }

    /// Обновить элемент; неизвестный id игнорируется
    pub fn update_element(&mut self, id: &ElementId, patch: ElementPatch) {
        let Some(element) = self.elements.iter_mut().find(|e| &e.id == id) else {
            return;
        };
        if let Some(position) = patch.position {
            element.position = position;
        }
        if let Some(size) = patch.size {
            element.size = size;
        }
        if let Some(content) = patch.content {
            element.content = content;
        }
    }

    pub fn remove_element(&mut self, id: &ElementId) {
        self.elements.retain(|e| &e.id != id);
        self.drop_stale_selection();
    }

    /// Выделить элемент; `None` или неизвестный id снимает выделение
    pub fn select_element(&mut self, id: Option<ElementId>) {
        self.selected = id.filter(|id| self.element(id).is_some());
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = &self.selected {
            if self.element(id).is_none() {
                self.selected = None;
            }
        }
        if let Some(drag) = &self.drag {
            if self.element(&drag.element_id).is_none() {
                self.drag = None;
            }
        }
    }

    // ------------------------------------------------------------------
    // Перетаскивание
    // ------------------------------------------------------------------

    /// Нажатие на элементе: выделить и запомнить точку
    pub fn begin_drag(&mut self, id: &ElementId, pointer: Position) {
        if self.element(id).is_none() {
            return;
        }
        self.selected = Some(id.clone());
        self.drag = Some(DragState {
            element_id: id.clone(),
            last_pointer: pointer,
        });
    }

    /// Движение указателя: сдвинуть элемент на дельту от прошлого события
    pub fn drag_to(&mut self, pointer: Position) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let dx = pointer.x - drag.last_pointer.x;
        let dy = pointer.y - drag.last_pointer.y;
        drag.last_pointer = pointer;

        let id = drag.element_id.clone();
        if let Some(element) = self.elements.iter_mut().find(|e| e.id == id) {
            element.position = element.position.offset(dx, dy);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    // ------------------------------------------------------------------
    // Загрузка и сохранение
    // ------------------------------------------------------------------

    /// Загрузить шаблон в редактор
    pub fn load(&mut self, template: &Template) {
        self.template_id = Some(template.id.clone());
        self.name = template.name.clone();
        self.category = template.category.clone();
        self.schema = template.schema.clone();
        self.scripts = template.scripts.clone();
        self.selected = None;
        self.drag = None;
        self.set_elements(template.elements.clone());
    }

    /// Подставить пример: элементы, схема и скрипты; id и название остаются
    pub fn apply_sample(&mut self, sample: &Template) {
        self.schema = sample.schema.clone();
        self.scripts = sample.scripts.clone();
        self.selected = None;
        self.drag = None;
        self.set_elements(sample.elements.clone());
    }

    /// Запись для сохранения; `createdAt` существующей записи сохраняется
    pub fn to_template(
        &self,
        id: TemplateId,
        existing: Option<&Template>,
        now: DateTime<Utc>,
    ) -> Template {
        let mut metadata = existing
            .map(|t| t.metadata.clone())
            .unwrap_or_else(|| EntityMetadata::at(now));
        metadata.touch_at(now);

        Template {
            id,
            name: self.name.clone(),
            category: self.category.clone(),
            elements: self.elements.clone(),
            schema: self.schema.clone(),
            scripts: self.scripts.clone(),
            metadata,
        }
    }

    /// Сохранить в репозиторий; без id назначается новый
    pub fn save<S: KeyValueStorage>(
        &mut self,
        repository: &TemplateRepository<S>,
        now: DateTime<Utc>,
    ) -> Result<TemplateId, StorageError> {
        let id = self.template_id.clone().unwrap_or_else(TemplateId::new_v4);
        let existing = repository.get(&id)?;
        repository.upsert(self.to_template(id.clone(), existing.as_ref(), now))?;
        self.template_id = Some(id.clone());
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Форматирование выделенного текста
    // ------------------------------------------------------------------

    fn update_selected_format(&mut self, apply: impl FnOnce(&mut TextFormat)) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        match &mut element.content {
            ElementContent::Text(text) => {
                apply(&mut text.format);
                true
            }
            _ => false,
        }
    }

    pub fn toggle_bold(&mut self) -> bool {
        self.update_selected_format(|format| {
            format.font_weight = Some(if format.is_bold() { "normal" } else { "bold" }.to_string());
        })
    }

    pub fn toggle_italic(&mut self) -> bool {
        self.update_selected_format(|format| {
            format.font_style =
                Some(if format.is_italic() { "normal" } else { "italic" }.to_string());
        })
    }

    pub fn toggle_underline(&mut self) -> bool {
        self.update_selected_format(|format| {
            format.text_decoration =
                Some(if format.is_underlined() { "none" } else { "underline" }.to_string());
        })
    }

    pub fn set_text_align(&mut self, align: &str) -> bool {
        self.update_selected_format(|format| format.text_align = Some(align.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_template::palette;
    use crate::shared::storage::MemoryStorage;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_add_update_remove() {
        let mut editor = EditorState::new();
        let id = editor.add_and_select(palette::text());
        assert_eq!(editor.selected_id(), Some(&id));

        editor.update_element(&id, ElementPatch::position(Position::new(5.0, 6.0)));
        assert_eq!(editor.element(&id).unwrap().position, Position::new(5.0, 6.0));

        editor.update_element(&ElementId::new("missing"), ElementPatch::size(Size::new(1.0, 1.0)));
        assert_eq!(editor.elements().len(), 1);

        editor.remove_element(&id);
        assert!(editor.elements().is_empty());
        assert_eq!(editor.selected_id(), None);
    }

    #[test]
    fn test_removing_other_element_keeps_selection() {
        let mut editor = EditorState::new();
        let first = editor.add_element(palette::shape());
        let second = editor.add_and_select(palette::shape());
        editor.remove_element(&first);
        assert_eq!(editor.selected_id(), Some(&second));
    }

    #[test]
    fn test_duplicate_ids_are_replaced() {
        let mut editor = EditorState::new();
        let element = palette::shape();
        let a = editor.add_element(element.clone());
        let b = editor.add_element(element);
        assert_ne!(a, b);
    }

    #[test]
    fn test_select_unknown_clears() {
        let mut editor = EditorState::new();
        editor.add_and_select(palette::text());
        editor.select_element(Some(ElementId::new("nope")));
        assert_eq!(editor.selected_id(), None);
    }

    #[test]
    fn test_drag_moves_by_pointer_delta() {
        let mut editor = EditorState::new();
        let id = editor.add_element(palette::text());

        editor.begin_drag(&id, Position::new(150.0, 120.0));
        assert_eq!(editor.selected_id(), Some(&id));
        editor.drag_to(Position::new(160.0, 125.0));
        editor.drag_to(Position::new(170.0, 115.0));
        editor.end_drag();
        editor.drag_to(Position::new(500.0, 500.0));

        assert_eq!(editor.element(&id).unwrap().position, Position::new(120.0, 95.0));
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_load_replaces_state() {
        let mut editor = EditorState::new();
        editor.add_and_select(palette::text());

        let mut template = Template::empty(TemplateId::new("t"), at(1));
        template.name = "Отчёт".to_string();
        template.elements.push(palette::shape());
        editor.load(&template);

        assert_eq!(editor.template_id, Some(TemplateId::new("t")));
        assert_eq!(editor.name, "Отчёт");
        assert_eq!(editor.elements().len(), 1);
        assert_eq!(editor.selected_id(), None);
    }

    #[test]
    fn test_to_template_preserves_created_at() {
        let mut editor = EditorState::new();
        editor.set_name("Счёт");
        let existing = Template::empty(TemplateId::new("t"), at(1));

        let saved = editor.to_template(TemplateId::new("t"), Some(&existing), at(5));
        assert_eq!(saved.created_at(), at(1));
        assert_eq!(saved.updated_at(), at(5));

        let fresh = editor.to_template(TemplateId::new("n"), None, at(5));
        assert_eq!(fresh.created_at(), at(5));
    }

    #[test]
    fn test_save_assigns_id_and_upserts() {
        let storage = MemoryStorage::new();
        let repo = TemplateRepository::new(&storage, "templates");
        let mut editor = EditorState::new();
        editor.add_element(palette::text());

        let id = editor.save(&repo, at(1)).unwrap();
        assert_eq!(editor.template_id.as_ref(), Some(&id));

        editor.set_name("Переименован");
        let same = editor.save(&repo, at(2)).unwrap();
        assert_eq!(same, id);

        let stored = repo.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Переименован");
        assert_eq!(stored[0].created_at(), at(1));
        assert_eq!(stored[0].updated_at(), at(2));
    }

    #[test]
    fn test_formatting_only_applies_to_text() {
        let mut editor = EditorState::new();
        assert!(!editor.toggle_bold());

        editor.add_and_select(palette::shape());
        assert!(!editor.toggle_bold());

        let id = editor.add_and_select(palette::text());
        assert!(editor.toggle_bold());
        assert!(editor.toggle_underline());
        assert!(editor.set_text_align("center"));

        let ElementContent::Text(text) = &editor.element(&id).unwrap().content else {
            panic!("expected text");
        };
        assert!(text.format.is_bold());
        assert!(text.format.is_underlined());
        assert_eq!(text.format.text_align.as_deref(), Some("center"));

        assert!(editor.toggle_bold());
        let ElementContent::Text(text) = &editor.element(&id).unwrap().content else {
            panic!("expected text");
        };
        assert!(!text.format.is_bold());
    }

    #[test]
    fn test_apply_sample_keeps_identity() {
        let mut editor = EditorState::new();
        editor.set_template_id(Some(TemplateId::new("mine")));
        editor.set_name("Мой");

        let mut sample = Template::empty(TemplateId::new("sample"), at(1));
        sample.name = "Пример".to_string();
        sample.elements.push(palette::text());
        sample.scripts = Scripts::with_calculation("def calculate(data):\n    return data");
        editor.apply_sample(&sample);

        assert_eq!(editor.template_id, Some(TemplateId::new("mine")));
        assert_eq!(editor.name, "Мой");
        assert_eq!(editor.elements().len(), 1);
        assert!(editor.scripts.has_calculation());
    }
}
