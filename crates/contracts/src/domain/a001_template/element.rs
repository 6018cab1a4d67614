use crate::shared::value::display;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Geometry
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Element kinds
// ============================================================================

/// Тип элемента (значение поля `type` в JSON)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Table,
    Chart,
    Image,
    Shape,
    TextField,
    NumberField,
    DateField,
    TimeField,
    DropdownField,
    CheckboxField,
    RadioField,
    FileField,
    CalculationField,
    CurrencyField,
    PercentageField,
}

impl ElementKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Table => "table",
            ElementKind::Chart => "chart",
            ElementKind::Image => "image",
            ElementKind::Shape => "shape",
            ElementKind::TextField => "textField",
            ElementKind::NumberField => "numberField",
            ElementKind::DateField => "dateField",
            ElementKind::TimeField => "timeField",
            ElementKind::DropdownField => "dropdownField",
            ElementKind::CheckboxField => "checkboxField",
            ElementKind::RadioField => "radioField",
            ElementKind::FileField => "fileField",
            ElementKind::CalculationField => "calculationField",
            ElementKind::CurrencyField => "currencyField",
            ElementKind::PercentageField => "percentageField",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.tag() == tag)
    }

    /// Название для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Text => "Текст",
            ElementKind::Table => "Таблица",
            ElementKind::Chart => "Диаграмма",
            ElementKind::Image => "Изображение",
            ElementKind::Shape => "Фигура",
            ElementKind::TextField => "Текстовое поле",
            ElementKind::NumberField => "Числовое поле",
            ElementKind::DateField => "Поле даты",
            ElementKind::TimeField => "Поле времени",
            ElementKind::DropdownField => "Выпадающий список",
            ElementKind::CheckboxField => "Флажок",
            ElementKind::RadioField => "Переключатель",
            ElementKind::FileField => "Загрузка файла",
            ElementKind::CalculationField => "Вычисляемое поле",
            ElementKind::CurrencyField => "Денежное поле",
            ElementKind::PercentageField => "Процентное поле",
        }
    }

    pub fn all() -> [ElementKind; 16] {
        [
            ElementKind::Text,
            ElementKind::Table,
            ElementKind::Chart,
            ElementKind::Image,
            ElementKind::Shape,
            ElementKind::TextField,
            ElementKind::NumberField,
            ElementKind::DateField,
            ElementKind::TimeField,
            ElementKind::DropdownField,
            ElementKind::CheckboxField,
            ElementKind::RadioField,
            ElementKind::FileField,
            ElementKind::CalculationField,
            ElementKind::CurrencyField,
            ElementKind::PercentageField,
        ]
    }
}

// ============================================================================
// Content payloads
// ============================================================================

/// Форматирование текста; незаданные значения берутся по умолчанию при отрисовке
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
}

impl TextFormat {
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    pub fn font_size(&self) -> f64 {
        self.font_size
            .filter(|s| *s > 0.0)
            .unwrap_or(Self::DEFAULT_FONT_SIZE)
    }

    pub fn is_bold(&self) -> bool {
        matches!(self.font_weight.as_deref(), Some("bold") | Some("bolder"))
    }

    pub fn is_italic(&self) -> bool {
        self.font_style.as_deref() == Some("italic")
    }

    pub fn is_underlined(&self) -> bool {
        self.text_decoration.as_deref() == Some("underline")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContent {
    pub text: String,
    pub format: TextFormat,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    #[serde(deserialize_with = "deserialize_cells")]
    pub data: Vec<Vec<String>>,
    pub headers: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub footer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl TableContent {
    pub const DEFAULT_DIMENSION: usize = 3;
    pub const DEFAULT_BORDER_COLOR: &'static str = "#cccccc";

    pub fn row_count(&self) -> usize {
        self.rows
            .filter(|r| *r > 0)
            .map(|r| r as usize)
            .unwrap_or(Self::DEFAULT_DIMENSION)
    }

    pub fn col_count(&self) -> usize {
        self.cols
            .filter(|c| *c > 0)
            .map(|c| c as usize)
            .unwrap_or(Self::DEFAULT_DIMENSION)
    }

    /// Текст ячейки; вне заполненной сетки — пустая строка
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: String) {
        if self.data.len() <= row {
            self.data.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.data[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = value;
    }

    pub fn border_width(&self) -> f64 {
        self.border_width.filter(|w| *w > 0.0).unwrap_or(1.0)
    }

    pub fn border_color(&self) -> &str {
        self.border_color
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(Self::DEFAULT_BORDER_COLOR)
    }
}

/// Ячейки из localStorage могут быть числами (импорт из таблиц) — приводим к строкам
fn deserialize_cells<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<Vec<Value>>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|row| {
            row.unwrap_or_default()
                .iter()
                .map(|cell| match cell {
                    Value::Null => String::new(),
                    other => display(other),
                })
                .collect()
        })
        .collect())
}

/// Виды диаграмм из меню вставки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Area,
    Scatter,
    Radar,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Area => "area",
            ChartType::Scatter => "scatter",
            ChartType::Radar => "radar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChartType::Bar => "Гистограмма",
            ChartType::Line => "Линейная диаграмма",
            ChartType::Pie => "Круговая диаграмма",
            ChartType::Area => "Диаграмма с областями",
            ChartType::Scatter => "Точечная диаграмма",
            ChartType::Radar => "Лепестковая диаграмма",
        }
    }

    pub fn all() -> [ChartType; 6] {
        [
            ChartType::Bar,
            ChartType::Line,
            ChartType::Pie,
            ChartType::Area,
            ChartType::Scatter,
            ChartType::Radar,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
}

impl ChartContent {
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type: Some(chart_type.as_str().to_string()),
        }
    }

    pub fn chart_type(&self) -> &str {
        self.chart_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("bar")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageContent {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

impl ShapeContent {
    pub fn background_color(&self) -> &str {
        non_empty(&self.background_color).unwrap_or("transparent")
    }

    pub fn border_width(&self) -> f64 {
        self.border_width.filter(|w| *w > 0.0).unwrap_or(1.0)
    }

    pub fn border_color(&self) -> &str {
        non_empty(&self.border_color).unwrap_or("black")
    }

    pub fn border_radius(&self) -> f64 {
        self.border_radius.unwrap_or(0.0)
    }
}

/// Поле ввода с подписью (текст, число, дата, время, файл)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputFieldContent {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Поле с вариантами выбора (список, переключатель)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceFieldContent {
    pub label: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxFieldContent {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationFieldContent {
    pub label: String,
    pub formula: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyFieldContent {
    pub label: String,
    pub symbol: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PercentageFieldContent {
    pub label: String,
    pub value: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Типизированное содержимое элемента
#[derive(Debug, Clone, PartialEq)]
pub enum ElementContent {
    Text(TextContent),
    Table(TableContent),
    Chart(ChartContent),
    Image(ImageContent),
    Shape(ShapeContent),
    TextField(InputFieldContent),
    NumberField(InputFieldContent),
    DateField(InputFieldContent),
    TimeField(InputFieldContent),
    DropdownField(ChoiceFieldContent),
    CheckboxField(CheckboxFieldContent),
    RadioField(ChoiceFieldContent),
    FileField(InputFieldContent),
    CalculationField(CalculationFieldContent),
    CurrencyField(CurrencyFieldContent),
    PercentageField(PercentageFieldContent),
    /// Неизвестный тип: сохраняется как есть, чтобы не терять данные
    Unknown { type_tag: String, raw: Value },
}

impl ElementContent {
    pub fn kind(&self) -> Option<ElementKind> {
        Some(match self {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Table(_) => ElementKind::Table,
            ElementContent::Chart(_) => ElementKind::Chart,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Shape(_) => ElementKind::Shape,
            ElementContent::TextField(_) => ElementKind::TextField,
            ElementContent::NumberField(_) => ElementKind::NumberField,
            ElementContent::DateField(_) => ElementKind::DateField,
            ElementContent::TimeField(_) => ElementKind::TimeField,
            ElementContent::DropdownField(_) => ElementKind::DropdownField,
            ElementContent::CheckboxField(_) => ElementKind::CheckboxField,
            ElementContent::RadioField(_) => ElementKind::RadioField,
            ElementContent::FileField(_) => ElementKind::FileField,
            ElementContent::CalculationField(_) => ElementKind::CalculationField,
            ElementContent::CurrencyField(_) => ElementKind::CurrencyField,
            ElementContent::PercentageField(_) => ElementKind::PercentageField,
            ElementContent::Unknown { .. } => return None,
        })
    }

    pub fn type_tag(&self) -> &str {
        match self {
            ElementContent::Unknown { type_tag, .. } => type_tag,
            other => other.kind().map(|k| k.tag()).unwrap_or_default(),
        }
    }

    /// Подпись поля формы, если элемент — поле
    pub fn field_label(&self) -> Option<&str> {
        match self {
            ElementContent::TextField(c)
            | ElementContent::NumberField(c)
            | ElementContent::DateField(c)
            | ElementContent::TimeField(c)
            | ElementContent::FileField(c) => Some(&c.label),
            ElementContent::DropdownField(c) | ElementContent::RadioField(c) => Some(&c.label),
            ElementContent::CheckboxField(c) => Some(&c.label),
            ElementContent::CalculationField(c) => Some(&c.label),
            ElementContent::CurrencyField(c) => Some(&c.label),
            ElementContent::PercentageField(c) => Some(&c.label),
            _ => None,
        }
    }

    fn from_raw(type_tag: String, content: Value) -> Self {
        let content = match content {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        let Some(kind) = ElementKind::from_tag(&type_tag) else {
            return ElementContent::Unknown {
                type_tag,
                raw: content,
            };
        };

        let parsed = match kind {
            ElementKind::Text => serde_json::from_value(content.clone()).map(ElementContent::Text),
            ElementKind::Table => serde_json::from_value(content.clone()).map(ElementContent::Table),
            ElementKind::Chart => serde_json::from_value(content.clone()).map(ElementContent::Chart),
            ElementKind::Image => serde_json::from_value(content.clone()).map(ElementContent::Image),
            ElementKind::Shape => serde_json::from_value(content.clone()).map(ElementContent::Shape),
            ElementKind::TextField => {
                serde_json::from_value(content.clone()).map(ElementContent::TextField)
            }
            ElementKind::NumberField => {
                serde_json::from_value(content.clone()).map(ElementContent::NumberField)
            }
            ElementKind::DateField => {
                serde_json::from_value(content.clone()).map(ElementContent::DateField)
            }
            ElementKind::TimeField => {
                serde_json::from_value(content.clone()).map(ElementContent::TimeField)
            }
            ElementKind::DropdownField => {
                serde_json::from_value(content.clone()).map(ElementContent::DropdownField)
            }
            ElementKind::CheckboxField => {
                serde_json::from_value(content.clone()).map(ElementContent::CheckboxField)
            }
            ElementKind::RadioField => {
                serde_json::from_value(content.clone()).map(ElementContent::RadioField)
            }
            ElementKind::FileField => {
                serde_json::from_value(content.clone()).map(ElementContent::FileField)
            }
            ElementKind::CalculationField => {
                serde_json::from_value(content.clone()).map(ElementContent::CalculationField)
            }
            ElementKind::CurrencyField => {
                serde_json::from_value(content.clone()).map(ElementContent::CurrencyField)
            }
            ElementKind::PercentageField => {
                serde_json::from_value(content.clone()).map(ElementContent::PercentageField)
            }
        };

        parsed.unwrap_or_else(|e| {
            log::warn!("Element content of type '{}' kept as raw JSON: {}", type_tag, e);
            ElementContent::Unknown {
                type_tag,
                raw: content,
            }
        })
    }

    fn to_raw(&self) -> Value {
        let value = match self {
            ElementContent::Text(c) => serde_json::to_value(c),
            ElementContent::Table(c) => serde_json::to_value(c),
            ElementContent::Chart(c) => serde_json::to_value(c),
            ElementContent::Image(c) => serde_json::to_value(c),
            ElementContent::Shape(c) => serde_json::to_value(c),
            ElementContent::TextField(c)
            | ElementContent::NumberField(c)
            | ElementContent::DateField(c)
            | ElementContent::TimeField(c)
            | ElementContent::FileField(c) => serde_json::to_value(c),
            ElementContent::DropdownField(c) | ElementContent::RadioField(c) => {
                serde_json::to_value(c)
            }
            ElementContent::CheckboxField(c) => serde_json::to_value(c),
            ElementContent::CalculationField(c) => serde_json::to_value(c),
            ElementContent::CurrencyField(c) => serde_json::to_value(c),
            ElementContent::PercentageField(c) => serde_json::to_value(c),
            ElementContent::Unknown { raw, .. } => Ok(raw.clone()),
        };
        value.unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

// ============================================================================
// Element
// ============================================================================

/// Визуальный объект на холсте: позиция, размер, типизированное содержимое
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawElement", into = "RawElement")]
pub struct Element {
    pub id: ElementId,
    pub position: Position,
    pub size: Size,
    pub content: ElementContent,
}

impl Element {
    pub fn new(content: ElementContent, position: Position, size: Size) -> Self {
        Self {
            id: ElementId::new_v4(),
            position,
            size,
            content,
        }
    }

    pub fn kind(&self) -> Option<ElementKind> {
        self.content.kind()
    }
}

/// JSON-форма элемента в localStorage
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawElement {
    id: ElementId,
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    size: Size,
    #[serde(default)]
    content: Value,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        Self {
            id: raw.id,
            position: raw.position,
            size: raw.size,
            content: ElementContent::from_raw(raw.type_tag, raw.content),
        }
    }
}

impl From<Element> for RawElement {
    fn from(element: Element) -> Self {
        Self {
            id: element.id,
            type_tag: element.content.type_tag().to_string(),
            position: element.position,
            size: element.size,
            content: element.content.to_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_element_json_shape() {
        let element = Element {
            id: ElementId::new("e1"),
            position: Position::new(10.0, 20.0),
            size: Size::new(200.0, 50.0),
            content: ElementContent::Text(TextContent {
                text: "Привет".to_string(),
                format: TextFormat {
                    font_size: Some(24.0),
                    ..TextFormat::default()
                },
            }),
        };

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "e1",
                "type": "text",
                "position": {"x": 10.0, "y": 20.0},
                "size": {"width": 200.0, "height": 50.0},
                "content": {"text": "Привет", "format": {"fontSize": 24.0}}
            })
        );
    }

    #[test]
    fn test_table_cells_are_coerced_to_text() {
        let element: Element = serde_json::from_value(json!({
            "id": "t1",
            "type": "table",
            "position": {"x": 50, "y": 50},
            "size": {"width": 600, "height": 300},
            "content": {
                "rows": 2, "cols": 2,
                "data": [["Name", "Age"], ["John", 32]],
                "headers": true
            }
        }))
        .unwrap();

        let ElementContent::Table(table) = &element.content else {
            panic!("expected table");
        };
        assert_eq!(table.cell(1, 1), "32");
        assert_eq!(table.cell(5, 5), "");
        assert!(table.headers);
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let source = json!({
            "id": "u1",
            "type": "sticker",
            "position": {"x": 1.0, "y": 2.0},
            "size": {"width": 3.0, "height": 4.0},
            "content": {"emoji": "*"}
        });
        let element: Element = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(element.kind(), None);
        assert_eq!(element.content.type_tag(), "sticker");
        assert_eq!(serde_json::to_value(&element).unwrap(), source);
    }

    #[test]
    fn test_missing_content_uses_defaults() {
        let element: Element =
            serde_json::from_value(json!({"id": "c", "type": "chart"})).unwrap();
        let ElementContent::Chart(chart) = &element.content else {
            panic!("expected chart");
        };
        assert_eq!(chart.chart_type(), "bar");
        assert_eq!(element.position, Position::default());
    }

    #[test]
    fn test_malformed_content_falls_back_to_raw() {
        let element: Element = serde_json::from_value(json!({
            "id": "x",
            "type": "text",
            "content": {"text": 42}
        }))
        .unwrap();
        assert_eq!(element.kind(), None);
        assert_eq!(element.content.type_tag(), "text");
    }

    #[test]
    fn test_table_defaults_and_set_cell() {
        let mut table = TableContent::default();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.col_count(), 3);
        assert_eq!(table.border_color(), "#cccccc");

        table.set_cell(2, 1, "x".to_string());
        assert_eq!(table.cell(2, 1), "x");
        assert_eq!(table.data.len(), 3);
        assert_eq!(table.data[2], vec![String::new(), "x".to_string()]);
    }

    #[test]
    fn test_kind_tags_roundtrip() {
        for kind in ElementKind::all() {
            assert_eq!(ElementKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ElementKind::from_tag("unknown"), None);
    }
}
