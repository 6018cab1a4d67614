//! Фабрики элементов для меню вставки дизайнера.
//!
//! Все новые элементы появляются в точке (100, 100); размеры и начальное
//! содержимое зависят от типа.

use super::element::{
    CalculationFieldContent, ChartContent, ChartType, CheckboxFieldContent, ChoiceFieldContent,
    CurrencyFieldContent, Element, ElementContent, ElementKind, ImageContent, InputFieldContent,
    PercentageFieldContent, Position, ShapeContent, Size, TableContent, TextContent, TextFormat,
};

pub const INSERT_POSITION: Position = Position { x: 100.0, y: 100.0 };
pub const DEFAULT_TEXT: &str = "Текстовый элемент";

pub fn text() -> Element {
    Element::new(
        ElementContent::Text(TextContent {
            text: DEFAULT_TEXT.to_string(),
            format: TextFormat {
                font_size: Some(TextFormat::DEFAULT_FONT_SIZE),
                ..TextFormat::default()
            },
        }),
        INSERT_POSITION,
        Size::new(200.0, 50.0),
    )
}

pub fn chart(chart_type: ChartType) -> Element {
    Element::new(
        ElementContent::Chart(ChartContent::new(chart_type)),
        INSERT_POSITION,
        Size::new(300.0, 200.0),
    )
}

pub fn image(src: impl Into<String>) -> Element {
    Element::new(
        ElementContent::Image(ImageContent {
            src: src.into(),
            alt: None,
        }),
        INSERT_POSITION,
        Size::new(200.0, 150.0),
    )
}

pub fn shape() -> Element {
    Element::new(
        ElementContent::Shape(ShapeContent {
            shape_type: Some("rectangle".to_string()),
            background_color: Some("transparent".to_string()),
            border_width: Some(1.0),
            border_color: Some("black".to_string()),
            border_radius: None,
        }),
        INSERT_POSITION,
        Size::new(100.0, 100.0),
    )
}

// ============================================================================
// Tables
// ============================================================================

/// Варианты таблиц из меню «Таблица»
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableVariant {
    Basic,
    Data,
    Pivot,
    WithHeader,
    WithFooter,
}

impl TableVariant {
    pub fn display_name(&self) -> &'static str {
        match self {
            TableVariant::Basic => "Простая таблица",
            TableVariant::Data => "Таблица данных",
            TableVariant::Pivot => "Сводная таблица",
            TableVariant::WithHeader => "Таблица с заголовком",
            TableVariant::WithFooter => "Таблица с итогом",
        }
    }

    pub fn all() -> [TableVariant; 5] {
        [
            TableVariant::Basic,
            TableVariant::Data,
            TableVariant::Pivot,
            TableVariant::WithHeader,
            TableVariant::WithFooter,
        ]
    }
}

pub fn table(variant: TableVariant) -> Element {
    let (rows, cols, headers, footer) = match variant {
        TableVariant::Basic => (3, 3, false, false),
        TableVariant::Data => (4, 4, true, false),
        TableVariant::Pivot => (4, 3, true, false),
        TableVariant::WithHeader => (3, 3, true, false),
        TableVariant::WithFooter => (3, 3, false, true),
    };

    Element::new(
        ElementContent::Table(TableContent {
            rows: Some(rows),
            cols: Some(cols),
            data: vec![vec![String::new(); cols as usize]; rows as usize],
            headers,
            footer,
            border_width: None,
            border_color: None,
        }),
        INSERT_POSITION,
        Size::new(300.0, 150.0),
    )
}

// ============================================================================
// Form fields
// ============================================================================

/// Типы полей формы из меню «Поля формы»
pub fn form_field_kinds() -> [ElementKind; 8] {
    [
        ElementKind::TextField,
        ElementKind::NumberField,
        ElementKind::DateField,
        ElementKind::TimeField,
        ElementKind::DropdownField,
        ElementKind::CheckboxField,
        ElementKind::RadioField,
        ElementKind::FileField,
    ]
}

fn input(label: &str, placeholder: Option<&str>) -> InputFieldContent {
    InputFieldContent {
        label: label.to_string(),
        placeholder: placeholder.map(str::to_string),
    }
}

fn choice(label: &str, count: usize) -> ChoiceFieldContent {
    ChoiceFieldContent {
        label: label.to_string(),
        options: (1..=count).map(|i| format!("Вариант {}", i)).collect(),
    }
}

/// Поле формы заданного типа; для прочих типов — `None`
pub fn form_field(kind: ElementKind) -> Option<Element> {
    let content = match kind {
        ElementKind::TextField => {
            ElementContent::TextField(input("Текстовое поле", Some("Введите текст")))
        }
        ElementKind::NumberField => ElementContent::NumberField(input("Числовое поле", Some("0"))),
        ElementKind::DateField => ElementContent::DateField(input("Поле даты", None)),
        ElementKind::TimeField => ElementContent::TimeField(input("Поле времени", None)),
        ElementKind::DropdownField => ElementContent::DropdownField(choice("Выпадающий список", 3)),
        ElementKind::CheckboxField => ElementContent::CheckboxField(CheckboxFieldContent {
            label: "Флажок".to_string(),
            checked: false,
        }),
        ElementKind::RadioField => ElementContent::RadioField(choice("Переключатель", 2)),
        ElementKind::FileField => ElementContent::FileField(input("Загрузка файла", None)),
        _ => return None,
    };
    Some(Element::new(content, INSERT_POSITION, Size::new(200.0, 60.0)))
}

// ============================================================================
// Calculation fields
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationVariant {
    Basic,
    AdvancedFormula,
    Currency,
    Percentage,
}

impl CalculationVariant {
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationVariant::Basic => "Простой расчёт",
            CalculationVariant::AdvancedFormula => "Сложная формула",
            CalculationVariant::Currency => "Денежное поле",
            CalculationVariant::Percentage => "Процентное поле",
        }
    }

    pub fn all() -> [CalculationVariant; 4] {
        [
            CalculationVariant::Basic,
            CalculationVariant::AdvancedFormula,
            CalculationVariant::Currency,
            CalculationVariant::Percentage,
        ]
    }
}

pub fn calculation_field(variant: CalculationVariant) -> Element {
    let content = match variant {
        CalculationVariant::Basic => ElementContent::CalculationField(CalculationFieldContent {
            label: "Расчёт".to_string(),
            formula: "={{field1}} + {{field2}}".to_string(),
        }),
        CalculationVariant::AdvancedFormula => {
            ElementContent::CalculationField(CalculationFieldContent {
                label: "Формула".to_string(),
                formula: "=IF({{condition}}, {{value1}}, {{value2}})".to_string(),
            })
        }
        CalculationVariant::Currency => ElementContent::CurrencyField(CurrencyFieldContent {
            label: "Сумма".to_string(),
            symbol: "$".to_string(),
            value: "0.00".to_string(),
        }),
        CalculationVariant::Percentage => ElementContent::PercentageField(PercentageFieldContent {
            label: "Процент".to_string(),
            value: "0".to_string(),
        }),
    };
    Element::new(content, INSERT_POSITION, Size::new(200.0, 60.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults() {
        let element = text();
        assert_eq!(element.position, INSERT_POSITION);
        assert_eq!(element.size, Size::new(200.0, 50.0));
        let ElementContent::Text(content) = &element.content else {
            panic!("expected text");
        };
        assert_eq!(content.text, DEFAULT_TEXT);
        assert_eq!(content.format.font_size(), 16.0);
    }

    #[test]
    fn test_table_variants() {
        let ElementContent::Table(data) = table(TableVariant::Data).content else {
            panic!("expected table");
        };
        assert_eq!((data.row_count(), data.col_count()), (4, 4));
        assert!(data.headers);
        assert_eq!(data.data.len(), 4);

        let ElementContent::Table(pivot) = table(TableVariant::Pivot).content else {
            panic!("expected table");
        };
        assert_eq!((pivot.row_count(), pivot.col_count()), (4, 3));

        let ElementContent::Table(footer) = table(TableVariant::WithFooter).content else {
            panic!("expected table");
        };
        assert!(footer.footer && !footer.headers);
    }

    #[test]
    fn test_every_form_field_kind_has_factory() {
        for kind in form_field_kinds() {
            let element = form_field(kind).unwrap();
            assert_eq!(element.kind(), Some(kind));
            assert_eq!(element.size, Size::new(200.0, 60.0));
        }
        assert!(form_field(ElementKind::Text).is_none());
    }

    #[test]
    fn test_calculation_variants_map_to_types() {
        assert_eq!(
            calculation_field(CalculationVariant::AdvancedFormula).kind(),
            Some(ElementKind::CalculationField)
        );
        assert_eq!(
            calculation_field(CalculationVariant::Currency).kind(),
            Some(ElementKind::CurrencyField)
        );
        assert_eq!(
            calculation_field(CalculationVariant::Percentage).kind(),
            Some(ElementKind::PercentageField)
        );
    }

    #[test]
    fn test_new_elements_get_distinct_ids() {
        assert_ne!(shape().id, shape().id);
        assert_eq!(chart(ChartType::Pie).size, Size::new(300.0, 200.0));
    }
}
