//! Модель отрисовки элементов: общая для холста дизайнера и предпросмотра.
//!
//! В режиме предпросмотра `{{field}}` заменяются данными формы, на холсте
//! текст показывается как есть.

use crate::domain::a001_template::element::{ChartType, Element, ElementContent, TextFormat};
use crate::shared::config::CanvasConfig;
use crate::shared::placeholders::fill;
use crate::shared::value::{display, FormData};

pub const FALLBACK_IMAGE: &str = "/colorful-abstract-flow.png";
pub const DEFAULT_ALT: &str = "Image";
pub const CANVAS_TEXT_PLACEHOLDER: &str = "Текстовый элемент";
pub const UNKNOWN_ELEMENT: &str = "Неизвестный тип элемента";

/// Режим отрисовки
#[derive(Debug, Clone, Copy)]
pub enum RenderMode<'a> {
    Canvas,
    Preview(&'a FormData),
}

impl RenderMode<'_> {
    fn text(&self, text: &str) -> String {
        match self {
            RenderMode::Canvas => text.to_string(),
            RenderMode::Preview(data) => fill(text, data),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub text: String,
    pub header: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldControl {
    Input {
        input_type: &'static str,
        placeholder: String,
        value: String,
    },
    Select {
        options: Vec<String>,
    },
    Radio {
        options: Vec<String>,
    },
    Checkbox {
        checked: bool,
    },
    Output {
        text: String,
    },
    Affixed {
        prefix: Option<String>,
        value: String,
        suffix: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBody {
    Text {
        text: String,
        style: String,
    },
    Table {
        rows: Vec<Vec<RenderedCell>>,
        cell_style: String,
    },
    Chart {
        chart_type: String,
        caption: String,
    },
    Image {
        src: String,
        alt: String,
    },
    ImagePlaceholder,
    Shape,
    Field {
        label: String,
        control: FieldControl,
    },
    Unknown {
        type_tag: String,
    },
}

/// Абсолютно позиционированный блок на странице
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedElement {
    pub id: String,
    pub box_style: String,
    pub body: RenderedBody,
}

/// Стиль страницы (A4 при 96 dpi по умолчанию)
pub fn page_style(canvas: &CanvasConfig) -> String {
    format!(
        "position:relative;width:{}px;height:{}px;background:#ffffff;",
        canvas.width, canvas.height
    )
}

fn text_style(format: &TextFormat) -> String {
    format!(
        "font-family:{};font-size:{}px;font-weight:{};font-style:{};text-align:{};color:{};text-decoration:{};white-space:pre-wrap;",
        format.font_family.as_deref().unwrap_or("inherit"),
        format.font_size(),
        format.font_weight.as_deref().unwrap_or("normal"),
        format.font_style.as_deref().unwrap_or("normal"),
        format.text_align.as_deref().unwrap_or("left"),
        format.color.as_deref().unwrap_or("inherit"),
        format.text_decoration.as_deref().unwrap_or("none"),
    )
}

fn chart_caption(chart_type: &str, mode: &RenderMode) -> String {
    match mode {
        RenderMode::Preview(_) => format!("Диаграмма: {}", chart_type),
        RenderMode::Canvas => ChartType::all()
            .into_iter()
            .find(|t| t.as_str() == chart_type)
            .map(|t| t.display_name().to_string())
            .unwrap_or_else(|| format!("Диаграмма: {}", chart_type)),
    }
}

fn field_value(label: &str, mode: &RenderMode) -> String {
    match mode {
        RenderMode::Canvas => String::new(),
        RenderMode::Preview(data) => data.get(label).map(display).unwrap_or_default(),
    }
}

fn input(input_type: &'static str, placeholder: &Option<String>, value: String) -> FieldControl {
    FieldControl::Input {
        input_type,
        placeholder: placeholder.clone().unwrap_or_default(),
        value,
    }
}

/// Отрисовка одного элемента
pub fn render_element(element: &Element, mode: RenderMode) -> RenderedElement {
    let mut box_style = format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
        element.position.x, element.position.y, element.size.width, element.size.height
    );

    let body = match &element.content {
        ElementContent::Text(content) => {
            let text = match mode {
                RenderMode::Canvas if content.text.is_empty() => {
                    CANVAS_TEXT_PLACEHOLDER.to_string()
                }
                _ => mode.text(&content.text),
            };
            RenderedBody::Text {
                text,
                style: text_style(&content.format),
            }
        }
        ElementContent::Table(table) => {
            let rows = (0..table.row_count())
                .map(|row| {
                    (0..table.col_count())
                        .map(|col| RenderedCell {
                            text: mode.text(table.cell(row, col)),
                            header: row == 0 && table.headers,
                        })
                        .collect()
                })
                .collect();
            RenderedBody::Table {
                rows,
                cell_style: format!(
                    "border:{}px solid {};padding:4px;",
                    table.border_width(),
                    table.border_color()
                ),
            }
        }
        ElementContent::Chart(chart) => RenderedBody::Chart {
            chart_type: chart.chart_type().to_string(),
            caption: chart_caption(chart.chart_type(), &mode),
        },
        ElementContent::Image(image) => {
            let src = mode.text(&image.src);
            let alt = image
                .alt
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| DEFAULT_ALT.to_string());
            match mode {
                RenderMode::Canvas if src.is_empty() => RenderedBody::ImagePlaceholder,
                _ if src.is_empty() => RenderedBody::Image {
                    src: FALLBACK_IMAGE.to_string(),
                    alt,
                },
                _ => RenderedBody::Image { src, alt },
            }
        }
        ElementContent::Shape(shape) => {
            box_style.push_str(&format!(
                "background-color:{};border:{}px solid {};border-radius:{}px;",
                shape.background_color(),
                shape.border_width(),
                shape.border_color(),
                shape.border_radius()
            ));
            RenderedBody::Shape
        }
        ElementContent::TextField(c) => field(
            &c.label,
            input("text", &c.placeholder, field_value(&c.label, &mode)),
        ),
        ElementContent::NumberField(c) => field(
            &c.label,
            input("number", &c.placeholder, field_value(&c.label, &mode)),
        ),
        ElementContent::DateField(c) => field(
            &c.label,
            input("date", &c.placeholder, field_value(&c.label, &mode)),
        ),
        ElementContent::TimeField(c) => field(
            &c.label,
            input("time", &c.placeholder, field_value(&c.label, &mode)),
        ),
        ElementContent::FileField(c) => {
            field(&c.label, input("file", &None, String::new()))
        }
        ElementContent::DropdownField(c) => field(
            &c.label,
            FieldControl::Select {
                options: c.options.clone(),
            },
        ),
        ElementContent::RadioField(c) => field(
            &c.label,
            FieldControl::Radio {
                options: c.options.clone(),
            },
        ),
        ElementContent::CheckboxField(c) => field(
            &c.label,
            FieldControl::Checkbox { checked: c.checked },
        ),
        ElementContent::CalculationField(c) => field(
            &c.label,
            FieldControl::Output {
                text: mode.text(&c.formula),
            },
        ),
        ElementContent::CurrencyField(c) => field(
            &c.label,
            FieldControl::Affixed {
                prefix: Some(c.symbol.clone()),
                value: mode.text(&c.value),
                suffix: None,
            },
        ),
        ElementContent::PercentageField(c) => field(
            &c.label,
            FieldControl::Affixed {
                prefix: None,
                value: mode.text(&c.value),
                suffix: Some("%".to_string()),
            },
        ),
        ElementContent::Unknown { type_tag, .. } => RenderedBody::Unknown {
            type_tag: type_tag.clone(),
        },
    };

    RenderedElement {
        id: element.id.to_string(),
        box_style,
        body,
    }
}

fn field(label: &str, control: FieldControl) -> RenderedBody {
    RenderedBody::Field {
        label: label.to_string(),
        control,
    }
}

/// Отрисовка всех элементов в порядке z-order
pub fn render_page(elements: &[Element], mode: RenderMode) -> Vec<RenderedElement> {
    elements.iter().map(|e| render_element(e, mode)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_template::element::{
        CheckboxFieldContent, ChoiceFieldContent, CurrencyFieldContent, ElementId, ImageContent,
        InputFieldContent, PercentageFieldContent, Position, Size, TableContent, TextContent,
    };
    use crate::domain::a001_template::palette;
    use serde_json::json;

    fn data(value: serde_json::Value) -> FormData {
        value.as_object().cloned().unwrap()
    }

    fn element(content: ElementContent) -> Element {
        Element {
            id: ElementId::new("e"),
            position: Position::new(10.0, 20.0),
            size: Size::new(100.0, 40.0),
            content,
        }
    }

    #[test]
    fn test_box_geometry() {
        let text = element(ElementContent::Text(TextContent::default()));
        let rendered = render_element(&text, RenderMode::Canvas);
        assert_eq!(
            rendered.box_style,
            "position:absolute;left:10px;top:20px;width:100px;height:40px;"
        );
    }

    #[test]
    fn test_text_preview_and_canvas() {
        let text = element(ElementContent::Text(TextContent {
            text: "Итого: {{total}}".to_string(),
            format: TextFormat::default(),
        }));
        let d = data(json!({"total": 54}));

        let RenderedBody::Text { text: shown, style } = render_element(&text, RenderMode::Preview(&d)).body else {
            panic!("expected text");
        };
        assert_eq!(shown, "Итого: 54");
        assert!(style.contains("font-size:16px;"));

        let RenderedBody::Text { text: raw, .. } = render_element(&text, RenderMode::Canvas).body else {
            panic!("expected text");
        };
        assert_eq!(raw, "Итого: {{total}}");

        let empty = element(ElementContent::Text(TextContent::default()));
        let RenderedBody::Text { text: placeholder, .. } = render_element(&empty, RenderMode::Canvas).body else {
            panic!("expected text");
        };
        assert_eq!(placeholder, CANVAS_TEXT_PLACEHOLDER);
    }

    #[test]
    fn test_table_headers_and_fill() {
        let table = element(ElementContent::Table(TableContent {
            rows: Some(2),
            cols: Some(2),
            data: vec![
                vec!["Товар".into(), "Цена".into()],
                vec!["{{item}}".into(), "{{price}}".into()],
            ],
            headers: true,
            ..TableContent::default()
        }));
        let d = data(json!({"item": "Стол", "price": 100}));
        let RenderedBody::Table { rows, cell_style } = render_element(&table, RenderMode::Preview(&d)).body else {
            panic!("expected table");
        };
        assert!(rows[0][0].header);
        assert!(!rows[1][0].header);
        assert_eq!(rows[1][0].text, "Стол");
        assert_eq!(rows[1][1].text, "100");
        assert_eq!(cell_style, "border:1px solid #cccccc;padding:4px;");
    }

    #[test]
    fn test_image_fallback() {
        let image = element(ElementContent::Image(ImageContent::default()));
        let d = FormData::new();
        assert_eq!(
            render_element(&image, RenderMode::Preview(&d)).body,
            RenderedBody::Image {
                src: FALLBACK_IMAGE.to_string(),
                alt: DEFAULT_ALT.to_string()
            }
        );
        assert_eq!(
            render_element(&image, RenderMode::Canvas).body,
            RenderedBody::ImagePlaceholder
        );
    }

    #[test]
    fn test_chart_caption() {
        let chart = palette::chart(ChartType::Line);
        let d = FormData::new();
        let RenderedBody::Chart { caption, .. } = render_element(&chart, RenderMode::Preview(&d)).body else {
            panic!("expected chart");
        };
        assert_eq!(caption, "Диаграмма: line");
    }

    #[test]
    fn test_shape_styles_box() {
        let rendered = render_element(&palette::shape(), RenderMode::Canvas);
        assert!(rendered
            .box_style
            .ends_with("background-color:transparent;border:1px solid black;border-radius:0px;"));
    }

    #[test]
    fn test_unknown_element() {
        let unknown = element(ElementContent::Unknown {
            type_tag: "sticker".into(),
            raw: json!({}),
        });
        assert_eq!(
            render_element(&unknown, RenderMode::Canvas).body,
            RenderedBody::Unknown {
                type_tag: "sticker".into()
            }
        );
    }

    #[test]
    fn test_input_field_value_by_label() {
        let field = element(ElementContent::TextField(InputFieldContent {
            label: "Имя клиента".to_string(),
            placeholder: Some("Введите имя".to_string()),
        }));
        let d = data(json!({"Имя клиента": "Иванов", "name": "не то"}));

        assert_eq!(
            render_element(&field, RenderMode::Preview(&d)).body,
            RenderedBody::Field {
                label: "Имя клиента".to_string(),
                control: FieldControl::Input {
                    input_type: "text",
                    placeholder: "Введите имя".to_string(),
                    value: "Иванов".to_string(),
                },
            }
        );
        assert_eq!(
            render_element(&field, RenderMode::Canvas).body,
            RenderedBody::Field {
                label: "Имя клиента".to_string(),
                control: FieldControl::Input {
                    input_type: "text",
                    placeholder: "Введите имя".to_string(),
                    value: String::new(),
                },
            }
        );

        let number = element(ElementContent::NumberField(InputFieldContent {
            label: "Количество".to_string(),
            placeholder: None,
        }));
        let d = data(json!({"Количество": 3}));
        let RenderedBody::Field { control, .. } = render_element(&number, RenderMode::Preview(&d)).body
        else {
            panic!("expected field");
        };
        assert_eq!(
            control,
            FieldControl::Input {
                input_type: "number",
                placeholder: String::new(),
                value: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_select_and_checkbox_in_both_modes() {
        let select = element(ElementContent::DropdownField(ChoiceFieldContent {
            label: "Город".to_string(),
            options: vec!["Москва".to_string(), "Казань".to_string()],
        }));
        let checkbox = element(ElementContent::CheckboxField(CheckboxFieldContent {
            label: "Согласие".to_string(),
            checked: true,
        }));
        let d = data(json!({"Город": "Казань", "Согласие": false}));

        for mode in [RenderMode::Canvas, RenderMode::Preview(&d)] {
            assert_eq!(
                render_element(&select, mode).body,
                RenderedBody::Field {
                    label: "Город".to_string(),
                    control: FieldControl::Select {
                        options: vec!["Москва".to_string(), "Казань".to_string()],
                    },
                }
            );
            assert_eq!(
                render_element(&checkbox, mode).body,
                RenderedBody::Field {
                    label: "Согласие".to_string(),
                    control: FieldControl::Checkbox { checked: true },
                }
            );
        }
    }

    #[test]
    fn test_affixed_fields() {
        let currency = element(ElementContent::CurrencyField(CurrencyFieldContent {
            label: "Сумма".to_string(),
            symbol: "₽".to_string(),
            value: "{{total}}".to_string(),
        }));
        let percent = element(ElementContent::PercentageField(PercentageFieldContent {
            label: "Скидка".to_string(),
            value: "{{discount}}".to_string(),
        }));
        let d = data(json!({"total": 1200, "discount": 5}));

        assert_eq!(
            render_element(&currency, RenderMode::Preview(&d)).body,
            RenderedBody::Field {
                label: "Сумма".to_string(),
                control: FieldControl::Affixed {
                    prefix: Some("₽".to_string()),
                    value: "1200".to_string(),
                    suffix: None,
                },
            }
        );
        let RenderedBody::Field { control, .. } = render_element(&currency, RenderMode::Canvas).body
        else {
            panic!("expected field");
        };
        assert_eq!(
            control,
            FieldControl::Affixed {
                prefix: Some("₽".to_string()),
                value: "{{total}}".to_string(),
                suffix: None,
            }
        );

        let RenderedBody::Field { control, .. } = render_element(&percent, RenderMode::Preview(&d)).body
        else {
            panic!("expected field");
        };
        assert_eq!(
            control,
            FieldControl::Affixed {
                prefix: None,
                value: "5".to_string(),
                suffix: Some("%".to_string()),
            }
        );
    }

    #[test]
    fn test_page_style() {
        let canvas = CanvasConfig {
            width: 794.0,
            height: 1123.0,
        };
        assert_eq!(
            page_style(&canvas),
            "position:relative;width:794px;height:1123px;background:#ffffff;"
        );
    }
}
