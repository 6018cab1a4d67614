//! Встроенные примеры шаблонов (меню «Загрузить пример»)

use super::aggregate::{Scripts, Template, TemplateCategory, TemplateId};
use super::element::{
    ChartContent, ChartType, Element, ElementContent, Position, Size, TableContent, TextContent,
    TextFormat,
};
use crate::shared::calculation::DEFAULT_SCRIPT;
use crate::shared::form_schema::FormSchema;
use chrono::{DateTime, Utc};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Invoice,
    Report,
    Form,
    LightPole,
}

impl SampleKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SampleKind::Invoice => "Счёт",
            SampleKind::Report => "Отчёт",
            SampleKind::Form => "Анкета",
            SampleKind::LightPole => "Расчёт опоры освещения",
        }
    }

    pub fn all() -> [SampleKind; 4] {
        [
            SampleKind::Invoice,
            SampleKind::Report,
            SampleKind::Form,
            SampleKind::LightPole,
        ]
    }

    pub fn build(&self, now: DateTime<Utc>) -> Template {
        match self {
            SampleKind::Invoice => invoice(now),
            SampleKind::Report => report(now),
            SampleKind::Form => form(now),
            SampleKind::LightPole => light_pole(now),
        }
    }
}

fn text(x: f64, y: f64, width: f64, height: f64, body: &str, format: TextFormat) -> Element {
    Element::new(
        ElementContent::Text(TextContent {
            text: body.to_string(),
            format,
        }),
        Position::new(x, y),
        Size::new(width, height),
    )
}

fn heading(size: f64) -> TextFormat {
    TextFormat {
        font_size: Some(size),
        font_weight: Some("bold".to_string()),
        ..TextFormat::default()
    }
}

fn table(x: f64, y: f64, width: f64, height: f64, rows: &[&[&str]]) -> Element {
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    let cols = data.iter().map(Vec::len).max().unwrap_or(0);
    Element::new(
        ElementContent::Table(TableContent {
            rows: Some(data.len() as u32),
            cols: Some(cols as u32),
            data,
            headers: true,
            ..TableContent::default()
        }),
        Position::new(x, y),
        Size::new(width, height),
    )
}

fn sample(
    id: &str,
    name: &str,
    category: TemplateCategory,
    elements: Vec<Element>,
    schema: FormSchema,
    scripts: Scripts,
    now: DateTime<Utc>,
) -> Template {
    let mut template = Template::empty(TemplateId::new(id), now);
    template.name = name.to_string();
    template.category = category;
    template.elements = elements;
    template.schema = schema;
    template.scripts = scripts;
    template
}

fn invoice(now: DateTime<Utc>) -> Template {
    let schema = FormSchema::empty()
        .with_property("customer", json!({"type": "string", "title": "Покупатель"}))
        .with_property("item", json!({"type": "string", "title": "Товар"}))
        .with_property(
            "quantity",
            json!({"type": "integer", "title": "Количество", "minimum": 1}),
        )
        .with_property(
            "price",
            json!({"type": "number", "title": "Цена", "minimum": 0}),
        )
        .with_property(
            "discountRate",
            json!({"type": "number", "title": "Скидка (доля)", "minimum": 0, "maximum": 1}),
        )
        .with_required(&["customer", "quantity", "price"]);

    let elements = vec![
        text(50.0, 40.0, 400.0, 50.0, "СЧЁТ", heading(28.0)),
        text(
            50.0,
            100.0,
            400.0,
            30.0,
            "Покупатель: {{customer}}",
            TextFormat::default(),
        ),
        table(
            50.0,
            150.0,
            690.0,
            90.0,
            &[
                &["Товар", "Количество", "Цена", "Сумма"],
                &["{{item}}", "{{quantity}}", "{{price}}", "{{subtotal}}"],
            ],
        ),
        text(
            450.0,
            270.0,
            290.0,
            120.0,
            "Сумма: {{subtotal}}\nНалог: {{tax}}\nСкидка: {{discount}}\nИтого: {{total}}",
            TextFormat {
                text_align: Some("right".to_string()),
                ..TextFormat::default()
            },
        ),
    ];

    sample(
        "sample-invoice",
        "Счёт",
        TemplateCategory::Invoice,
        elements,
        schema,
        Scripts::with_calculation(DEFAULT_SCRIPT),
        now,
    )
}

fn report(now: DateTime<Utc>) -> Template {
    let schema = FormSchema::empty()
        .with_property("title", json!({"type": "string", "title": "Заголовок"}))
        .with_property("author", json!({"type": "string", "title": "Автор"}))
        .with_property("date", json!({"type": "string", "format": "date", "title": "Дата"}))
        .with_property(
            "summary",
            json!({"type": "string", "title": "Резюме", "maxLength": 2000}),
        )
        .with_required(&["title"]);

    let elements = vec![
        text(50.0, 40.0, 690.0, 50.0, "{{title}}", heading(24.0)),
        text(
            50.0,
            100.0,
            690.0,
            30.0,
            "{{author}}, {{date}}",
            TextFormat {
                color: Some("#666666".to_string()),
                ..TextFormat::default()
            },
        ),
        text(50.0, 150.0, 690.0, 200.0, "{{summary}}", TextFormat::default()),
        Element::new(
            ElementContent::Chart(ChartContent::new(ChartType::Bar)),
            Position::new(50.0, 380.0),
            Size::new(690.0, 300.0),
        ),
    ];

    sample(
        "sample-report",
        "Отчёт",
        TemplateCategory::Report,
        elements,
        schema,
        Scripts::default(),
        now,
    )
}

fn form(now: DateTime<Utc>) -> Template {
    let schema = FormSchema::empty()
        .with_property("name", json!({"type": "string", "title": "Имя"}))
        .with_property(
            "email",
            json!({"type": "string", "format": "email", "title": "Email"}),
        )
        .with_property(
            "topic",
            json!({"type": "string", "title": "Тема", "enum": ["Вопрос", "Отзыв", "Жалоба"]}),
        )
        .with_property(
            "message",
            json!({"type": "string", "title": "Сообщение", "maxLength": 1000}),
        )
        .with_property(
            "subscribe",
            json!({"type": "boolean", "title": "Подписаться на новости"}),
        )
        .with_required(&["name", "email"]);

    let elements = vec![
        text(50.0, 40.0, 690.0, 50.0, "Обращение", heading(24.0)),
        text(
            50.0,
            110.0,
            690.0,
            120.0,
            "Имя: {{name}}\nEmail: {{email}}\nТема: {{topic}}\nПодписка: {{subscribe}}",
            TextFormat::default(),
        ),
        text(50.0, 250.0, 690.0, 200.0, "{{message}}", TextFormat::default()),
    ];

    sample(
        "sample-form",
        "Анкета",
        TemplateCategory::Form,
        elements,
        schema,
        Scripts::default(),
        now,
    )
}

fn light_pole(now: DateTime<Utc>) -> Template {
    let number = |title: &str, default: f64| json!({"type": "number", "title": title, "default": default});
    let schema = FormSchema::empty()
        .with_property("project", json!({"type": "string", "title": "Проект"}))
        .with_property("engineer", json!({"type": "string", "title": "Инженер"}))
        .with_property("poleHeight", number("Высота опоры, фут", 60.0))
        .with_property("poleTopDiameter", number("Диаметр вверху, дюйм", 4.0))
        .with_property("poleBottomDiameter", number("Диаметр внизу, дюйм", 4.0))
        .with_property("luminairesEPA", number("EPA светильников, фут²", 2.0))
        .with_property("armsEPA", number("EPA кронштейнов, фут²", 1.0))
        .with_property("velocity", number("Скорость ветра, миль/ч", 150.0))
        .with_property("gFactor", number("Коэффициент порывов", 0.85))
        .with_property("soilPressure", number("Давление на грунт, psf", 100.0))
        .with_required(&["poleHeight", "velocity"]);

    let elements = vec![
        text(
            40.0,
            30.0,
            714.0,
            40.0,
            "Расчёт опоры освещения",
            heading(22.0),
        ),
        text(
            40.0,
            80.0,
            714.0,
            30.0,
            "Проект: {{project}}    Инженер: {{engineer}}",
            TextFormat::default(),
        ),
        table(
            40.0,
            130.0,
            714.0,
            220.0,
            &[
                &["Параметр", "Значение"],
                &["Высота опоры", "{{poleHeight}}"],
                &["Диаметр вверху / внизу", "{{poleTopDiameter}} / {{poleBottomDiameter}}"],
                &["EPA светильников", "{{luminairesEPA}}"],
                &["EPA кронштейнов", "{{armsEPA}}"],
                &["Скорость ветра", "{{velocity}}"],
                &["Коэффициент порывов", "{{gFactor}}"],
                &["Давление на грунт", "{{soilPressure}}"],
            ],
        ),
        text(
            40.0,
            380.0,
            714.0,
            100.0,
            "Результаты\nПоперечная сила в основании: 411.98 фунт\nИзгибающий момент: 6132.33 фунт·фут\nГлубина фундамента: 10.00 фут",
            TextFormat::default(),
        ),
    ];

    sample(
        "sample-light-pole",
        "Расчёт опоры освещения",
        TemplateCategory::Engineering,
        elements,
        schema,
        Scripts::default(),
        now,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::calculation::calculate;
    use crate::shared::placeholders::fill;
    use crate::shared::value::FormData;

    #[test]
    fn test_every_sample_builds() {
        let now = Utc::now();
        for kind in SampleKind::all() {
            let template = kind.build(now);
            assert!(!template.elements.is_empty(), "{:?}", kind);
            assert!(template.schema.has_properties(), "{:?}", kind);
        }
    }

    #[test]
    fn test_invoice_totals_flow_into_text() {
        let template = SampleKind::Invoice.build(Utc::now());
        let mut data = FormData::new();
        data.insert("quantity".into(), json!(2));
        data.insert("price".into(), json!(25));

        let calculated = calculate(&template, &data, 0.08);
        let ElementContent::Text(totals) = &template.elements[3].content else {
            panic!("expected totals text");
        };
        let filled = fill(&totals.text, &calculated);
        assert!(filled.contains("Сумма: 50"));
        assert!(filled.contains("Итого: 54"));
    }
}
