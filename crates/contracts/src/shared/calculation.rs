//! Расчёт производных полей формы.
//!
//! Скрипт шаблона не интерпретируется: его наличие включает фиксированный
//! набор правил для полей quantity / price / subtotal / tax / discountRate.

use crate::domain::a001_template::Template;
use crate::shared::value::{number_value, to_number, FormData};
use serde_json::{json, Value};
use thiserror::Error;

/// Скрипт по умолчанию в редакторе скриптов
pub const DEFAULT_SCRIPT: &str = r#"def calculate(data):
    # Get input values
    quantity = data.get("quantity", 0)
    price = data.get("price", 0)

    # Calculate subtotal
    subtotal = quantity * price

    # Apply tax
    tax_rate = 0.08  # 8% tax
    tax = subtotal * tax_rate

    # Calculate total
    total = subtotal + tax

    # Set calculated values
    data["subtotal"] = subtotal
    data["tax"] = tax
    data["total"] = total

    return data
"#;

/// Заготовка скрипта для шаблона, созданного со страницы «Создать шаблон»
pub const STARTER_SCRIPT: &str = "def calculate(data):\n    # Your calculation code here\n    return data";

#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("Поле '{field}' не является числом")]
    NotANumber { field: String },
}

fn number(data: &FormData, field: &str) -> Result<Option<f64>, CalculationError> {
    match data.get(field) {
        None => Ok(None),
        Some(value) => to_number(value)
            .map(Some)
            .ok_or_else(|| CalculationError::NotANumber {
                field: field.to_string(),
            }),
    }
}

/// Расчёт с явной ошибкой
pub fn try_calculate(
    template: &Template,
    data: &FormData,
    tax_rate: f64,
) -> Result<FormData, CalculationError> {
    let mut result = data.clone();
    if !template.scripts.has_calculation() {
        return Ok(result);
    }

    if let (Some(quantity), Some(price)) = (number(&result, "quantity")?, number(&result, "price")?) {
        result.insert("subtotal".into(), number_value(quantity * price));
    }

    if let Some(subtotal) = number(&result, "subtotal")? {
        result.insert("tax".into(), number_value(subtotal * tax_rate));
    }

    if let (Some(subtotal), Some(tax)) = (number(&result, "subtotal")?, number(&result, "tax")?) {
        result.insert("total".into(), number_value(subtotal + tax));
    }

    if let (Some(subtotal), Some(rate)) =
        (number(&result, "subtotal")?, number(&result, "discountRate")?)
    {
        let discount = subtotal * rate;
        result.insert("discount".into(), number_value(discount));
        if let Some(total) = number(&result, "total")? {
            result.insert("total".into(), number_value(total - discount));
        }
    }

    Ok(result)
}

/// Расчёт для предпросмотра: при ошибке возвращаются исходные данные
pub fn calculate(template: &Template, data: &FormData, tax_rate: f64) -> FormData {
    match try_calculate(template, data, tax_rate) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Calculation failed, using input data as is: {}", e);
            data.clone()
        }
    }
}

/// Кнопка «Тест» редактора скриптов: фиксированные данные через правила расчёта
pub fn test_run(tax_rate: f64) -> Value {
    let input = json!({"name": "Test User", "quantity": 5, "price": 10});
    let Value::Object(mut data) = input else {
        return Value::Null;
    };

    if let (Some(quantity), Some(price)) = (
        data.get("quantity").and_then(to_number),
        data.get("price").and_then(to_number),
    ) {
        let subtotal = quantity * price;
        let tax = subtotal * tax_rate;
        data.insert("subtotal".into(), number_value(subtotal));
        data.insert("tax".into(), number_value(tax));
        data.insert("total".into(), number_value(subtotal + tax));
    }
    Value::Object(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_template::{Scripts, TemplateId};
    use chrono::Utc;

    fn template(script: &str) -> Template {
        let mut template = Template::empty(TemplateId::new("t"), Utc::now());
        template.scripts = Scripts::with_calculation(script);
        template
    }

    fn data(value: Value) -> FormData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_invoice_rules() {
        let result = calculate(
            &template(DEFAULT_SCRIPT),
            &data(json!({"quantity": 5, "price": 10})),
            0.08,
        );
        assert_eq!(result["subtotal"], json!(50));
        assert_eq!(result["tax"], json!(4));
        assert_eq!(result["total"], json!(54));
    }

    #[test]
    fn test_discount_reduces_total() {
        let result = calculate(
            &template("x"),
            &data(json!({"quantity": 2, "price": 50, "discountRate": 0.1})),
            0.08,
        );
        assert_eq!(result["subtotal"], json!(100));
        assert_eq!(result["discount"], json!(10));
        assert_eq!(result["total"], json!(98));
    }

    #[test]
    fn test_empty_script_is_passthrough() {
        let input = data(json!({"quantity": 5, "price": 10}));
        assert_eq!(calculate(&template("   "), &input, 0.08), input);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let result = calculate(
            &template("x"),
            &data(json!({"quantity": "3", "price": "2.5"})),
            0.0,
        );
        assert_eq!(result["subtotal"], json!(7.5));
        assert_eq!(result["total"], json!(7.5));
    }

    #[test]
    fn test_subtotal_alone_gets_tax() {
        let result = calculate(&template("x"), &data(json!({"subtotal": 200})), 0.08);
        assert_eq!(result["tax"], json!(16));
        assert_eq!(result["total"], json!(216));
    }

    #[test]
    fn test_non_numeric_returns_input() {
        let input = data(json!({"quantity": "много", "price": 10}));
        assert_eq!(
            try_calculate(&template("x"), &input, 0.08),
            Err(CalculationError::NotANumber {
                field: "quantity".to_string()
            })
        );
        assert_eq!(calculate(&template("x"), &input, 0.08), input);
    }

    #[test]
    fn test_run_fixed_data() {
        let result = test_run(0.08);
        assert_eq!(
            result,
            json!({"name": "Test User", "quantity": 5, "price": 10, "subtotal": 50, "tax": 4, "total": 54})
        );
    }
}
