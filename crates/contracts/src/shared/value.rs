//! Приведение значений формы по правилам JS-арифметики и JS-строк.
//!
//! Данные формы хранятся как `serde_json::Map`, потому что схема задаётся
//! пользователем и набор полей заранее неизвестен.

use serde_json::{Map, Number, Value};

/// Данные формы: имя поля → значение
pub type FormData = Map<String, Value>;

/// Числовое значение как в JS (`Number(value)`).
///
/// Возвращает `None` там, где JS дал бы `NaN`.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON-значение из f64; целые хранятся без дробной части.
pub fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        return Value::Number(Number::from(value as i64));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Разбор ввода числового поля с семантикой `parseFloat(text) || 0`.
pub fn parse_float_or_zero(text: &str) -> f64 {
    parse_float_prefix(text)
        .filter(|v| *v != 0.0 && v.is_finite())
        .unwrap_or(0.0)
}

/// Самый длинный числовой префикс строки, как у `parseFloat`.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut best: Option<usize> = None;
    while end < bytes.len() {
        let c = bytes[end];
        match c {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
                best = Some(end);
            }
            b'.' if !seen_dot && !seen_exp => {
                seen_dot = true;
                end += 1;
            }
            b'e' | b'E' if seen_digit && !seen_exp => {
                seen_exp = true;
                end += 1;
                if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
                    end += 1;
                }
            }
            _ => break,
        }
    }

    best.and_then(|e| s[..e].parse::<f64>().ok())
}

/// Истинность значения как в JS (`!!value`).
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Число как в JS: экспонента при |x| >= 1e21 или |x| < 1e-6
fn display_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = f.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", f);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        f.to_string()
    }
}

/// Строковое представление значения как у `String(value)` в JS.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(display_number).unwrap_or_default()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(5)), Some(5.0));
        assert_eq!(to_number(&json!("2.5")), Some(2.5));
        assert_eq!(to_number(&json!("")), Some(0.0));
        assert_eq!(to_number(&json!(true)), Some(1.0));
        assert_eq!(to_number(&Value::Null), Some(0.0));
        assert_eq!(to_number(&json!("abc")), None);
        assert_eq!(to_number(&json!([1])), None);
    }

    #[test]
    fn test_parse_float_or_zero() {
        assert_eq!(parse_float_or_zero("12.5"), 12.5);
        assert_eq!(parse_float_or_zero("  7kg"), 7.0);
        assert_eq!(parse_float_or_zero("-3e2x"), -300.0);
        assert_eq!(parse_float_or_zero("abc"), 0.0);
        assert_eq!(parse_float_or_zero(""), 0.0);
        assert_eq!(parse_float_or_zero("."), 0.0);
    }

    #[test]
    fn test_display_matches_js() {
        assert_eq!(display(&number_value(50.0)), "50");
        assert_eq!(display(&number_value(4.5)), "4.5");
        assert_eq!(display(&json!(true)), "true");
        assert_eq!(display(&json!("text")), "text");
        assert_eq!(display(&json!([1, "a"])), "1,a");
        assert_eq!(display(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn test_display_number_exponent_form() {
        assert_eq!(display(&json!(1e21)), "1e+21");
        assert_eq!(display(&json!(1.5e25)), "1.5e+25");
        assert_eq!(display(&json!(-2e22)), "-2e+22");
        assert_eq!(display(&json!(1e-7)), "1e-7");
        assert_eq!(display(&json!(1.5e-7)), "1.5e-7");
        assert_eq!(display(&json!(1e20)), "100000000000000000000");
        assert_eq!(display(&json!(0.000001)), "0.000001");
        assert_eq!(display(&json!(-0.0)), "0");
        assert_eq!(display(&json!(0.1)), "0.1");
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_number_value_nan_is_null() {
        assert_eq!(number_value(f64::NAN), Value::Null);
    }
}
