use contracts::shared::tabular::{self, SheetGrid};
use contracts::shared::value::display;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Расширения, которые принимает диалог импорта
pub const SUPPORTED_EXTENSIONS: &str = ".csv,.xlsx,.xls";

/// JS binding для парсинга Excel файлов через SheetJS (см. index.html)
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = parseExcelFile, catch)]
    fn parse_excel_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SheetFormat {
    Csv,
    Excel,
}

fn format_of(file_name: &str) -> Option<SheetFormat> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".csv") {
        Some(SheetFormat::Csv)
    } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
        Some(SheetFormat::Excel)
    } else {
        None
    }
}

pub fn is_supported_file(file_name: &str) -> bool {
    format_of(file_name).is_some()
}

fn unsupported_format() -> String {
    format!(
        "Неподдерживаемый формат файла. Допустимые: {}",
        SUPPORTED_EXTENSIONS
    )
}

/// Проверка имени файла до чтения содержимого
pub fn ensure_supported(file_name: &str) -> Result<(), String> {
    if is_supported_file(file_name) {
        Ok(())
    } else {
        Err(unsupported_format())
    }
}

/// Прочитать выбранный файл в таблицу: CSV как текст, Excel через SheetJS
pub async fn read_sheet_file(file: web_sys::File) -> Result<SheetGrid, String> {
    let name = file.name();
    match format_of(&name) {
        Some(SheetFormat::Csv) => {
            let text = JsFuture::from(file.text())
                .await
                .map_err(|e| format!("Ошибка чтения файла: {:?}", e))?;
            let text = text.as_string().unwrap_or_default();
            tabular::parse_pasted(&text, name).map_err(|e| e.to_string())
        }
        Some(SheetFormat::Excel) => {
            let rows = read_excel_rows(&file).await?;
            tabular::from_raw(rows, name).map_err(|e| e.to_string())
        }
        None => Err(unsupported_format()),
    }
}

async fn read_excel_rows(file: &web_sys::File) -> Result<Vec<Vec<String>>, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Ошибка чтения файла: {:?}", e))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let bytes = uint8_array.to_vec();

    let result = parse_excel_file(&bytes).map_err(|e| format!("Ошибка парсинга Excel: {:?}", e))?;

    let rows: Vec<Vec<Value>> = serde_wasm_bindgen::from_value(result)
        .map_err(|_| "Результат парсинга не является массивом строк".to_string())?;

    Ok(cells_to_text(rows))
}

/// Ячейки SheetJS (строки, числа, null) в текст
fn cells_to_text(rows: Vec<Vec<Value>>) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Value::Null => String::new(),
                    other => display(other),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_detection() {
        assert!(is_supported_file("Data.CSV"));
        assert!(is_supported_file("report.xlsx"));
        assert!(is_supported_file("old.xls"));
        assert!(!is_supported_file("notes.txt"));
    }

    #[test]
    fn test_ensure_supported() {
        assert_eq!(ensure_supported("Budget.XLSX"), Ok(()));
        let err = ensure_supported("photo.png").unwrap_err();
        assert!(err.starts_with("Неподдерживаемый формат файла"));
        assert!(err.ends_with(".csv,.xlsx,.xls"));
        assert!(ensure_supported("csv").is_err());
    }

    #[test]
    fn test_cells_to_text() {
        let rows = vec![vec![json!("Name"), json!(42), json!(null), json!(1.5)]];
        assert_eq!(
            cells_to_text(rows),
            vec![vec!["Name".to_string(), "42".to_string(), String::new(), "1.5".to_string()]]
        );
    }
}
