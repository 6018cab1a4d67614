/// Выгрузка шаблона в JSON-файл
use contracts::domain::a001_template::Template;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Скачать шаблон как `<имя>.json` в формате localStorage
pub fn export_template(template: &Template) -> Result<(), String> {
    let json = serde_json::to_string_pretty(template)
        .map_err(|e| format!("Ошибка сериализации шаблона: {}", e))?;

    let blob = create_blob(&json, "application/json;charset=utf-8;")?;
    download_blob(&blob, &template_file_name(&template.name))?;

    Ok(())
}

/// Имя файла из названия шаблона: запрещённые символы заменяются на `_`
pub fn template_file_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "template.json".to_string()
    } else {
        format!("{}.json", cleaned)
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_file_name() {
        assert_eq!(template_file_name("Счёт №1"), "Счёт №1.json");
        assert_eq!(template_file_name("a/b:c"), "a_b_c.json");
        assert_eq!(template_file_name("   "), "template.json");
    }
}
