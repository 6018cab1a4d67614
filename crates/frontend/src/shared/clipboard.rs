//! Копирование текста в буфер обмена (Web Clipboard API)

use wasm_bindgen_futures::spawn_local;

/// Скопировать текст и вызвать `on_success`, если браузер разрешил запись
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => on_success(),
                Err(e) => log::warn!("Clipboard write failed: {:?}", e),
            }
        }
    });
}
