//! Печать страницы: «Печать» в дизайнере и «Экспорт PDF» на странице заполнения

pub fn print_page() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.print() {
                log::error!("window.print() failed: {:?}", e);
            }
        }
        None => log::error!("No window object"),
    }
}
