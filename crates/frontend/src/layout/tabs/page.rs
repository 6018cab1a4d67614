//! Обёртка содержимого таба

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::logging::log;
use leptos::prelude::*;

/// Страница создаётся при открытии таба и живёт до его закрытия.
/// Неактивный таб только скрывается: несохранённые правки дизайнера
/// сохраняются при переключении.
#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active =
        move || key.with_value(|k| tabs_store.active.with(|active| active.as_deref() == Some(k.as_str())));

    log!("📄 Tab page opened: '{}'", tab.key);
    on_cleanup(move || {
        key.with_value(|k| log!("🗑 Tab page closed: '{}'", k));
    });

    let content = render_tab_content(&tab.key, tabs_store);

    view! {
        <section
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key
        >
            {content}
        </section>
    }
}
