//! Шапка приложения: переключатель меню, название, быстрые действия

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{TEMPLATE_CREATE, TEMPLATE_LIST};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let open = move |key: &'static str| tabs_store.open_tab(key, tab_label_for_key(key));
    let unsaved = move || tabs_store.dirty_count();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| tabs_store.toggle_left()
                    title=move || if tabs_store.left_open.get() { "Скрыть меню" } else { "Показать меню" }
                >
                    {move || if tabs_store.left_open.get() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                {icon("layout-template")}
                <span class="top-header__title">"Конструктор шаблонов"</span>
                {move || (unsaved() > 0).then(|| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                        {format!("Не сохранено: {}", unsaved())}
                    </Badge>
                })}
            </div>

            <div class="top-header__actions">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| open(TEMPLATE_LIST)>
                    {icon("list")}
                    " Шаблоны"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(TEMPLATE_CREATE)>
                    {icon("plus")}
                    " Новый шаблон"
                </Button>
            </div>
        </header>
    }
}
