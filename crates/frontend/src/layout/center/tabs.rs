use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
fn TabHeader(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key_for_active = tab.key.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.request_close(&key_for_close);
    };

    view! {
        <div class="tabs__header" class:tabs__header--active=is_active on:click=on_click>
            <span class="tabs__title">{tab.title}</span>
            {tab.dirty.then(|| view! { <span class="tabs__dirty">"*"</span> })}
            <button class="tabs__close" on:click=on_close title="Закрыть">
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                // Заголовки пересоздаются при смене title/dirty, контент нет
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| (tab.key.clone(), tab.title.clone(), tab.dirty)
                    children=move |tab| view! { <TabHeader tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        log!("👶 <For> children function called for: '{}'", tab.key);
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
