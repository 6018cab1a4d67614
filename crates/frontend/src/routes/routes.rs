use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::HOME;
use crate::layout::Shell;
use leptos::prelude::*;

/// Открыть таб из `?active=`; если открыть нечего, показать главную
fn restore_tabs(tabs_store: AppGlobalContext) {
    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(Vec::is_empty) {
        tabs_store.open_tab(HOME, tab_label_for_key(HOME));
    }
}

/// Единственный «маршрут» приложения: навигация идёт через табы,
/// адрес хранит только ключ активного таба.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    restore_tabs(tabs_store);

    view! {
        <Shell
            sidebar=|| view! { <Sidebar /> }
            content=|| view! { <Tabs /> }
        />
    }
}
