use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Левая панель с меню шаблонов; сворачивается кнопкой в шапке
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let collapsed = move || !tabs_store.left_open.get();

    view! {
        <aside data-zone="left" class="left" class:left--collapsed=collapsed aria-hidden=move || collapsed().to_string()>
            {children()}
        </aside>
    }
}
