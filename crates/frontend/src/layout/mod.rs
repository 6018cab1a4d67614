pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Каркас приложения: шапка, левая панель с меню шаблонов и область табов.
/// При печати остаётся только содержимое активного таба (см. `@media print`).
#[component]
pub fn Shell(#[prop(into)] sidebar: ViewFn, #[prop(into)] content: ViewFn) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>{sidebar.run()}</left::Left>
                <main class="app-main">
                    <center::Center>{content.run()}</center::Center>
                </main>
            </div>
        </div>
    }
}
