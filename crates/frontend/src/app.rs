use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::storage::load_designer_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_designer_config();
    log::info!(
        "Designer config: storage key '{}', canvas {}x{}",
        config.storage.templates_key,
        config.canvas.width,
        config.canvas.height
    );

    // Табы, стек диалогов и настройки доступны всем страницам через контекст
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(config);

    view! {
        <ConfigProvider>
            <AppRoutes />
            <ModalHost />
        </ConfigProvider>
    }
}
