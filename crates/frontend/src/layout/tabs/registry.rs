//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::tab_labels::TabKey;
use crate::domain::a001_template::ui::create::TemplateCreate;
use crate::domain::a001_template::ui::designer::TemplateDesigner;
use crate::domain::a001_template::ui::list::TemplateList;
use crate::domain::a001_template::ui::usage::TemplateUse;
use crate::layout::global_context::AppGlobalContext;
use crate::system::pages::home::HomePage;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match TabKey::parse(key) {
        Some(TabKey::Home) => view! { <HomePage /> }.into_any(),
        Some(TabKey::TemplateList) => view! { <TemplateList /> }.into_any(),
        Some(TabKey::TemplateCreate) => view! {
            <TemplateCreate
                tab_key=key_for_close.clone()
                on_cancel=Callback::new(move |_| {
                    tabs_store.close_tab(&key_for_close);
                })
            />
        }
        .into_any(),
        Some(TabKey::TemplateEdit(id)) => {
            log!("✅ Creating TemplateDesigner with id: {}", id);
            view! { <TemplateDesigner id=id tab_key=key_for_close /> }.into_any()
        }
        Some(TabKey::TemplateUse(id)) => {
            log!("✅ Creating TemplateUse with id: {}", id);
            view! {
                <TemplateUse
                    id=id
                    tab_key=key_for_close.clone()
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }
        None => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
