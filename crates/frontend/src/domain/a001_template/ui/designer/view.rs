use super::canvas::DesignerCanvas;
use super::code_views::{SchemaEditor, ScriptEditor};
use super::import_dialog::ImportDialog;
use super::macro_dialog::MacroDialog;
use super::properties::PropertiesPanel;
use super::ribbon::Ribbon;
use super::samples_dialog::SamplesDialog;
use super::view_model::{DesignerViewModel, ViewMode};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, tab_labels::TEMPLATE_LIST};
use crate::shared::export::export_template;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::print::print_page;
use crate::shared::storage::use_designer_config;
use contracts::domain::a001_template::TemplateCategory;
use leptos::prelude::*;
use thaw::*;

/// Варианты категории; нестандартная категория шаблона тоже попадает в список
fn category_options(current: &TemplateCategory) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = TemplateCategory::selectable()
        .into_iter()
        .map(|c| (c.as_str().to_string(), c.display_name().to_string()))
        .collect();
    if !options.iter().any(|(tag, _)| tag == current.as_str()) {
        options.push((current.as_str().to_string(), current.display_name().to_string()));
    }
    options
}

#[component]
fn DocumentTabBar(vm: DesignerViewModel) -> impl IntoView {
    view! {
        <div class="doc-tabs">
            {move || {
                let (titles, active) = vm.doc_tabs.with(|t| (t.titles().to_vec(), t.active()));
                let closable = titles.len() > 1;
                titles.into_iter().enumerate().map(|(index, title)| view! {
                    <div
                        class="doc-tabs__item"
                        class:doc-tabs__item--active=index == active
                        on:click=move |_| vm.doc_tabs.update(|t| t.activate(index))
                    >
                        <span>{title}</span>
                        {closable.then(|| view! {
                            <button
                                class="doc-tabs__close"
                                title="Закрыть вкладку"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    vm.doc_tabs.update(|t| t.close(index));
                                }
                            >
                                {icon("x")}
                            </button>
                        })}
                    </div>
                }).collect_view()
            }}
            <button class="doc-tabs__add" title="Добавить вкладку" on:click=move |_| vm.doc_tabs.update(|t| t.add())>
                {icon("plus")}
            </button>
        </div>
    }
}

/// Дизайнер шаблона: холст, ленточное меню, свойства, схема и скрипт
#[component]
pub fn TemplateDesigner(id: String, tab_key: String) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let vm = DesignerViewModel::new(use_designer_config(), tab_key, tabs_store);
    vm.load(id);

    let latency_ms = vm.config().ui.simulated_latency_ms;

    let open_import = move |_| {
        modal_stack.push_with_frame(
            Some("width: 760px; max-width: 95vw;".to_string()),
            Some("import-dialog-modal".to_string()),
            move |handle| view! { <ImportDialog vm=vm handle=handle/> }.into_any(),
        );
    };

    let open_macro = move |_| {
        modal_stack.push_with_frame(
            Some("width: 900px; max-width: 95vw;".to_string()),
            Some("macro-dialog-modal".to_string()),
            move |handle| view! { <MacroDialog handle=handle latency_ms=latency_ms/> }.into_any(),
        );
    };

    let open_samples = move |_| {
        modal_stack.push_with_frame(
            Some("width: 480px; max-width: 95vw;".to_string()),
            None,
            move |handle| view! { <SamplesDialog vm=vm handle=handle/> }.into_any(),
        );
    };

    let handle_export = move |_| {
        if let Err(e) = export_template(&vm.current_template()) {
            vm.error.set(Some(e));
        }
    };

    let handle_save = move |_| {
        vm.save_command(Callback::new(move |_| {
            tabs_store.open_tab(TEMPLATE_LIST, tab_label_for_key(TEMPLATE_LIST));
        }));
    };

    view! {
        <div class="template-designer">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layout-template")}
                    <input
                        class="template-designer__name"
                        type="text"
                        placeholder="Название шаблона"
                        prop:value=move || vm.state.with(|s| s.name.clone())
                        on:input=move |ev| vm.set_name(event_target_value(&ev))
                    />
                    <select
                        class="template-designer__category"
                        prop:value=move || vm.state.with(|s| s.category.as_str().to_string())
                        on:change=move |ev| vm.set_category(event_target_value(&ev))
                    >
                        {move || {
                            vm.state
                                .with(|s| category_options(&s.category))
                                .into_iter()
                                .map(|(tag, name)| view! { <option value=tag>{name}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Subtle on_click=open_samples>
                            {icon("book-open")}
                            " Пример"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=open_import>
                            {icon("upload")}
                            " Импорт"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=open_macro>
                            {icon("code")}
                            " Макрос"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=handle_export>
                            {icon("download")}
                            " Экспорт"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| print_page()>
                            {icon("printer")}
                            " Печать"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                            {icon("save")}
                            " Сохранить"
                        </Button>
                    </Flex>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            {move || vm.notice.get().map(|n| view! {
                <div class="info-box template-designer__notice">
                    <span>{n}</span>
                    <button class="info-box__close" on:click=move |_| vm.notice.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! {
                    <Flex justify=FlexJustify::Center>
                        <Spinner label="Загрузка шаблона..."/>
                    </Flex>
                }
            >
                <DocumentTabBar vm=vm/>
                <Ribbon vm=vm/>

                <div class="template-designer__modes">
                    {ViewMode::all().into_iter().map(|mode| view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=move || if vm.view_mode.get() == mode { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                            on_click=move |_| vm.view_mode.set(mode)
                        >
                            {mode.label()}
                        </Button>
                    }).collect_view()}
                </div>

                <div class="template-designer__workspace">
                    {move || match vm.view_mode.get() {
                        ViewMode::Canvas => view! {
                            <DesignerCanvas vm=vm/>
                            <PropertiesPanel vm=vm/>
                        }
                        .into_any(),
                        ViewMode::Schema => view! { <SchemaEditor vm=vm/> }.into_any(),
                        ViewMode::Script => view! { <ScriptEditor vm=vm/> }.into_any(),
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_include_custom() {
        let standard = category_options(&TemplateCategory::Invoice);
        assert_eq!(standard.len(), TemplateCategory::selectable().len());

        let custom = category_options(&TemplateCategory::from("warehouse"));
        assert_eq!(custom.len(), standard.len() + 1);
        assert_eq!(custom.last().map(|(tag, _)| tag.as_str()), Some("warehouse"));
    }
}
